use serde::Serialize;
use std::io::{Read, Write};
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{Measurements, Recommendation, RecommendationKind};
use crate::predictor::CropPredictor;
use crate::recommender::CropRecommender;

/// One scored row in batch output. Fields are spelled out because the csv
/// writer cannot serialize flattened structs.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
    pub outcome: RecommendationKind,
    pub crop: Option<String>,
    pub message: String,
}

impl BatchRow {
    pub fn new(m: &Measurements, recommendation: &Recommendation) -> Self {
        Self {
            nitrogen: m.nitrogen,
            phosphorus: m.phosphorus,
            potassium: m.potassium,
            temperature: m.temperature,
            humidity: m.humidity,
            ph: m.ph,
            rainfall: m.rainfall,
            outcome: recommendation.kind(),
            crop: recommendation.crop().map(|c| c.to_string()),
            message: recommendation.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total_rows: usize,
    pub rule_matched: usize,
    pub model_matched: usize,
    pub rejected: usize,
}

impl BatchSummary {
    fn record(&mut self, kind: RecommendationKind) {
        self.total_rows += 1;
        match kind {
            RecommendationKind::RuleMatched => self.rule_matched += 1,
            RecommendationKind::ModelMatched => self.model_matched += 1,
            RecommendationKind::Rejected => self.rejected += 1,
        }
    }

    fn percentage(&self, count: usize) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.total_rows as f64
        }
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Batch Recommendation Report ===\n");
        summary.push_str(&format!("Total Rows: {}\n", self.total_rows));
        summary.push_str(&format!(
            "Rule Matched: {} ({:.1}%)\n",
            self.rule_matched,
            self.percentage(self.rule_matched)
        ));
        summary.push_str(&format!(
            "Model Matched: {} ({:.1}%)\n",
            self.model_matched,
            self.percentage(self.model_matched)
        ));
        summary.push_str(&format!(
            "Rejected: {} ({:.1}%)\n",
            self.rejected,
            self.percentage(self.rejected)
        ));

        summary
    }
}

/// Scores CSV rows of measurements one at a time
pub struct BatchProcessor<'a, P> {
    recommender: &'a CropRecommender<P>,
}

impl<'a, P: CropPredictor> BatchProcessor<'a, P> {
    pub fn new(recommender: &'a CropRecommender<P>) -> Self {
        Self { recommender }
    }

    /// Read rows with `N,P,K,temperature,humidity,ph,rainfall` headers and
    /// write one scored row per input. Unparseable rows abort the batch.
    pub fn process<R: Read, W: Write>(&self, input: R, output: W) -> Result<BatchSummary> {
        let mut reader = csv::Reader::from_reader(input);
        let mut writer = csv::Writer::from_writer(output);
        let mut summary = BatchSummary::default();

        for (line, row) in reader.deserialize::<Measurements>().enumerate() {
            let measurements = row.inspect_err(|e| warn!(line = line + 2, error = %e, "Bad row"))?;

            let recommendation = self.recommender.recommend(&measurements);
            debug!(line = line + 2, outcome = recommendation.kind().as_str(), "Scored row");

            summary.record(recommendation.kind());
            writer.serialize(BatchRow::new(&measurements, &recommendation))?;
        }

        writer.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecommendError;
    use crate::predictor::NoModel;
    use pretty_assertions::assert_eq;

    const INPUT: &str = "N,P,K,temperature,humidity,ph,rainfall,label\n\
                         90,42,43,29,75,6,1600,rice\n\
                         60,55,44,23,82,7.8,263,maize\n\
                         90,42,43,29,75,15,1600,rice\n";

    #[test]
    fn test_process_rows() {
        let recommender = CropRecommender::new(NoModel);
        let processor = BatchProcessor::new(&recommender);

        let mut output = Vec::new();
        let summary = processor.process(INPUT.as_bytes(), &mut output).unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                total_rows: 3,
                rule_matched: 1,
                model_matched: 0,
                rejected: 2,
            }
        );

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "N,P,K,temperature,humidity,ph,rainfall,outcome,crop,message"
        );
        assert!(lines[1].starts_with("90.0,42.0,43.0,29.0,75.0,6.0,1600.0,rule_matched,rice,"));
        assert!(lines[2].contains("rejected,,"));
        assert!(lines[2].contains("No model artifact loaded"));
        assert!(lines[3].contains("❌ pH must be 0-14"));
    }

    #[test]
    fn test_nan_readings_rejected() {
        let recommender = CropRecommender::new(NoModel);
        let processor = BatchProcessor::new(&recommender);

        let input = "N,P,K,temperature,humidity,ph,rainfall\n\
                     90,42,43,29,75,NaN,1600\n\
                     90,42,43,29,NaN,6,300\n";
        let mut output = Vec::new();
        let summary = processor.process(input.as_bytes(), &mut output).unwrap();

        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.rule_matched, 0);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].contains("rejected,,❌ pH must be 0-14"));
        assert!(lines[2].contains("rejected,,❌ Humidity must be 0-100%"));
    }

    #[test]
    fn test_bad_row_aborts() {
        let recommender = CropRecommender::new(NoModel);
        let processor = BatchProcessor::new(&recommender);

        let input = "N,P,K,temperature,humidity,ph,rainfall\n90,42,43,hot,75,6,1600\n";
        let result = processor.process(input.as_bytes(), Vec::new());
        assert!(matches!(result, Err(RecommendError::Csv(_))));
    }

    #[test]
    fn test_summary_text() {
        let summary = BatchSummary {
            total_rows: 4,
            rule_matched: 1,
            model_matched: 1,
            rejected: 2,
        };
        let text = summary.summary();
        assert!(text.contains("Rule Matched: 1 (25.0%)"));
        assert!(text.contains("Rejected: 2 (50.0%)"));
        assert_eq!(BatchSummary::default().percentage(0), 0.0);
    }
}
