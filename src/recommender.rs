use tracing::{debug, info, warn};

use crate::classifiers::{plausibility_gate, RuleClassifier};
use crate::models::{Crop, Measurements, Recommendation, RejectionReason};
use crate::predictor::CropPredictor;

/// Rules first, model second, with the model's answer gated on plausibility.
///
/// Holds no mutable state; identical inputs always give identical outcomes.
pub struct CropRecommender<P> {
    rules: RuleClassifier,
    predictor: P,
}

impl<P: CropPredictor> CropRecommender<P> {
    pub fn new(predictor: P) -> Self {
        Self {
            rules: RuleClassifier::new(),
            predictor,
        }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub fn recommend(&self, measurements: &Measurements) -> Recommendation {
        if let Err(reason) = measurements.check_bounds() {
            info!(%reason, "Rejected input");
            return Recommendation::Rejected(reason);
        }

        if let Some(crop) = self.rules.classify_measurements(measurements) {
            info!(%crop, "Rule-based recommendation");
            return Recommendation::RuleMatched(crop);
        }

        let label = match self.predictor.predict(&measurements.features()) {
            Ok(label) => label,
            Err(e) => {
                warn!(error = %e, "Model prediction failed");
                return Recommendation::Rejected(RejectionReason::ModelFailure(e.to_string()));
            }
        };
        debug!(%label, "Model candidate");

        let plausible = plausibility_gate::is_plausible(
            &label,
            measurements.temperature,
            measurements.rainfall,
            measurements.ph,
            measurements.humidity,
        );

        match Crop::parse(&label) {
            Some(crop) if plausible => {
                info!(%crop, "Model recommendation");
                Recommendation::ModelMatched(crop)
            }
            _ => {
                info!(%label, "Model prediction failed plausibility check");
                Recommendation::Rejected(RejectionReason::UnrealisticPrediction)
            }
        }
    }

    /// Recommend from a form-encoded body. Malformed input becomes a rejection.
    pub fn recommend_form(&self, body: &str) -> Recommendation {
        match Measurements::from_form(body) {
            Ok(measurements) => self.recommend(&measurements),
            Err(e) => {
                info!(error = %e, "Rejected form input");
                Recommendation::Rejected(RejectionReason::InvalidInput(e.to_string()))
            }
        }
    }
}
