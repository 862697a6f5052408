use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{RecommendError, Result};
use crate::predictor::{CropPredictor, LabelEncoder, MinMaxScaler, NearestCentroid};
use crate::utils::constants::FEATURE_COUNT;

/// Inference artifact: scaler, classifier and label encoder, loaded once at
/// startup and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
    pub scaler: MinMaxScaler,
    pub encoder: LabelEncoder,
    pub classifier: NearestCentroid,
}

impl ModelBundle {
    pub fn new(
        scaler: MinMaxScaler,
        encoder: LabelEncoder,
        classifier: NearestCentroid,
    ) -> Result<Self> {
        let bundle = Self {
            scaler,
            encoder,
            classifier,
        };
        bundle.check()?;
        Ok(bundle)
    }

    /// Read a JSON model artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let bundle: ModelBundle = serde_json::from_reader(BufReader::new(file))?;
        bundle.check()?;

        info!(
            path = %path.display(),
            classes = bundle.encoder.len(),
            "Loaded model artifact"
        );
        Ok(bundle)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let bundle: ModelBundle = serde_json::from_str(json)?;
        bundle.check()?;
        Ok(bundle)
    }

    /// Validate that the three parts agree on shape
    pub fn check(&self) -> Result<()> {
        self.scaler.check()?;

        if self.scaler.n_features() != FEATURE_COUNT {
            return Err(RecommendError::InvalidModel(format!(
                "scaler expects {} features, model input has {}",
                self.scaler.n_features(),
                FEATURE_COUNT
            )));
        }

        if self.encoder.is_empty() {
            return Err(RecommendError::InvalidModel(
                "label encoder has no classes".to_string(),
            ));
        }

        if self.encoder.len() != self.classifier.n_classes() {
            return Err(RecommendError::InvalidModel(format!(
                "{} classes but {} centroids",
                self.encoder.len(),
                self.classifier.n_classes()
            )));
        }

        if let Some((i, centroid)) = self
            .classifier
            .centroids
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != FEATURE_COUNT)
        {
            return Err(RecommendError::InvalidModel(format!(
                "centroid {} has {} values, expected {}",
                i,
                centroid.len(),
                FEATURE_COUNT
            )));
        }

        Ok(())
    }
}

impl CropPredictor for ModelBundle {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<String> {
        let scaled = self.scaler.transform(features)?;
        let index = self.classifier.predict(&scaled)?;
        let label = self.encoder.inverse_transform(index)?;

        debug!(index, label, "Model prediction");
        Ok(label.to_string())
    }
}
