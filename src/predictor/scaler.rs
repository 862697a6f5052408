use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};

/// Per-feature min-max scaling fitted offline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub data_min: Vec<f64>,
    pub data_max: Vec<f64>,
}

impl MinMaxScaler {
    pub fn new(data_min: Vec<f64>, data_max: Vec<f64>) -> Result<Self> {
        let scaler = Self { data_min, data_max };
        scaler.check()?;
        Ok(scaler)
    }

    pub fn n_features(&self) -> usize {
        self.data_min.len()
    }

    pub fn check(&self) -> Result<()> {
        if self.data_min.len() != self.data_max.len() {
            return Err(RecommendError::InvalidModel(format!(
                "scaler has {} minimums but {} maximums",
                self.data_min.len(),
                self.data_max.len()
            )));
        }

        for (i, (min, max)) in self.data_min.iter().zip(&self.data_max).enumerate() {
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(RecommendError::InvalidModel(format!(
                    "scaler feature {} has invalid range [{}, {}]",
                    i, min, max
                )));
            }
        }

        Ok(())
    }

    /// Map each feature to `(x - min) / (max - min)`. Constant features use a
    /// scale of 1. Values outside the fitted range are not clipped.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.n_features() {
            return Err(RecommendError::FeatureMismatch {
                expected: self.n_features(),
                actual: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.data_min.iter().zip(&self.data_max))
            .map(|(x, (min, max))| {
                let range = max - min;
                let range = if range == 0.0 { 1.0 } else { range };
                (x - min) / range
            })
            .collect())
    }
}
