pub mod bundle;
pub mod centroid;
pub mod label_encoder;
pub mod scaler;

pub use bundle::ModelBundle;
pub use centroid::NearestCentroid;
pub use label_encoder::LabelEncoder;
pub use scaler::MinMaxScaler;

use crate::error::{RecommendError, Result};
use crate::utils::constants::FEATURE_COUNT;

/// Learned fallback consulted when no agronomic rule fires.
///
/// Takes raw features in `FEATURE_NAMES` order and returns a crop label.
/// Any scaling or label decoding is the implementation's concern.
pub trait CropPredictor {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<String>;
}

impl<P: CropPredictor + ?Sized> CropPredictor for Box<P> {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<String> {
        (**self).predict(features)
    }
}

impl<P: CropPredictor + ?Sized> CropPredictor for &P {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<String> {
        (**self).predict(features)
    }
}

/// Stand-in used when no model artifact is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModel;

impl CropPredictor for NoModel {
    fn predict(&self, _features: &[f64; FEATURE_COUNT]) -> Result<String> {
        Err(RecommendError::ModelUnavailable)
    }
}
