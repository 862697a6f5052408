pub mod classifiers;
pub mod cli;
pub mod error;
pub mod models;
pub mod predictor;
pub mod processors;
pub mod recommender;
pub mod utils;

pub use error::{RecommendError, Result};
pub use models::{Crop, Measurements, Recommendation, RejectionReason};
pub use predictor::{CropPredictor, ModelBundle, NoModel};
pub use recommender::CropRecommender;
