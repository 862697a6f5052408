use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommendError>;

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Feature vector has {actual} values, expected {expected}")]
    FeatureMismatch { expected: usize, actual: usize },

    #[error("Predicted label index {0} has no class")]
    UnknownLabel(usize),

    #[error("Invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("No model artifact loaded")]
    ModelUnavailable,

    #[error("Unknown crop: {0}")]
    UnknownCrop(String),
}
