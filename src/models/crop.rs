use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RecommendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Banana,
    Sugarcane,
    Cotton,
    Rice,
    Maize,
    Wheat,
    Apple,
    Coffee,
    Mungbean,
}

impl Crop {
    pub const ALL: [Crop; 9] = [
        Crop::Banana,
        Crop::Sugarcane,
        Crop::Cotton,
        Crop::Rice,
        Crop::Maize,
        Crop::Wheat,
        Crop::Apple,
        Crop::Coffee,
        Crop::Mungbean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Banana => "banana",
            Crop::Sugarcane => "sugarcane",
            Crop::Cotton => "cotton",
            Crop::Rice => "rice",
            Crop::Maize => "maize",
            Crop::Wheat => "wheat",
            Crop::Apple => "apple",
            Crop::Coffee => "coffee",
            Crop::Mungbean => "mungbean",
        }
    }

    /// Look up a crop by its exact lowercase identifier
    pub fn parse(s: &str) -> Option<Self> {
        Crop::ALL.into_iter().find(|crop| crop.as_str() == s)
    }
}

impl FromStr for Crop {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crop::parse(s).ok_or_else(|| RecommendError::UnknownCrop(s.to_string()))
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
