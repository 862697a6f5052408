use serde::Serialize;

use crate::models::Crop;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum RejectionReason {
    PhOutOfRange,
    HumidityOutOfRange,
    UnrealisticPrediction,
    InvalidInput(String),
    ModelFailure(String),
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::PhOutOfRange => write!(f, "pH must be 0-14"),
            RejectionReason::HumidityOutOfRange => write!(f, "Humidity must be 0-100%"),
            RejectionReason::UnrealisticPrediction => {
                write!(f, "No suitable crop (unrealistic prediction)")
            }
            RejectionReason::InvalidInput(message) | RejectionReason::ModelFailure(message) => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    RuleMatched,
    ModelMatched,
    Rejected,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::RuleMatched => "rule_matched",
            RecommendationKind::ModelMatched => "model_matched",
            RecommendationKind::Rejected => "rejected",
        }
    }
}

/// Result of a single recommendation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    RuleMatched(Crop),
    ModelMatched(Crop),
    Rejected(RejectionReason),
}

impl Recommendation {
    pub fn kind(&self) -> RecommendationKind {
        match self {
            Recommendation::RuleMatched(_) => RecommendationKind::RuleMatched,
            Recommendation::ModelMatched(_) => RecommendationKind::ModelMatched,
            Recommendation::Rejected(_) => RecommendationKind::Rejected,
        }
    }

    pub fn crop(&self) -> Option<Crop> {
        match self {
            Recommendation::RuleMatched(crop) | Recommendation::ModelMatched(crop) => Some(*crop),
            Recommendation::Rejected(_) => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Recommendation::Rejected(_))
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::RuleMatched(crop) => write!(
                f,
                "✅ Best Crop: {} (based on agri rules)",
                crop.as_str().to_uppercase()
            ),
            Recommendation::ModelMatched(crop) => write!(
                f,
                "🌿 Suggested Crop: {} ✅ [ML prediction]",
                crop.as_str().to_uppercase()
            ),
            Recommendation::Rejected(reason @ RejectionReason::UnrealisticPrediction) => {
                write!(f, "⚠️ {}", reason)
            }
            Recommendation::Rejected(reason) => write!(f, "❌ {}", reason),
        }
    }
}
