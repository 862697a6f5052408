pub mod crop;
pub mod crop_rule;
pub mod measurements;
pub mod recommendation;

pub use crop::Crop;
pub use crop_rule::{find_rule, rule_for, CropRule, ValueRange, CROP_RULES};
pub use measurements::Measurements;
pub use recommendation::{Recommendation, RecommendationKind, RejectionReason};
