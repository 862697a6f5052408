pub mod plausibility_gate;
pub mod rule_classifier;

pub use plausibility_gate::{
    assess, describe, is_plausible, Dimension, PlausibilityReport, RangeViolation,
};
pub use rule_classifier::{ClassificationRule, RuleClassifier, RuleMatch, CLASSIFICATION_RULES};
