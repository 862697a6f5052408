use std::ops::{Bound, RangeBounds};
use tracing::debug;

use crate::models::{Crop, Measurements};
use crate::utils::constants::{MAX_RULE_PH, MAX_RULE_TEMP, MIN_RULE_PH, MIN_RULE_TEMP};

pub type Band = (Bound<f64>, Bound<f64>);

const ANY: Band = (Bound::Unbounded, Bound::Unbounded);

const fn between(low: f64, high: f64) -> Band {
    (Bound::Included(low), Bound::Included(high))
}

const fn at_least(low: f64) -> Band {
    (Bound::Included(low), Bound::Unbounded)
}

const fn at_most(high: f64) -> Band {
    (Bound::Unbounded, Bound::Included(high))
}

/// A threshold rule: every band must contain its reading for the crop to match
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub crop: Crop,
    pub temperature: Band,
    pub humidity: Band,
    pub ph: Band,
    pub rainfall: Band,
}

impl ClassificationRule {
    pub fn matches(&self, temperature: f64, humidity: f64, ph: f64, rainfall: f64) -> bool {
        self.temperature.contains(&temperature)
            && self.humidity.contains(&humidity)
            && self.ph.contains(&ph)
            && self.rainfall.contains(&rainfall)
    }
}

/// Rules in priority order, first match wins. Rice is checked ahead of the
/// temperature bands because its envelope overlaps banana's.
pub const CLASSIFICATION_RULES: [ClassificationRule; 8] = [
    ClassificationRule {
        crop: Crop::Rice,
        temperature: between(20.0, 38.0),
        humidity: at_least(60.0),
        ph: at_most(6.5),
        rainfall: at_least(150.0),
    },
    // temperature >= 24
    ClassificationRule {
        crop: Crop::Banana,
        temperature: at_least(24.0),
        humidity: at_least(70.0),
        ph: ANY,
        rainfall: at_least(1500.0),
    },
    ClassificationRule {
        crop: Crop::Sugarcane,
        temperature: at_least(24.0),
        humidity: ANY,
        ph: ANY,
        rainfall: between(200.0, 500.0),
    },
    ClassificationRule {
        crop: Crop::Cotton,
        temperature: at_least(24.0),
        humidity: ANY,
        ph: ANY,
        rainfall: at_most(120.0),
    },
    // 18 <= temperature < 24
    ClassificationRule {
        crop: Crop::Maize,
        temperature: (Bound::Included(18.0), Bound::Excluded(24.0)),
        humidity: ANY,
        ph: ANY,
        rainfall: between(100.0, 150.0),
    },
    ClassificationRule {
        crop: Crop::Wheat,
        temperature: (Bound::Included(18.0), Bound::Excluded(24.0)),
        humidity: ANY,
        ph: ANY,
        rainfall: between(75.0, 120.0),
    },
    // temperature <= 18
    ClassificationRule {
        crop: Crop::Apple,
        temperature: at_most(18.0),
        humidity: at_least(50.0),
        ph: ANY,
        rainfall: at_least(1000.0),
    },
    ClassificationRule {
        crop: Crop::Mungbean,
        temperature: at_most(18.0),
        humidity: ANY,
        ph: ANY,
        rainfall: between(400.0, 700.0),
    },
];

/// Which rule fired for a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub index: usize,
    pub crop: Crop,
}

pub struct RuleClassifier {
    rules: &'static [ClassificationRule],
}

impl RuleClassifier {
    pub fn new() -> Self {
        Self {
            rules: &CLASSIFICATION_RULES,
        }
    }

    pub fn rules(&self) -> &'static [ClassificationRule] {
        self.rules
    }

    /// Pick a crop from threshold rules alone. N, P and K are not consulted.
    #[allow(clippy::too_many_arguments)]
    pub fn classify(
        &self,
        _nitrogen: f64,
        _phosphorus: f64,
        _potassium: f64,
        temperature: f64,
        humidity: f64,
        ph: f64,
        rainfall: f64,
    ) -> Option<Crop> {
        self.explain(temperature, humidity, ph, rainfall)
            .map(|matched| matched.crop)
    }

    pub fn classify_measurements(&self, m: &Measurements) -> Option<Crop> {
        self.classify(
            m.nitrogen,
            m.phosphorus,
            m.potassium,
            m.temperature,
            m.humidity,
            m.ph,
            m.rainfall,
        )
    }

    /// Find the first rule that fires, after the hard rejection guard
    pub fn explain(
        &self,
        temperature: f64,
        humidity: f64,
        ph: f64,
        rainfall: f64,
    ) -> Option<RuleMatch> {
        if is_hard_rejected(temperature, ph) {
            debug!(temperature, ph, "Outside rule classifier limits");
            return None;
        }

        let matched = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(temperature, humidity, ph, rainfall))
            .map(|(index, rule)| RuleMatch {
                index,
                crop: rule.crop,
            });

        match matched {
            Some(m) => debug!(rule = m.index, crop = %m.crop, "Rule matched"),
            None => debug!("No rule matched"),
        }

        matched
    }
}

impl Default for RuleClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn is_hard_rejected(temperature: f64, ph: f64) -> bool {
    temperature < MIN_RULE_TEMP
        || temperature > MAX_RULE_TEMP
        || ph < MIN_RULE_PH
        || ph > MAX_RULE_PH
}
