use serde::Serialize;

use crate::models::Crop;

/// Inclusive `[low, high]` range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
}

impl ValueRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Agronomic growing envelope for one crop
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropRule {
    pub crop: Crop,
    pub temperature: ValueRange,
    pub rainfall: ValueRange,
    pub humidity: ValueRange,
    pub ph: ValueRange,
}

impl CropRule {
    const fn new(
        crop: Crop,
        temperature: (f64, f64),
        rainfall: (f64, f64),
        humidity: (f64, f64),
        ph: (f64, f64),
    ) -> Self {
        Self {
            crop,
            temperature: ValueRange::new(temperature.0, temperature.1),
            rainfall: ValueRange::new(rainfall.0, rainfall.1),
            humidity: ValueRange::new(humidity.0, humidity.1),
            ph: ValueRange::new(ph.0, ph.1),
        }
    }
}

/// Fixed crop envelope table used to sanity-check model predictions
pub const CROP_RULES: [CropRule; 9] = [
    CropRule::new(Crop::Banana, (24.0, 35.0), (1500.0, 2500.0), (70.0, 100.0), (5.5, 7.0)),
    CropRule::new(Crop::Sugarcane, (25.0, 35.0), (200.0, 500.0), (60.0, 90.0), (6.0, 7.5)),
    CropRule::new(Crop::Cotton, (21.0, 35.0), (50.0, 120.0), (30.0, 80.0), (6.0, 8.0)),
    CropRule::new(Crop::Rice, (20.0, 38.0), (150.0, 300.0), (60.0, 100.0), (5.0, 6.5)),
    CropRule::new(Crop::Maize, (18.0, 35.0), (100.0, 150.0), (50.0, 80.0), (5.5, 7.0)),
    CropRule::new(Crop::Wheat, (12.0, 25.0), (75.0, 120.0), (40.0, 80.0), (6.0, 7.0)),
    CropRule::new(Crop::Apple, (10.0, 24.0), (1000.0, 1500.0), (50.0, 80.0), (6.0, 7.0)),
    CropRule::new(Crop::Coffee, (15.0, 30.0), (1000.0, 2000.0), (60.0, 90.0), (5.0, 6.5)),
    CropRule::new(Crop::Mungbean, (25.0, 35.0), (400.0, 700.0), (50.0, 80.0), (6.0, 7.5)),
];

pub fn rule_for(crop: Crop) -> Option<&'static CropRule> {
    CROP_RULES.iter().find(|rule| rule.crop == crop)
}

/// Look up a crop rule by identifier as emitted by the model
pub fn find_rule(crop_id: &str) -> Option<&'static CropRule> {
    Crop::parse(crop_id).and_then(rule_for)
}
