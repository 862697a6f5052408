use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::form_urlencoded;
use validator::Validate;

use crate::error::{RecommendError, Result};
use crate::models::RejectionReason;
use crate::utils::constants::{
    FEATURE_COUNT, FEATURE_NAMES, MAX_HUMIDITY, MAX_PH, MIN_HUMIDITY, MIN_PH,
};

/// One set of soil and climate readings for a field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Measurements {
    #[serde(rename = "N")]
    pub nitrogen: f64,

    #[serde(rename = "P")]
    pub phosphorus: f64,

    #[serde(rename = "K")]
    pub potassium: f64,

    // °C
    pub temperature: f64,

    // Relative humidity, %
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,

    #[validate(range(min = 0.0, max = 14.0))]
    pub ph: f64,

    // mm
    pub rainfall: f64,
}

impl Measurements {
    pub fn new(
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
        temperature: f64,
        humidity: f64,
        ph: f64,
        rainfall: f64,
    ) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
        }
    }

    /// Parse a form-encoded body such as `N=90&P=42&K=43&temperature=29&...`.
    ///
    /// Field names follow `FEATURE_NAMES`. When a field is repeated the first
    /// occurrence is used; unrelated fields are ignored.
    pub fn from_form(body: &str) -> Result<Self> {
        let mut fields: HashMap<String, String> = HashMap::new();
        for (key, value) in form_urlencoded::parse(body.as_bytes()) {
            fields
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }

        let mut values = [0.0; FEATURE_COUNT];
        for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
            let raw = fields
                .get(name)
                .ok_or_else(|| RecommendError::MissingField(name.to_string()))?;
            *slot = parse_value(name, raw)?;
        }

        Ok(Self::from_features(values))
    }

    pub fn from_features(features: [f64; FEATURE_COUNT]) -> Self {
        let [nitrogen, phosphorus, potassium, temperature, humidity, ph, rainfall] = features;
        Self::new(
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
        )
    }

    /// Feature vector in model order: N, P, K, temperature, humidity, pH, rainfall
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }

    /// Check the physical bounds of pH and humidity. pH is reported first.
    ///
    /// NaN slips past the derived range checks, so each bound is also tested
    /// as an inclusive range.
    pub fn check_bounds(&self) -> std::result::Result<(), RejectionReason> {
        let errors = self.validate().err();
        let failed = |field: &str| {
            errors
                .as_ref()
                .is_some_and(|e| e.field_errors().contains_key(field))
        };

        if failed("ph") || !(MIN_PH..=MAX_PH).contains(&self.ph) {
            return Err(RejectionReason::PhOutOfRange);
        }
        if failed("humidity") || !(MIN_HUMIDITY..=MAX_HUMIDITY).contains(&self.humidity) {
            return Err(RejectionReason::HumidityOutOfRange);
        }

        Ok(())
    }
}

fn parse_value(name: &str, raw: &str) -> Result<f64> {
    let value = raw.trim().parse::<f64>().map_err(|_| {
        RecommendError::InvalidFormat(format!(
            "could not convert {} value '{}' to float",
            name, raw
        ))
    })?;

    if !value.is_finite() {
        return Err(RecommendError::InvalidFormat(format!(
            "{} must be a finite number, got '{}'",
            name, raw
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_form() {
        let m = Measurements::from_form(
            "N=90&P=42&K=43&temperature=20.87&humidity=82.0&ph=6.5&rainfall=202.93",
        )
        .unwrap();

        assert_eq!(
            m,
            Measurements::new(90.0, 42.0, 43.0, 20.87, 82.0, 6.5, 202.93)
        );
    }

    #[test]
    fn test_from_form_decoding_and_extra_fields() {
        let m = Measurements::from_form(
            "submit=Predict&N=+90+&P=42&K=43&temperature=2.9e1&humidity=75&ph=6&rainfall=1600&N=1",
        )
        .unwrap();

        assert_eq!(m.nitrogen, 90.0);
        assert_eq!(m.temperature, 29.0);
    }

    #[test]
    fn test_from_form_missing_field() {
        let err = Measurements::from_form("N=90&P=42&K=43&temperature=29&humidity=75&ph=6")
            .unwrap_err();
        assert!(matches!(err, RecommendError::MissingField(ref f) if f == "rainfall"));
    }

    #[test]
    fn test_from_form_bad_number() {
        let err = Measurements::from_form(
            "N=abc&P=42&K=43&temperature=29&humidity=75&ph=6&rainfall=1600",
        )
        .unwrap_err();
        assert!(matches!(err, RecommendError::InvalidFormat(_)));
        assert!(err.to_string().contains("'abc'"));

        let err = Measurements::from_form(
            "N=90&P=42&K=43&temperature=NaN&humidity=75&ph=6&rainfall=1600",
        )
        .unwrap_err();
        assert!(matches!(err, RecommendError::InvalidFormat(_)));
    }

    #[test]
    fn test_features_order() {
        let m = Measurements::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0);
        assert_eq!(m.features(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(Measurements::from_features(m.features()), m);
    }

    #[test]
    fn test_check_bounds() {
        let ok = Measurements::new(90.0, 42.0, 43.0, 29.0, 75.0, 6.0, 1600.0);
        assert!(ok.check_bounds().is_ok());

        let edges = Measurements::new(0.0, 0.0, 0.0, 0.0, 100.0, 14.0, 0.0);
        assert!(edges.check_bounds().is_ok());

        let acid = Measurements { ph: 15.0, ..ok };
        assert_eq!(acid.check_bounds(), Err(RejectionReason::PhOutOfRange));

        let damp = Measurements { humidity: 100.5, ..ok };
        assert_eq!(damp.check_bounds(), Err(RejectionReason::HumidityOutOfRange));

        // pH is reported ahead of humidity
        let both = Measurements {
            ph: -1.0,
            humidity: -1.0,
            ..ok
        };
        assert_eq!(both.check_bounds(), Err(RejectionReason::PhOutOfRange));
    }

    #[test]
    fn test_check_bounds_rejects_nan() {
        let ok = Measurements::new(90.0, 42.0, 43.0, 29.0, 75.0, 6.0, 1600.0);

        let ph = Measurements { ph: f64::NAN, ..ok };
        assert_eq!(ph.check_bounds(), Err(RejectionReason::PhOutOfRange));

        let humidity = Measurements {
            humidity: f64::NAN,
            ..ok
        };
        assert_eq!(humidity.check_bounds(), Err(RejectionReason::HumidityOutOfRange));

        let infinite = Measurements {
            ph: f64::INFINITY,
            ..ok
        };
        assert_eq!(infinite.check_bounds(), Err(RejectionReason::PhOutOfRange));
    }

    #[test]
    fn test_csv_headers_deserialize() {
        let data = "N,P,K,temperature,humidity,ph,rainfall,label\n\
                    90,42,43,20.87,82.00,6.50,202.93,rice\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<Measurements> = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rainfall, 202.93);
    }
}
