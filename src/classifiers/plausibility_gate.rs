use tracing::debug;

use crate::models::{find_rule, Crop, CropRule, Measurements, ValueRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Temperature,
    Rainfall,
    Ph,
    Humidity,
}

impl Dimension {
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Temperature => "temperature",
            Dimension::Rainfall => "rainfall",
            Dimension::Ph => "pH",
            Dimension::Humidity => "humidity",
        }
    }

    pub fn units(&self) -> &'static str {
        match self {
            Dimension::Temperature => "°C",
            Dimension::Rainfall => "mm",
            Dimension::Ph => "",
            Dimension::Humidity => "%",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    pub dimension: Dimension,
    pub value: f64,
    pub range: ValueRange,
}

impl std::fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}{} is outside {}{}",
            self.dimension.display_name(),
            self.value,
            self.dimension.units(),
            self.range,
            self.dimension.units()
        )
    }
}

/// Per-dimension outcome of checking a crop against its envelope
#[derive(Debug, Clone, PartialEq)]
pub struct PlausibilityReport {
    pub crop: Crop,
    pub violations: Vec<RangeViolation>,
}

impl PlausibilityReport {
    pub fn is_plausible(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        if self.is_plausible() {
            summary.push_str(&format!("{} is plausible for these conditions\n", self.crop));
        } else {
            summary.push_str(&format!(
                "{} is not plausible ({} range violations):\n",
                self.crop,
                self.violations.len()
            ));
            for violation in &self.violations {
                summary.push_str(&format!("  - {}\n", violation));
            }
        }

        summary
    }
}

/// True iff the crop is in the rule table and every reading lies inside its
/// inclusive range. Unknown crops are never plausible.
pub fn is_plausible(
    crop_id: &str,
    temperature: f64,
    rainfall: f64,
    ph: f64,
    humidity: f64,
) -> bool {
    match find_rule(crop_id) {
        Some(rule) => violations(rule, temperature, rainfall, ph, humidity).is_empty(),
        None => {
            debug!(crop = crop_id, "Crop has no plausibility rule");
            false
        }
    }
}

/// Check a known crop against measurements, listing every violated range
pub fn assess(crop: Crop, m: &Measurements) -> PlausibilityReport {
    let violations = crate::models::rule_for(crop)
        .map(|rule| violations(rule, m.temperature, m.rainfall, m.ph, m.humidity))
        .unwrap_or_default();

    PlausibilityReport { crop, violations }
}

/// Human-readable verdict for a crop name. Names without a rule get the same
/// not-plausible answer as `is_plausible`.
pub fn describe(crop_id: &str, m: &Measurements) -> String {
    match crop_id.parse::<Crop>() {
        Ok(crop) => assess(crop, m).summary(),
        Err(_) => {
            debug!(crop = crop_id, "Crop has no plausibility rule");
            format!("{} is not plausible (no known ranges for this crop)\n", crop_id)
        }
    }
}

fn violations(
    rule: &CropRule,
    temperature: f64,
    rainfall: f64,
    ph: f64,
    humidity: f64,
) -> Vec<RangeViolation> {
    let checks = [
        (Dimension::Temperature, temperature, rule.temperature),
        (Dimension::Rainfall, rainfall, rule.rainfall),
        (Dimension::Ph, ph, rule.ph),
        (Dimension::Humidity, humidity, rule.humidity),
    ];

    checks
        .into_iter()
        .filter(|(_, value, range)| !range.contains(*value))
        .map(|(dimension, value, range)| RangeViolation {
            dimension,
            value,
            range,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rice_boundaries() {
        assert!(is_plausible("rice", 20.0, 150.0, 5.0, 60.0));
        assert!(is_plausible("rice", 38.0, 300.0, 6.5, 100.0));
        assert!(!is_plausible("rice", 19.9, 150.0, 5.0, 60.0));
        assert!(!is_plausible("rice", 20.0, 300.1, 5.0, 60.0));
        assert!(!is_plausible("rice", 20.0, 150.0, 4.9, 60.0));
        assert!(!is_plausible("rice", 20.0, 150.0, 5.0, 59.9));
    }

    #[test]
    fn test_unknown_crop_never_plausible() {
        assert!(!is_plausible("jute", 25.0, 175.0, 6.5, 80.0));
        assert!(!is_plausible("", 25.0, 175.0, 6.5, 80.0));
        assert!(!is_plausible("RICE", 25.0, 200.0, 6.0, 80.0));
    }

    #[test]
    fn test_every_crop_plausible_at_range_midpoint() {
        for rule in &crate::models::CROP_RULES {
            let mid = |r: ValueRange| (r.low + r.high) / 2.0;
            assert!(
                is_plausible(
                    rule.crop.as_str(),
                    mid(rule.temperature),
                    mid(rule.rainfall),
                    mid(rule.ph),
                    mid(rule.humidity)
                ),
                "{}",
                rule.crop
            );
        }
    }

    #[test]
    fn test_assess_lists_violations() {
        let m = Measurements::new(90.0, 42.0, 43.0, 19.0, 50.0, 6.0, 200.0);
        let report = assess(Crop::Rice, &m);

        assert!(!report.is_plausible());
        assert_eq!(
            report
                .violations
                .iter()
                .map(|v| v.dimension)
                .collect::<Vec<_>>(),
            vec![Dimension::Temperature, Dimension::Humidity]
        );
        assert!(report.summary().contains("temperature 19°C is outside 20-38°C"));
    }

    #[test]
    fn test_describe_unknown_crop() {
        let m = Measurements::new(0.0, 0.0, 0.0, 25.0, 80.0, 6.5, 175.0);

        assert!(!is_plausible("jute", 25.0, 175.0, 6.5, 80.0));
        assert_eq!(
            describe("jute", &m),
            "jute is not plausible (no known ranges for this crop)\n"
        );
        assert_eq!(describe("rice", &m), assess(Crop::Rice, &m).summary());
    }

    #[test]
    fn test_assess_plausible() {
        let m = Measurements::new(0.0, 0.0, 0.0, 27.0, 80.0, 6.0, 1500.0);
        let report = assess(Crop::Coffee, &m);
        assert!(report.is_plausible());
        assert_eq!(report.summary(), "coffee is plausible for these conditions\n");
    }
}
