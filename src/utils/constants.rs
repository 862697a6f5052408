/// Number of features fed to the model, in `FEATURE_NAMES` order
pub const FEATURE_COUNT: usize = 7;

/// Form field names, also the order of the model feature vector
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["N", "P", "K", "temperature", "humidity", "ph", "rainfall"];

/// Physical input bounds
pub const MIN_PH: f64 = 0.0;
pub const MAX_PH: f64 = 14.0;
pub const MIN_HUMIDITY: f64 = 0.0;
pub const MAX_HUMIDITY: f64 = 100.0;

/// Rule classifier hard rejection limits
pub const MIN_RULE_TEMP: f64 = 10.0;
pub const MAX_RULE_TEMP: f64 = 40.0;
pub const MIN_RULE_PH: f64 = 4.5;
pub const MAX_RULE_PH: f64 = 9.0;

/// File names
pub const DEFAULT_CONFIG_FILE: &str = "crop-advisor.toml";

/// Environment variable prefix for settings overrides
pub const ENV_PREFIX: &str = "CROP_ADVISOR";

/// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
