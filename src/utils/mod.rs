pub mod constants;
pub mod logging;
pub mod settings;

pub use constants::*;
pub use logging::init_logging;
pub use settings::Settings;
