pub mod args;
pub mod commands;

pub use args::{Cli, Commands, MeasurementArgs};
pub use commands::run;
