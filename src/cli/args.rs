use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::Measurements;

#[derive(Parser)]
#[command(name = "crop-advisor")]
#[command(about = "Crop recommendation from soil and climate measurements")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        help = "Settings file path [default: crop-advisor.toml]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct MeasurementArgs {
    #[arg(short = 'n', long, help = "Nitrogen content of soil (N)")]
    pub nitrogen: f64,

    #[arg(short = 'p', long, help = "Phosphorus content of soil (P)")]
    pub phosphorus: f64,

    #[arg(short = 'k', long, help = "Potassium content of soil (K)")]
    pub potassium: f64,

    #[arg(short, long, allow_negative_numbers = true, help = "Temperature in °C")]
    pub temperature: f64,

    #[arg(long, help = "Relative humidity in %")]
    pub humidity: f64,

    #[arg(long, allow_negative_numbers = true, help = "Soil pH")]
    pub ph: f64,

    #[arg(short, long, help = "Rainfall in mm")]
    pub rainfall: f64,
}

impl From<&MeasurementArgs> for Measurements {
    fn from(args: &MeasurementArgs) -> Self {
        Measurements::new(
            args.nitrogen,
            args.phosphorus,
            args.potassium,
            args.temperature,
            args.humidity,
            args.ph,
            args.rainfall,
        )
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend a crop for one set of measurements
    Recommend {
        #[command(flatten)]
        measurements: MeasurementArgs,

        #[arg(short, long, help = "Model artifact (JSON), overrides settings")]
        model: Option<PathBuf>,
    },

    /// Recommend a crop from a form-encoded request body
    Form {
        #[arg(
            short,
            long,
            help = "Form body, e.g. 'N=90&P=42&K=43&temperature=29&humidity=75&ph=6&rainfall=1600'"
        )]
        body: String,

        #[arg(short, long, help = "Model artifact (JSON), overrides settings")]
        model: Option<PathBuf>,
    },

    /// Check whether a crop is plausible for the given conditions
    Check {
        #[arg(short, long)]
        crop: String,

        #[arg(short, long, allow_negative_numbers = true)]
        temperature: f64,

        #[arg(short, long)]
        rainfall: f64,

        #[arg(long, allow_negative_numbers = true)]
        ph: f64,

        #[arg(long)]
        humidity: f64,
    },

    /// List the crop plausibility ranges
    Rules,

    /// Score every row of a CSV file and write results to stdout
    Batch {
        #[arg(short, long, help = "Input CSV with N,P,K,temperature,humidity,ph,rainfall columns")]
        input: PathBuf,

        #[arg(short, long, help = "Model artifact (JSON), overrides settings")]
        model: Option<PathBuf>,
    },
}
