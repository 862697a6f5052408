use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;

use crate::classifiers::plausibility_gate;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::{Measurements, CROP_RULES};
use crate::predictor::{CropPredictor, ModelBundle, NoModel};
use crate::processors::BatchProcessor;
use crate::recommender::CropRecommender;
use crate::utils::{init_logging, Settings};

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    init_logging(&settings.log_level, cli.verbose);

    match cli.command {
        Commands::Recommend {
            measurements,
            model,
        } => {
            let settings = settings.with_model_path(model);
            let recommender = CropRecommender::new(load_predictor(&settings)?);

            let recommendation = recommender.recommend(&Measurements::from(&measurements));
            println!("{}", recommendation);
        }

        Commands::Form { body, model } => {
            let settings = settings.with_model_path(model);
            let recommender = CropRecommender::new(load_predictor(&settings)?);

            println!("{}", recommender.recommend_form(&body));
        }

        Commands::Check {
            crop,
            temperature,
            rainfall,
            ph,
            humidity,
        } => {
            // Nutrients play no part in the plausibility ranges
            let measurements =
                Measurements::new(0.0, 0.0, 0.0, temperature, humidity, ph, rainfall);

            print!("{}", plausibility_gate::describe(&crop, &measurements));
        }

        Commands::Rules => {
            println!(
                "{:<10} {:>12} {:>14} {:>12} {:>10}",
                "Crop", "Temp (°C)", "Rainfall (mm)", "Humidity (%)", "pH"
            );
            for rule in &CROP_RULES {
                println!(
                    "{:<10} {:>12} {:>14} {:>12} {:>10}",
                    rule.crop.as_str(),
                    rule.temperature.to_string(),
                    rule.rainfall.to_string(),
                    rule.humidity.to_string(),
                    rule.ph.to_string()
                );
            }
        }

        Commands::Batch { input, model } => {
            let settings = settings.with_model_path(model);
            let recommender = CropRecommender::new(load_predictor(&settings)?);

            info!(input = %input.display(), "Scoring batch");
            let reader = BufReader::new(File::open(&input)?);
            let summary = BatchProcessor::new(&recommender).process(reader, io::stdout().lock())?;

            eprintln!("\n{}", summary.summary());
        }
    }

    Ok(())
}

/// Load the configured model artifact, or a stand-in that rejects every
/// model fallback when none is configured
fn load_predictor(settings: &Settings) -> Result<Box<dyn CropPredictor>> {
    match settings.model_path.as_deref() {
        Some(path) => Ok(Box::new(ModelBundle::load(path)?)),
        None => {
            info!("No model artifact configured, rule matches only");
            Ok(Box::new(NoModel))
        }
    }
}
