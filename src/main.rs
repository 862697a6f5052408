use clap::Parser;
use crop_advisor::cli::{run, Cli};
use crop_advisor::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
