//! Diabrisk CLI - diabetes risk prediction from the command line or a browser.

mod cli;
mod commands;
mod logging;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};
use diabrisk::PredictorConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = PredictorConfig::new(&cli.model).with_threshold(cli.threshold);

    let result = match cli.command {
        Commands::Predict { indicators, json } => {
            commands::predict::run(&config, indicators.into_input(), json, cli.verbose)
        }

        Commands::Report {
            indicators,
            name,
            output,
            stdout,
            predict,
        } => commands::report::run(
            &config,
            indicators.into_input(),
            name,
            output,
            stdout,
            predict,
        ),

        Commands::Check { json } => commands::check::run(&config, json),

        Commands::Indicators { json } => commands::indicators::run(json),

        Commands::Serve { port, no_open } => {
            commands::serve::run(&config, port, no_open, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
