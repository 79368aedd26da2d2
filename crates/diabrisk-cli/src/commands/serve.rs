//! Serve command - open the web form.

use colored::Colorize;
use diabrisk::{Predictor, PredictorConfig};

use crate::server::{app, state::AppState};

pub fn run(
    config: &PredictorConfig,
    port: u16,
    no_open: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Fail before binding if the model can't be loaded
    let predictor = Predictor::load(config)?;

    if verbose {
        if let Some(artifact) = predictor.artifact() {
            println!("Loaded {} ({})", artifact.path.display(), artifact.hash);
        }
    }

    let state = AppState::new(predictor);

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting Diabrisk at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Model: {}", config.artifact_path.display());
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, port))?;

    println!("{}", "Server stopped".yellow());
    Ok(())
}
