//! Check command - confirm the model artifact can be loaded.

use colored::Colorize;
use diabrisk::{PredictorConfig, check_artifact};

pub fn run(config: &PredictorConfig, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let check = check_artifact(&config.artifact_path);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&check)?);
    } else if let Some(artifact) = &check.artifact {
        println!("{}", check.message.green().bold());
        println!();
        println!("  File:      {}", artifact.path.display());
        println!("  Hash:      {}", artifact.hash);
        println!("  Size:      {} bytes", artifact.size_bytes);
        println!("  Objective: {}", artifact.objective);
        println!("  Trees:     {}", artifact.num_trees);
        println!("  Features:  {}", artifact.num_features);
        if let Some(version) = &artifact.writer_version {
            println!("  Written by XGBoost {}", version);
        }
    } else {
        println!(
            "{} {}",
            "Error loading model:".red().bold(),
            check.message
        );
    }

    if check.is_ok() {
        Ok(())
    } else {
        Err(format!("model artifact {} failed to load", check.path.display()).into())
    }
}
