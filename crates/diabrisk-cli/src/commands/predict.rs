//! Predict command - classify one patient.

use colored::Colorize;
use diabrisk::{PatientInput, Predictor, PredictorConfig};

use super::verdict_line;

pub fn run(
    config: &PredictorConfig,
    input: PatientInput,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let predictor = Predictor::load(config)?;
    let assessment = predictor.predict(&input)?;

    if json_output {
        let result = serde_json::json!({
            "input": input,
            "label": assessment.label,
            "prediction": assessment.prediction,
            "message": assessment.message(),
            "probability": assessment.probability,
            "classifier": assessment.classifier,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if verbose {
        if let Some(artifact) = predictor.artifact() {
            println!(
                "{} {} ({} trees, {})",
                "Model".cyan().bold(),
                artifact.path.display().to_string().white(),
                artifact.num_trees,
                artifact.objective
            );
        }
        println!();
    }

    println!("{}", verdict_line(&assessment));

    if let Some(probability) = assessment.probability {
        println!(
            "Probability of diabetes: {}",
            format!("{:.1}%", probability * 100.0).white().bold()
        );
    }

    Ok(())
}
