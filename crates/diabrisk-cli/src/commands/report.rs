//! Report command - print the patient report and export it as CSV.

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use diabrisk::{PatientInput, Predictor, PredictorConfig, Report};

use super::verdict_line;

pub fn run(
    config: &PredictorConfig,
    input: PatientInput,
    name: String,
    output: Option<PathBuf>,
    to_stdout: bool,
    with_prediction: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let predictor = Predictor::load(config)?;
    let report = predictor.report(&input, name)?;
    let csv = report.to_csv()?;

    if to_stdout {
        std::io::stdout().write_all(&csv)?;
        return Ok(());
    }

    if with_prediction {
        let assessment = predictor.predict(&input)?;
        println!("{}", verdict_line(&assessment));
        println!();
    }

    print_table(&report);

    let output_path = output.unwrap_or_else(|| PathBuf::from(report.filename()));
    std::fs::write(&output_path, &csv)
        .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}

fn print_table(report: &Report) {
    let title = if report.patient_name.is_empty() {
        "Diabetes Report".to_string()
    } else {
        format!("Diabetes Report for {}", report.patient_name)
    };
    println!("{}", title.cyan().bold());
    println!();
    println!(
        "  {:28} {:>10}  {}",
        "Feature".yellow().bold(),
        "Your Value".yellow().bold(),
        "Normal Range".yellow().bold()
    );
    for row in &report.rows {
        println!(
            "  {:28} {:>10}  {}",
            row.feature,
            row.value.to_string().white().bold(),
            row.normal_range
        );
    }
}
