//! Indicators command - list the form fields.

use colored::Colorize;
use diabrisk::{IndicatorSpec, MODEL_ORDER};

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let specs: Vec<IndicatorSpec> = MODEL_ORDER.iter().map(|i| i.spec()).collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&specs)?);
        return Ok(());
    }

    for spec in &specs {
        println!(
            "{} {}",
            spec.label.cyan().bold(),
            format!("({})", spec.indicator).dimmed()
        );
        println!("  {}", spec.description);
        println!(
            "  Range: {} to {}, default {}",
            spec.min, spec.max, spec.default
        );
        println!("  Normal: {}", spec.normal_range.green());
        println!();
    }

    Ok(())
}
