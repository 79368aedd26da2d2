//! CLI command implementations.

pub mod check;
pub mod indicators;
pub mod predict;
pub mod report;
pub mod serve;

use colored::{ColoredString, Colorize};
use diabrisk::{Assessment, Prediction};

/// Color the verdict line the way the form does: red for diabetic, green otherwise.
pub(crate) fn verdict_line(assessment: &Assessment) -> ColoredString {
    match assessment.prediction {
        Prediction::Diabetic => assessment.message().red().bold(),
        Prediction::NonDiabetic => assessment.message().green().bold(),
    }
}
