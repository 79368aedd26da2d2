//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use diabrisk::{DEFAULT_ARTIFACT_PATH, DEFAULT_THRESHOLD, Indicator, PatientInput};

/// Diabrisk: diabetes risk prediction from eight clinical indicators
#[derive(Parser)]
#[command(name = "diabrisk")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the pretrained XGBoost JSON model
    #[arg(long, global = true, env = "DIABRISK_MODEL", default_value = DEFAULT_ARTIFACT_PATH)]
    pub model: PathBuf,

    /// Probability above which a patient is classified as diabetic
    #[arg(long, global = true, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict diabetes risk for one patient
    Predict {
        #[command(flatten)]
        indicators: IndicatorArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a patient report and export it as CSV
    Report {
        #[command(flatten)]
        indicators: IndicatorArgs,

        /// Patient name, used in the export filename
        #[arg(short, long, default_value = "")]
        name: String,

        /// Output path for the CSV (default: ./<name>_diabetes_report.csv)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write the CSV to standard output instead of a file
        #[arg(long)]
        stdout: bool,

        /// Also print the model's verdict
        #[arg(long, conflicts_with = "stdout")]
        predict: bool,
    },

    /// Check that the model artifact loads
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the indicators with their bounds and normal ranges
    Indicators {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the web form
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,
    },
}

/// One flag per indicator, bounded and defaulted like the web form.
#[derive(Args, Debug, Clone)]
pub struct IndicatorArgs {
    /// Number of times pregnant
    #[arg(long, default_value_t = PatientInput::default().pregnancies,
          value_parser = clap::value_parser!(u32).range(0..=20))]
    pub pregnancies: u32,

    /// Plasma glucose concentration (mg/dL)
    #[arg(long, default_value_t = PatientInput::default().glucose,
          value_parser = clap::value_parser!(u32).range(0..=200))]
    pub glucose: u32,

    /// Diastolic blood pressure (mm Hg)
    #[arg(long, default_value_t = PatientInput::default().blood_pressure,
          value_parser = clap::value_parser!(u32).range(0..=180))]
    pub blood_pressure: u32,

    /// Triceps skin fold thickness (mm)
    #[arg(long, default_value_t = PatientInput::default().skin_thickness,
          value_parser = clap::value_parser!(u32).range(0..=100))]
    pub skin_thickness: u32,

    /// 2-hour serum insulin (µU/mL)
    #[arg(long, default_value_t = PatientInput::default().insulin,
          value_parser = clap::value_parser!(u32).range(0..=900))]
    pub insulin: u32,

    /// Body mass index (kg/m²)
    #[arg(long, default_value_t = PatientInput::default().bmi, value_parser = parse_bmi)]
    pub bmi: f64,

    /// Diabetes pedigree function
    #[arg(long, visible_alias = "diabetes-pedigree-function",
          default_value_t = PatientInput::default().diabetes_pedigree_function,
          value_parser = parse_pedigree)]
    pub pedigree: f64,

    /// Age in years
    #[arg(long, default_value_t = PatientInput::default().age,
          value_parser = clap::value_parser!(u32).range(1..=120))]
    pub age: u32,
}

impl IndicatorArgs {
    pub fn into_input(self) -> PatientInput {
        PatientInput {
            pregnancies: self.pregnancies,
            glucose: self.glucose,
            blood_pressure: self.blood_pressure,
            skin_thickness: self.skin_thickness,
            insulin: self.insulin,
            bmi: self.bmi,
            diabetes_pedigree_function: self.pedigree,
            age: self.age,
        }
    }
}

fn parse_bmi(s: &str) -> Result<f64, String> {
    parse_bounded(Indicator::Bmi, s)
}

fn parse_pedigree(s: &str) -> Result<f64, String> {
    parse_bounded(Indicator::DiabetesPedigreeFunction, s)
}

fn parse_bounded(indicator: Indicator, s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    indicator.check(value).map_err(|e| e.to_string())?;
    Ok(value)
}
