//! Patient input collection and feature vector assembly.

mod features;
mod patient;

pub use features::FeatureVector;
pub use patient::PatientInput;
