//! API request handlers.

mod health;
mod indicators;
mod predict;
mod report;

pub use health::*;
pub use indicators::*;
pub use predict::*;
pub use report::*;
