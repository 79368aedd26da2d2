//! Patient report assembly and CSV export.

mod export;
mod table;

pub use export::{CSV_HEADERS, FILENAME_SUFFIX, export_filename};
pub use table::{Report, ReportRow};
