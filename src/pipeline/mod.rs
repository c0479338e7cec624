pub mod chart;
pub mod movies;

use serde::Serialize;

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub pipeline: String,
    pub rows: usize,
    pub destination: String,
    pub report_file: String,
}
