use crate::apis::spotify::{chart_rows, SpotifyApi};
use crate::config::ChartConfig;
use crate::constants::{CHART_CSV_FILE, CHART_PIPELINE, CHART_REPORT_ROWS, REPORT_FILE};
use crate::error::Result;
use crate::pipeline::RunSummary;
use crate::{report, storage};
use chrono::Local;
use std::path::Path;
use tracing::{info, instrument};

/// One chart run: authenticate, fetch the playlist snapshot, project it to
/// ranked rows, append to the CSV history, refresh the report.
#[instrument(skip(config))]
pub async fn run(config: &ChartConfig) -> Result<RunSummary> {
    info!("🚀 Starting chart pipeline");
    println!("🚀 Starting chart pipeline");

    // Captured once; every row, the CSV and the report share it
    let run_date = Local::now().date_naive();

    let api = SpotifyApi::new()?;

    info!("🔑 Requesting access token...");
    let token = api.authenticate(config).await?;

    info!("📡 Fetching playlist {}...", config.playlist_id);
    println!("📡 Fetching playlist snapshot...");
    let payload = api.fetch_playlist(&token, &config.playlist_id).await?;

    let rows = chart_rows(&payload, run_date)?;
    info!("✅ Transformed {} chart entries", rows.len());
    println!("✅ Transformed {} chart entries", rows.len());

    storage::append_chart_csv(Path::new(CHART_CSV_FILE), &rows)?;
    info!("💾 Appended {} rows to {}", rows.len(), CHART_CSV_FILE);
    println!("Data appended to {CHART_CSV_FILE}");

    let table = report::chart_table(&rows, CHART_REPORT_ROWS);
    let heading = format!("Daily Update: {}", run_date.format("%Y-%m-%d"));
    report::write_report(Path::new(REPORT_FILE), &heading, &table)?;
    info!("💾 Report refreshed in {}", REPORT_FILE);
    println!("Report updated in {REPORT_FILE}");

    Ok(RunSummary {
        pipeline: CHART_PIPELINE.to_string(),
        rows: rows.len(),
        destination: CHART_CSV_FILE.to_string(),
        report_file: REPORT_FILE.to_string(),
    })
}
