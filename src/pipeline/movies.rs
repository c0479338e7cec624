use crate::apis::tmdb::{movie_rows, TmdbApi};
use crate::config::MoviesConfig;
use crate::constants::{MOVIES_PIPELINE, MOVIE_REPORT_ROWS, REPORT_FILE};
use crate::error::Result;
use crate::pipeline::RunSummary;
use crate::storage::ObjectStore;
use crate::{report, storage};
use chrono::Local;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

/// One movies run: fetch the trending snapshot, project it to ranked rows,
/// store the CSV under its date-partitioned key, refresh the report.
#[instrument(skip(config, store))]
pub async fn run(config: &MoviesConfig, store: Arc<dyn ObjectStore>) -> Result<RunSummary> {
    info!("🚀 Starting movies pipeline");
    println!("🚀 Starting movies pipeline");

    let run_date = Local::now().date_naive();

    let api = TmdbApi::new()?;

    info!("📡 Fetching trending movies...");
    println!("📡 Fetching trending movies...");
    let payload = api.fetch_trending(&config.api_key).await?;

    let rows = movie_rows(&payload, run_date)?;
    info!("✅ Transformed {} trending entries", rows.len());
    println!("✅ Transformed {} trending entries", rows.len());

    let bytes = storage::movies_csv(&rows)?;
    let key = storage::movie_object_key(run_date);
    store.put(&key, bytes).await?;
    info!("💾 Stored {} rows at {}", rows.len(), key);
    println!("Data stored at {key}");

    let table = report::movie_table(&rows, MOVIE_REPORT_ROWS);
    let heading = format!("Daily Trending Movies: {}", run_date.format("%Y-%m-%d"));
    report::write_report(Path::new(REPORT_FILE), &heading, &table)?;
    info!("💾 Report refreshed in {}", REPORT_FILE);
    println!("Report updated in {REPORT_FILE}");

    Ok(RunSummary {
        pipeline: MOVIES_PIPELINE.to_string(),
        rows: rows.len(),
        destination: key,
        report_file: REPORT_FILE.to_string(),
    })
}
