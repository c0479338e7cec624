use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::error;

use daily_trends::config::{ChartConfig, MoviesConfig};
use daily_trends::error::Result;
use daily_trends::pipeline::{self, RunSummary};
use daily_trends::storage::{ObjectStore, SupabaseStore};
use daily_trends::logging;

#[derive(Parser)]
#[command(name = "daily_trends")]
#[command(about = "Daily music chart and trending movie ETL pipelines")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the daily chart snapshot and append it to the local CSV history
    Chart,
    /// Fetch today's trending movies and store the snapshot in object storage
    Movies,
}

async fn run_chart() -> Result<RunSummary> {
    let config = ChartConfig::from_env()?;
    pipeline::chart::run(&config).await
}

async fn run_movies() -> Result<RunSummary> {
    let config = MoviesConfig::from_env()?;
    let store: Arc<dyn ObjectStore> = Arc::new(SupabaseStore::new(&config.store)?);
    pipeline::movies::run(&config, store).await
}

#[tokio::main]
async fn main() {
    logging::init_logging();
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Chart => run_chart().await,
        Commands::Movies => run_movies().await,
    };

    match outcome {
        Ok(summary) => {
            println!("\n📊 Pipeline results for {}:", summary.pipeline);
            println!("   Rows: {}", summary.rows);
            println!("   Output: {}", summary.destination);
            println!("   Report: {}", summary.report_file);
        }
        Err(e) => {
            error!("Pipeline failed: {e}");
            eprintln!("❌ Pipeline failed: {e}");
            std::process::exit(1);
        }
    }
}
