//! pdesk-seed - fill the local call store with synthetic call records
//!
//! Local stand-in for the recording pipeline: writes ten synthetic
//! call documents (raw `summarization.extraction` shape) into the
//! `calls` collection so the console has data to browse against a
//! development backend.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod data;
mod db;

/// Command-line arguments for pdesk-seed
#[derive(Parser, Debug)]
#[command(name = "pdesk-seed")]
#[command(about = "Seed the call store with synthetic call records")]
#[command(version)]
struct Args {
    /// Call-store database file
    #[arg(long, default_value = "pdesk-calls.db", env = "PDESK_CALL_DB")]
    db_path: PathBuf,

    /// Keep existing documents instead of wiping the collection first
    #[arg(long)]
    keep_existing: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting pdesk-seed v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let pool = db::connect(&args.db_path).await?;

    if !args.keep_existing {
        let removed = db::clear_calls(&pool).await?;
        if removed > 0 {
            info!("Removed {removed} existing call documents");
        }
    }

    let documents = data::synthetic_calls();
    db::insert_calls(&pool, &documents).await?;

    info!(
        "Seeded {} call documents into {}",
        documents.len(),
        args.db_path.display()
    );

    Ok(())
}
