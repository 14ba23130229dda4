//! Call-store access for seeding
//!
//! The call store keeps whole documents: one row per call, the raw
//! pipeline JSON in a single column. The schema is created on first
//! connect so the tool works against a fresh file.

use std::path::Path;

use pdesk_common::model::CallDocument;
use pdesk_common::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

/// Open (and if needed create) the call-store database
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new call store: {}", db_path.display());
    } else {
        info!("Opened existing call store: {}", db_path.display());
    }

    create_calls_table(&pool).await?;

    Ok(pool)
}

async fn create_calls_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS calls (
            job_id TEXT PRIMARY KEY,
            created_at TEXT NOT NULL,
            document TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove every document from the collection; returns how many went
pub async fn clear_calls(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM calls").execute(pool).await?;
    Ok(result.rows_affected())
}

/// Insert call documents, one row per document
pub async fn insert_calls(pool: &SqlitePool, documents: &[CallDocument]) -> Result<()> {
    for document in documents {
        sqlx::query("INSERT INTO calls (job_id, created_at, document) VALUES (?, ?, ?)")
            .bind(&document.job_id)
            .bind(&document.created_at)
            .bind(serde_json::to_string(document)?)
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// Number of documents in the collection
pub async fn count_calls(pool: &SqlitePool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM calls")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
