//! Snapshot command: write the counters for the site build.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use visitboard_analytics::VisitBoard;

use crate::config::fetcher_from;

/// Run the snapshot command.
pub async fn run(
    config_path: &Path,
    output: &Path,
    since: Option<NaiveDate>,
    build: bool,
) -> Result<()> {
    let fetcher = fetcher_from(config_path, build)?;
    let since = since.or(fetcher.config().since);

    let board = fetcher.fetch_board(since).await;

    write_snapshot(&board, output)?;

    tracing::info!("Wrote {}", output.display());

    Ok(())
}

/// Write `board` as pretty JSON, creating parent directories as needed.
pub fn write_snapshot(board: &VisitBoard, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(board)?;
    fs::write(output, json).with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}
