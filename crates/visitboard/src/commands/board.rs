//! Board command: cumulative and current counters.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::fetcher_from;

/// Run the board command.
pub async fn run(config_path: &Path, since: Option<NaiveDate>, build: bool) -> Result<()> {
    let fetcher = fetcher_from(config_path, build)?;
    let since = since.or(fetcher.config().since);

    let board = fetcher.fetch_board(since).await;

    tracing::info!(
        "Visits: {} total, {} current",
        board.total.total(),
        board.current.total()
    );

    println!("{}", serde_json::to_string_pretty(&board)?);

    Ok(())
}
