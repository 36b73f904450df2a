//! Single summary fetch command.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::fetcher_from;

/// Run the fetch command.
///
/// Prints the summary as JSON on stdout, or `null` when it could not be fetched.
pub async fn run(config_path: &Path, start: Option<NaiveDate>, build: bool) -> Result<()> {
    let fetcher = fetcher_from(config_path, build)?;

    let summary = fetcher.fetch(start).await;

    if let Some(ref summary) = summary {
        tracing::info!("Visit count: {}", summary.total());
    }

    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}
