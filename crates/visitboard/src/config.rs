//! Configuration file loading (visitboard.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use visitboard_analytics::{AnalyticsConfig, ExecutionContext, VisitCountFetcher};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("{} not found, using defaults", path.display());
    Ok(ConfigFile::default())
}

/// Build a fetcher from the config file and the process environment.
pub fn fetcher_from(path: &Path, build: bool) -> Result<VisitCountFetcher> {
    let analytics = load_config(path)?.analytics.with_env_overrides();

    if let Err(e) = analytics.validate() {
        tracing::warn!("{}", e);
    }

    let context = if build {
        ExecutionContext::StaticBuild
    } else {
        ExecutionContext::Live
    };

    let fetcher = VisitCountFetcher::new(analytics)
        .context("Failed to create HTTP client")?
        .with_context(context);

    Ok(fetcher)
}
