//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing visitboard...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    tracing::info!("Set BAIDU_ACCESS_TOKEN and BAIDU_SITE_ID to use direct mode.");
    tracing::info!("Run 'visitboard board' to fetch the counters.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Visitboard Configuration

[analytics]
# Endpoint queried with GET
endpoint = "https://baidu-proxy-gamma.vercel.app/api/baidu"

# "proxy" sends only the date range; "direct" also sends credentials.
# Credentials are read from BAIDU_ACCESS_TOKEN and BAIDU_SITE_ID.
mode = "proxy"

# Report method and metrics (direct mode)
method = "source/all/a"
metrics = ["pv_count", "visit_count", "visitor_count", "ip_count"]

# Request timeout in seconds
timeout_secs = 10

# Start of the cumulative counter
since = "2025-01-01"

# Fetch while building the static site
fetch_during_build = true
"#;
