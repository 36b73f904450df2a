//! Analytics configuration.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::FetchError;

/// Environment variable overriding the configured access token.
pub const ACCESS_TOKEN_ENV: &str = "BAIDU_ACCESS_TOKEN";

/// Environment variable overriding the configured site id.
pub const SITE_ID_ENV: &str = "BAIDU_SITE_ID";

/// Default proxy endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://baidu-proxy-gamma.vercel.app/api/baidu";

/// How requests reach the analytics service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    /// Through a proxy that holds the credentials. Only the date range is sent.
    #[default]
    Proxy,

    /// Straight to the report API, credentials in the query string.
    Direct,
}

/// Configuration for the visit count fetcher.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Endpoint queried with GET
    pub endpoint: String,

    /// Proxy or direct access
    pub mode: RequestMode,

    /// Report API access token (direct mode)
    pub access_token: Option<String>,

    /// Analytics site id (direct mode)
    pub site_id: Option<String>,

    /// Report method name
    pub method: String,

    /// Metrics requested from the report API
    pub metrics: Vec<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Start date of the cumulative counter
    pub since: Option<NaiveDate>,

    /// Whether fetching is allowed while the site is being built
    pub fetch_during_build: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            mode: RequestMode::Proxy,
            access_token: None,
            site_id: None,
            method: "source/all/a".to_string(),
            metrics: vec![
                "pv_count".to_string(),
                "visit_count".to_string(),
                "visitor_count".to_string(),
                "ip_count".to_string(),
            ],
            timeout_secs: 10,
            since: None,
            fetch_during_build: true,
        }
    }
}

impl fmt::Debug for AnalyticsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticsConfig")
            .field("endpoint", &self.endpoint)
            .field("mode", &self.mode)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("site_id", &self.site_id)
            .field("method", &self.method)
            .field("metrics", &self.metrics)
            .field("timeout_secs", &self.timeout_secs)
            .field("since", &self.since)
            .field("fetch_during_build", &self.fetch_during_build)
            .finish()
    }
}

impl AnalyticsConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Apply credential overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ACCESS_TOKEN_ENV).ok(),
            std::env::var(SITE_ID_ENV).ok(),
        )
    }

    /// Apply credential overrides. Empty values are ignored.
    pub fn with_overrides(mut self, access_token: Option<String>, site_id: Option<String>) -> Self {
        if let Some(token) = access_token.filter(|t| !t.trim().is_empty()) {
            self.access_token = Some(token);
        }
        if let Some(id) = site_id.filter(|s| !s.trim().is_empty()) {
            self.site_id = Some(id);
        }
        self
    }

    /// Check that everything the configured mode needs is present.
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.endpoint.trim().is_empty() {
            return Err(FetchError::Configuration("endpoint is empty".to_string()));
        }

        if self.mode == RequestMode::Direct {
            let missing: Vec<&str> = [
                (ACCESS_TOKEN_ENV, &self.access_token),
                (SITE_ID_ENV, &self.site_id),
            ]
            .into_iter()
            .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
            .map(|(name, _)| name)
            .collect();

            if !missing.is_empty() {
                return Err(FetchError::Configuration(format!(
                    "missing {}",
                    missing.join(" and ")
                )));
            }
        }

        Ok(())
    }
}
