//! Visit count retrieval.

use chrono::NaiveDate;

use crate::config::AnalyticsConfig;
use crate::context::ExecutionContext;
use crate::error::FetchError;
use crate::query::VisitQuery;
use crate::summary::{ReportEnvelope, VisitBoard, VisitSummary};

/// Fetches visit summaries from the analytics endpoint.
///
/// Every call makes at most one request. Nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct VisitCountFetcher {
    config: AnalyticsConfig,
    context: ExecutionContext,
    http_client: reqwest::Client,
}

impl VisitCountFetcher {
    /// Create a fetcher running in the live context.
    pub fn new(config: AnalyticsConfig) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::Configuration(e.to_string()))?;

        Ok(Self::with_client(config, http_client))
    }

    /// Create a fetcher with a custom HTTP client.
    pub fn with_client(config: AnalyticsConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            context: ExecutionContext::Live,
            http_client,
        }
    }

    /// Set the execution context.
    pub fn with_context(mut self, context: ExecutionContext) -> Self {
        self.context = context;
        self
    }

    /// The configuration this fetcher was built with.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Fetch the summary for `[start_date, today]`.
    ///
    /// Failures are logged and reported as `None`.
    pub async fn fetch(&self, start_date: Option<NaiveDate>) -> Option<VisitSummary> {
        self.fetch_query(&VisitQuery::ending_today(start_date)).await
    }

    /// Fetch the summary for an explicit window, absorbing failures.
    pub async fn fetch_query(&self, query: &VisitQuery) -> Option<VisitSummary> {
        match self.try_fetch_query(query).await {
            Ok(summary) => Some(summary),
            Err(FetchError::Disabled) => {
                tracing::debug!("Skipping visit count fetch during static build");
                None
            }
            Err(e @ FetchError::Configuration(_)) => {
                tracing::warn!("Visit count not fetched: {}", e);
                None
            }
            Err(e) => {
                tracing::error!("Fetching visit count failed: {}", e);
                None
            }
        }
    }

    /// Fetch the summary for `[start_date, today]`, reporting the failure kind.
    pub async fn try_fetch(
        &self,
        start_date: Option<NaiveDate>,
    ) -> Result<VisitSummary, FetchError> {
        self.try_fetch_query(&VisitQuery::ending_today(start_date)).await
    }

    /// Fetch the summary for an explicit window, reporting the failure kind.
    pub async fn try_fetch_query(&self, query: &VisitQuery) -> Result<VisitSummary, FetchError> {
        if !self.context.allows_network(self.config.fetch_during_build) {
            return Err(FetchError::Disabled);
        }

        self.config.validate()?;

        tracing::debug!(
            "Requesting visit summary {} .. {}",
            query
                .start_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "(default)".to_string()),
            query.end_date
        );

        let response = self
            .http_client
            .get(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .query(&query.params(&self.config))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RemoteService {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let envelope: ReportEnvelope = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        Ok(envelope.result.sum)
    }

    /// Fetch the cumulative counter (since `since`) and the current counter together.
    ///
    /// The two requests run concurrently; a failed side is replaced by the
    /// placeholder.
    pub async fn fetch_board(&self, since: Option<NaiveDate>) -> VisitBoard {
        let (total, current) = tokio::join!(self.fetch(since), self.fetch(None));

        VisitBoard::from_results(total, current)
    }
}
