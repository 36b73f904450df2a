//! Date window and query string construction.

use chrono::{NaiveDate, Utc};

use crate::config::{AnalyticsConfig, RequestMode};

/// Date window of a visit summary request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitQuery {
    /// First day of the window. Left to the service when absent.
    pub start_date: Option<NaiveDate>,

    /// Last day of the window
    pub end_date: NaiveDate,
}

impl VisitQuery {
    /// Create a query for an explicit window.
    pub fn new(start_date: Option<NaiveDate>, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Create a query whose window ends on today's UTC date.
    pub fn ending_today(start_date: Option<NaiveDate>) -> Self {
        Self::new(start_date, today())
    }

    /// Query parameters for the configured request mode, in request order.
    ///
    /// `start_date` is left out entirely when no start was given.
    pub fn params(&self, config: &AnalyticsConfig) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(6);

        if config.mode == RequestMode::Direct {
            params.push(("access_token", config.access_token.clone().unwrap_or_default()));
            params.push(("site_id", config.site_id.clone().unwrap_or_default()));
            params.push(("method", config.method.clone()));
        }

        if let Some(start) = self.start_date {
            params.push(("start_date", format_date(start)));
        }
        params.push(("end_date", format_date(self.end_date)));

        if config.mode == RequestMode::Direct {
            params.push(("metrics", config.metrics.join(",")));
        }

        params
    }
}

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
