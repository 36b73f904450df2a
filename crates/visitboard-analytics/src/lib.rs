//! Visit counter retrieval for static documentation sites.
//!
//! Fetches aggregate visit counts from a web analytics report API (directly or
//! through a credential-holding proxy) so a site can display them.

pub mod config;
pub mod context;
pub mod error;
pub mod fetcher;
pub mod query;
pub mod summary;

pub use config::{AnalyticsConfig, RequestMode};
pub use context::ExecutionContext;
pub use error::FetchError;
pub use fetcher::VisitCountFetcher;
pub use query::VisitQuery;
pub use summary::{VisitBoard, VisitSummary};
