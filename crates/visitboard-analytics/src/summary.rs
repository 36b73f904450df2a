//! Visit summary values and the response envelope they arrive in.

use serde::{Deserialize, Deserializer, Serialize};

/// Columns of a metrics table row, in request order.
pub const METRIC_COLUMNS: [&str; 4] = ["pv_count", "visit_count", "visitor_count", "ip_count"];

/// Aggregate visit count for a date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VisitSummary {
    /// A single count.
    Count(u64),

    /// One row per aggregate, one column per requested metric.
    Table(#[serde(deserialize_with = "deserialize_table")] Vec<Vec<u64>>),
}

impl VisitSummary {
    /// Value shown before (or instead of) a real count: one row of four zeros.
    pub fn placeholder() -> Self {
        VisitSummary::Table(vec![vec![0; METRIC_COLUMNS.len()]])
    }

    /// The headline number: the count itself, or page views of the first row.
    pub fn total(&self) -> u64 {
        match self {
            VisitSummary::Count(count) => *count,
            VisitSummary::Table(rows) => rows
                .first()
                .and_then(|row| row.first())
                .copied()
                .unwrap_or(0),
        }
    }

    /// Value of a named metric column in the first row, if present.
    pub fn metric(&self, name: &str) -> Option<u64> {
        match self {
            VisitSummary::Count(_) => None,
            VisitSummary::Table(rows) => {
                let column = METRIC_COLUMNS.iter().position(|c| *c == name)?;
                rows.first()?.get(column).copied()
            }
        }
    }
}

impl Default for VisitSummary {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// The cumulative and current counters displayed by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitBoard {
    /// Count since the configured start date
    #[serde(rename = "visitCount")]
    pub total: VisitSummary,

    /// Count for the service's default window
    #[serde(rename = "visitCurr")]
    pub current: VisitSummary,
}

impl VisitBoard {
    /// Assemble a board, substituting placeholders for missing values.
    pub fn from_results(total: Option<VisitSummary>, current: Option<VisitSummary>) -> Self {
        Self {
            total: total.unwrap_or_default(),
            current: current.unwrap_or_default(),
        }
    }
}

impl Default for VisitBoard {
    fn default() -> Self {
        Self::from_results(None, None)
    }
}

/// Response body: `{ "result": { "sum": ... } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ReportEnvelope {
    pub result: ReportResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportResult {
    pub sum: VisitSummary,
}

/// A table cell as reported by the service.
#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Number(u64),
    Text(String),
    Missing,
}

fn deserialize_table<'de, D>(deserializer: D) -> Result<Vec<Vec<u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Vec<Vec<Cell>> = Vec::deserialize(deserializer)?;

    rows.into_iter()
        .map(|row| row.into_iter().map(cell_value::<D::Error>).collect())
        .collect()
}

fn cell_value<E: serde::de::Error>(cell: Cell) -> Result<u64, E> {
    match cell {
        Cell::Number(n) => Ok(n),
        Cell::Missing => Ok(0),
        Cell::Text(text) => {
            let text = text.trim();
            if text == "--" {
                return Ok(0);
            }
            text.parse()
                .map_err(|_| E::custom(format!("invalid metric value: {}", text)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(body: &str) -> Result<VisitSummary, serde_json::Error> {
        serde_json::from_str::<ReportEnvelope>(body).map(|e| e.result.sum)
    }

    #[test]
    fn parses_scalar_sum() {
        let summary = parse(r#"{"result":{"sum":42}}"#).unwrap();

        assert_eq!(summary, VisitSummary::Count(42));
        assert_eq!(summary.total(), 42);
    }

    #[test]
    fn parses_metrics_table_with_gaps() {
        let summary =
            parse(r#"{"result":{"sum":[[120,80,"--",null]],"items":[]},"header":{}}"#).unwrap();

        assert_eq!(summary, VisitSummary::Table(vec![vec![120, 80, 0, 0]]));
        assert_eq!(summary.total(), 120);
        assert_eq!(summary.metric("visit_count"), Some(80));
        assert_eq!(summary.metric("bounce_ratio"), None);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let summary = parse(r#"{"result":{"sum":[["15","7","6","6"]]}}"#).unwrap();

        assert_eq!(summary, VisitSummary::Table(vec![vec![15, 7, 6, 6]]));
    }

    #[test]
    fn rejects_negative_and_missing_sum() {
        assert!(parse(r#"{"result":{"sum":-3}}"#).is_err());
        assert!(parse(r#"{"result":{}}"#).is_err());
        assert!(parse(r#"{"error_code":110}"#).is_err());
    }

    #[test]
    fn placeholder_is_one_row_of_zeros() {
        let placeholder = VisitSummary::placeholder();

        assert_eq!(placeholder, VisitSummary::Table(vec![vec![0, 0, 0, 0]]));
        assert_eq!(placeholder.total(), 0);
    }

    #[test]
    fn board_serializes_with_site_keys() {
        let board = VisitBoard::from_results(Some(VisitSummary::Count(1200)), None);

        let json = serde_json::to_value(&board).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "visitCount": 1200,
                "visitCurr": [[0, 0, 0, 0]],
            })
        );
    }
}
