//! # model — tickers, summary rows and the status line
//!
//! The view works with three value types:
//! - `Ticker` — normalized (upper-case, non-empty) symbol
//! - `SummaryEntry` — one price/change row per ticker the service reported
//! - `Status` — the single last-write-wins status line

use serde::{Deserialize, Deserializer, Serialize};

// ─── Ticker ───────────────────────────────────────────────────────────────────

/// A normalized stock symbol. Upper-case, non-empty, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Normalize raw user input: trim, upper-case.
    /// Returns `None` when nothing is left after trimming — the caller
    /// treats that as a skip, not an error.
    pub fn parse(raw: &str) -> Option<Ticker> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Ticker(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Summary ──────────────────────────────────────────────────────────────────

/// One row of the portfolio summary.
///
/// A ticker can appear in the portfolio but be missing or errored here
/// (stale fetch, provider failure upstream). That divergence is expected —
/// portfolio and summary are refreshed independently.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryEntry {
    pub ticker: Ticker,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The service passes quote-provider values straight through, so a field
/// may arrive as a number, a numeric string, `"N/A"`, null, or be absent.
/// Anything non-numeric becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => {
            // strings like "189.84" or "1.23%" — strip a trailing percent sign
            s.trim().trim_end_matches('%').parse::<f64>().ok()
        }
        _ => None,
    })
}

// ─── Status ───────────────────────────────────────────────────────────────────

/// The single transient status line. Last write wins; no history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Success(String),
    Failure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_parse_trims_and_uppercases() {
        assert_eq!(Ticker::parse("tsla ").unwrap().as_str(), "TSLA");
        assert_eq!(Ticker::parse("  aapl").unwrap().as_str(), "AAPL");
    }

    #[test]
    fn test_ticker_parse_rejects_blank() {
        assert_eq!(Ticker::parse(""), None);
        assert_eq!(Ticker::parse("   "), None);
    }

    #[test]
    fn test_summary_entry_numeric_fields() {
        let entry: SummaryEntry =
            serde_json::from_str(r#"{"ticker":"AAPL","price":189.84,"change_percent":-0.52}"#)
                .unwrap();
        assert_eq!(entry.price, Some(189.84));
        assert_eq!(entry.change_percent, Some(-0.52));
        assert_eq!(entry.error, None);
    }

    #[test]
    fn test_summary_entry_string_passthrough_fields() {
        let entry: SummaryEntry = serde_json::from_str(
            r#"{"ticker":"AAPL","price":"189.8400","change_percent":"-0.5200%"}"#,
        )
        .unwrap();
        assert_eq!(entry.price, Some(189.84));
        assert_eq!(entry.change_percent, Some(-0.52));
    }

    #[test]
    fn test_summary_entry_na_and_error_row() {
        let entry: SummaryEntry = serde_json::from_str(
            r#"{"ticker":"XXXX","price":"N/A","error":"No data returned"}"#,
        )
        .unwrap();
        assert_eq!(entry.price, None);
        assert_eq!(entry.change_percent, None);
        assert_eq!(entry.error.as_deref(), Some("No data returned"));
    }
}
