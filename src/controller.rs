//! # controller — the synchronization state machine
//!
//! Sequences every user-initiated operation against the portfolio service
//! and reconciles the view state with the responses. The one rule that
//! shapes everything here: **mutate, then reload from authority**. A
//! successful add/remove response is never trusted as the new list — only
//! a fresh fetch is. Slower, but the displayed state can never drift from
//! the server because of a missed edge case in local merging.
//!
//! ## Flow
//! ```text
//! start()            → GET /portfolio ∥ GET /portfolio/summary
//! add_ticker(raw)    → POST /portfolio/add    → ok? refetch both : status
//! remove_ticker(t)   → POST /portfolio/remove → ok? refetch both : status
//! send_report()      → GET /send-email        → status only
//! ```
//!
//! No operation returns an error: every failure is absorbed into the single
//! status line. No retries, no cancellation — overlapping refreshes both
//! land and the last one wins its field.

use anyhow::Context;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::error::TransportError;
use crate::model::{Status, SummaryEntry, Ticker};
use crate::state::ViewState;
use crate::transport::ApiClient;

// Fallback status texts, per operation. Network failures get the "Error …"
// notice; a service rejection without a detail field gets the "Failed …" one.
const FETCH_PORTFOLIO_FAILED: &str = "Error fetching portfolio";
const FETCH_SUMMARY_FAILED: &str = "Error fetching summary";
const ADD_NETWORK_FAILED: &str = "Error adding ticker";
const ADD_REJECTED: &str = "Failed to add ticker";
const REMOVE_NETWORK_FAILED: &str = "Error removing ticker";
const REMOVE_REJECTED: &str = "Failed to remove ticker";
const REPORT_NETWORK_FAILED: &str = "Error sending email";
const REPORT_REJECTED: &str = "Failed to send email";

/// A missing list field means "nothing there yet", not an error.
#[derive(Debug, Deserialize)]
struct PortfolioResponse {
    #[serde(default)]
    portfolio: Vec<Ticker>,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summary: Vec<SummaryEntry>,
}

pub struct Controller {
    api: ApiClient,
    state: ViewState,
}

impl Controller {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: ViewState::new(),
        }
    }

    /// Read access for the presentation layer.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    // ── Bootstrap ─────────────────────────────────────────────────────────────

    /// One-time initial load: portfolio and summary, requests issued in
    /// parallel, no ordering dependency between them. The call site guards
    /// idempotence (call it once).
    pub async fn start(&mut self) {
        info!("initial load");
        self.refresh_both().await;
    }

    // ── Refresh ───────────────────────────────────────────────────────────────

    /// GET /portfolio and replace the ticker list wholesale.
    /// On failure the list stays untouched; only the status line changes.
    pub async fn refresh_portfolio(&mut self) {
        let fetched = fetch_portfolio(&self.api).await;
        self.apply_portfolio(fetched);
    }

    /// GET /portfolio/summary; same shape as the portfolio refresh.
    pub async fn refresh_summary(&mut self) {
        let fetched = fetch_summary(&self.api).await;
        self.apply_summary(fetched);
    }

    /// Both refreshes with their requests in flight concurrently.
    /// Whichever future resolves later changes nothing for the other field:
    /// application is per field, last write wins.
    async fn refresh_both(&mut self) {
        let (portfolio, summary) =
            tokio::join!(fetch_portfolio(&self.api), fetch_summary(&self.api));
        self.apply_portfolio(portfolio);
        self.apply_summary(summary);
    }

    fn apply_portfolio(&mut self, fetched: anyhow::Result<Vec<Ticker>>) {
        match fetched {
            Ok(portfolio) => {
                debug!(count = portfolio.len(), "portfolio replaced");
                self.state.replace_portfolio(portfolio);
            }
            Err(err) => {
                warn!(error = %err, "portfolio fetch failed");
                self.state
                    .replace_status(Status::Failure(FETCH_PORTFOLIO_FAILED.to_string()));
            }
        }
    }

    fn apply_summary(&mut self, fetched: anyhow::Result<Vec<SummaryEntry>>) {
        match fetched {
            Ok(summary) => {
                debug!(count = summary.len(), "summary replaced");
                self.state.replace_summary(summary);
            }
            Err(err) => {
                warn!(error = %err, "summary fetch failed");
                self.state
                    .replace_status(Status::Failure(FETCH_SUMMARY_FAILED.to_string()));
            }
        }
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Track the in-progress ticker text. Upper-cased here, at input time,
    /// so pending input, request payload and the server echo all agree.
    pub fn set_pending_input(&mut self, raw: &str) {
        self.state.replace_pending_input(raw.to_uppercase());
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Add a ticker, then refetch both collections from the server.
    ///
    /// Blank input (after trimming) is a precondition skip: no request, no
    /// state change. On rejection the pending input is kept so the user can
    /// correct it, and nothing is refetched.
    pub async fn add_ticker(&mut self, raw: &str) {
        let Some(ticker) = Ticker::parse(raw) else {
            return;
        };

        let body = json!({ "ticker": ticker });
        match self
            .api
            .request("/portfolio/add", Method::POST, Some(&body))
            .await
        {
            Ok(resp) => {
                info!(ticker = %ticker, "ticker added");
                self.state
                    .replace_status(Status::Success(message_text(&resp, "Ticker added")));
                self.state.replace_pending_input(String::new());
                self.refresh_both().await;
            }
            Err(err) => {
                warn!(ticker = %ticker, error = %err, "add failed");
                self.state
                    .replace_status(failure_status(&err, ADD_NETWORK_FAILED, ADD_REJECTED));
            }
        }
    }

    /// Remove a ticker, then refetch both collections from the server.
    pub async fn remove_ticker(&mut self, ticker: &Ticker) {
        let body = json!({ "ticker": ticker });
        match self
            .api
            .request("/portfolio/remove", Method::POST, Some(&body))
            .await
        {
            Ok(resp) => {
                info!(ticker = %ticker, "ticker removed");
                self.state
                    .replace_status(Status::Success(message_text(&resp, "Ticker removed")));
                self.refresh_both().await;
            }
            Err(err) => {
                warn!(ticker = %ticker, error = %err, "remove failed");
                self.state.replace_status(failure_status(
                    &err,
                    REMOVE_NETWORK_FAILED,
                    REMOVE_REJECTED,
                ));
            }
        }
    }

    // ── Notification ──────────────────────────────────────────────────────────

    /// Trigger the email report. Touches nothing but the status line.
    pub async fn send_report(&mut self) {
        match self.api.request("/send-email", Method::GET, None).await {
            Ok(resp) => {
                info!("report requested");
                self.state
                    .replace_status(Status::Success(message_text(&resp, "Report sent")));
            }
            Err(err) => {
                warn!(error = %err, "report failed");
                self.state.replace_status(failure_status(
                    &err,
                    REPORT_NETWORK_FAILED,
                    REPORT_REJECTED,
                ));
            }
        }
    }
}

// ─── Fetch helpers ────────────────────────────────────────────────────────────

async fn fetch_portfolio(api: &ApiClient) -> anyhow::Result<Vec<Ticker>> {
    let body = api.request("/portfolio", Method::GET, None).await?;
    let parsed: PortfolioResponse =
        serde_json::from_value(body).context("malformed portfolio response")?;
    Ok(parsed.portfolio)
}

async fn fetch_summary(api: &ApiClient) -> anyhow::Result<Vec<SummaryEntry>> {
    let body = api.request("/portfolio/summary", Method::GET, None).await?;
    let parsed: SummaryResponse =
        serde_json::from_value(body).context("malformed summary response")?;
    Ok(parsed.summary)
}

/// Success text from a mutation/notify response, with a generic fallback.
fn message_text(resp: &Value, fallback: &str) -> String {
    resp.get("message")
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

/// Network failures and service rejections carry different fallback texts;
/// a rejection with a detail field surfaces the server's own words.
fn failure_status(err: &TransportError, network_fallback: &str, rejected_fallback: &str) -> Status {
    let fallback = match err {
        TransportError::Network(_) => network_fallback,
        TransportError::Application { .. } => rejected_fallback,
    };
    Status::Failure(err.user_text(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_pending_input_uppercased_at_input_time() {
        let api = ApiClient::new(reqwest::Client::new(), "http://unused");
        let mut controller = Controller::new(api);
        controller.set_pending_input("tsLa");
        assert_eq!(controller.state().pending_input(), "TSLA");
    }

    #[test]
    fn test_message_text_fallback() {
        assert_eq!(message_text(&json!({}), "Ticker added"), "Ticker added");
        assert_eq!(
            message_text(&json!({"message": "AAPL added to portfolio"}), "x"),
            "AAPL added to portfolio"
        );
    }

    #[test]
    fn test_failure_status_picks_fallback_per_class() {
        let rejected = TransportError::Application {
            status: StatusCode::BAD_REQUEST,
            message: None,
        };
        assert_eq!(
            failure_status(&rejected, "Error adding ticker", "Failed to add ticker"),
            Status::Failure("Failed to add ticker".to_string())
        );

        let detailed = TransportError::Application {
            status: StatusCode::NOT_FOUND,
            message: Some("Ticker not found in portfolio".to_string()),
        };
        assert_eq!(
            failure_status(&detailed, "Error removing ticker", "Failed to remove ticker"),
            Status::Failure("Ticker not found in portfolio".to_string())
        );
    }
}
