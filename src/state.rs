//! # state — the view state store
//!
//! Four independent fields, each replaced whole on every update. No merging,
//! no validation (the controller validates), no locking — the controller is
//! the only writer and runs single-threaded.

use crate::model::{Status, SummaryEntry, Ticker};

#[derive(Debug, Default)]
pub struct ViewState {
    /// Server-owned ticker list; order is opaque to the client.
    portfolio: Vec<Ticker>,
    /// One row per ticker the service chose to report on.
    summary: Vec<SummaryEntry>,
    /// In-progress ticker text, already upper-cased at input time.
    pending_input: String,
    /// Most recent operation outcome; last write wins.
    status: Status,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn portfolio(&self) -> &[Ticker] {
        &self.portfolio
    }

    pub fn replace_portfolio(&mut self, portfolio: Vec<Ticker>) {
        self.portfolio = portfolio;
    }

    pub fn summary(&self) -> &[SummaryEntry] {
        &self.summary
    }

    pub fn replace_summary(&mut self, summary: Vec<SummaryEntry>) {
        self.summary = summary;
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn replace_pending_input(&mut self, text: String) {
        self.pending_input = text;
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn replace_status(&mut self, status: Status) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tickers(symbols: &[&str]) -> Vec<Ticker> {
        symbols.iter().map(|s| Ticker::parse(s).unwrap()).collect()
    }

    #[test]
    fn test_replace_portfolio_is_total() {
        let mut state = ViewState::new();
        state.replace_portfolio(make_tickers(&["AAPL", "TSLA"]));
        state.replace_portfolio(make_tickers(&["MSFT"]));
        assert_eq!(state.portfolio(), make_tickers(&["MSFT"]).as_slice());
    }

    #[test]
    fn test_status_last_write_wins() {
        let mut state = ViewState::new();
        state.replace_status(Status::Success("Added TSLA".into()));
        state.replace_status(Status::Failure("Not found".into()));
        assert_eq!(*state.status(), Status::Failure("Not found".into()));
    }

    #[test]
    fn test_fields_are_independent() {
        let mut state = ViewState::new();
        state.replace_pending_input("TS".into());
        state.replace_portfolio(make_tickers(&["AAPL"]));
        assert_eq!(state.pending_input(), "TS");
        assert!(state.summary().is_empty());
        assert_eq!(*state.status(), Status::Idle);
    }
}
