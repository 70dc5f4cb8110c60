//! # render — plain-text view of the store
//!
//! Pure formatting, no logic and no state of its own. Reproduces the
//! original page's empty-state placeholders.

use std::fmt::Write;

use crate::model::Status;
use crate::state::ViewState;

pub fn render(state: &ViewState) -> String {
    let mut out = String::new();

    match state.status() {
        Status::Idle => {}
        Status::Success(text) => { let _ = writeln!(out, "✔ {text}"); }
        Status::Failure(text) => { let _ = writeln!(out, "✘ {text}"); }
    }

    let _ = writeln!(out, "\nYour Portfolio");
    if state.portfolio().is_empty() {
        let _ = writeln!(out, "  No stocks added yet.");
    } else {
        for ticker in state.portfolio() {
            let _ = writeln!(out, "  - {ticker}");
        }
    }

    let _ = writeln!(out, "\nPortfolio Summary");
    if state.summary().is_empty() {
        let _ = writeln!(out, "  No summary available.");
    } else {
        let _ = writeln!(out, "  {:<8} {:>12} {:>10}", "Ticker", "Price", "Change %");
        for entry in state.summary() {
            let price = entry
                .price
                .map(|p| format!("{p:.2}"))
                .unwrap_or_else(|| "N/A".to_string());
            let change = entry
                .change_percent
                .map(|c| format!("{c:+.2}%"))
                .unwrap_or_else(|| "N/A".to_string());
            let _ = write!(out, "  {:<8} {:>12} {:>10}", entry.ticker, price, change);
            if let Some(error) = &entry.error {
                let _ = write!(out, "  ({error})");
            }
            let _ = writeln!(out);
        }
    }

    out
}
