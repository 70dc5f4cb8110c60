//! # error — transport error taxonomy
//!
//! Two failure classes cross the transport boundary:
//! - `Network`: the call never completed (DNS, refused, timeout — no
//!   distinction is made between them)
//! - `Application`: the service answered with a non-success status and,
//!   usually, a human-readable reason in the body
//!
//! A client-side validation skip (empty ticker) is NOT an error: the
//! controller simply never issues the request.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a usable response.
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    /// The service responded with a failure status.
    /// `message` is the first of `detail` / `error` / `message` found in
    /// the response body, if any.
    #[error("service error ({status}): {}", .message.as_deref().unwrap_or("no detail"))]
    Application {
        status: StatusCode,
        message: Option<String>,
    },
}

impl TransportError {
    /// The single line shown to the user for this failure.
    ///
    /// Application errors surface the server's own text when it sent one;
    /// everything else falls back to the operation-specific notice.
    pub fn user_text(&self, fallback: &str) -> String {
        match self {
            TransportError::Application {
                message: Some(msg), ..
            } => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_prefers_server_text() {
        let err = TransportError::Application {
            status: StatusCode::BAD_REQUEST,
            message: Some("Ticker already in portfolio".to_string()),
        };
        assert_eq!(
            err.user_text("Failed to add ticker"),
            "Ticker already in portfolio"
        );
    }

    #[test]
    fn test_application_error_without_text_falls_back() {
        let err = TransportError::Application {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(err.user_text("Failed to add ticker"), "Failed to add ticker");
    }
}
