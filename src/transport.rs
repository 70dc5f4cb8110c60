//! # transport — HTTP calls to the portfolio service
//!
//! One method, one attempt: `request` issues the call, classifies the
//! outcome, and hands back parsed JSON. No retries and no timeout at this
//! layer — a hung call is surfaced as a still-pending operation, not a
//! crash.

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::error::TransportError;

/// Thin client over a shared `reqwest::Client` and the service base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Issue a single request against `endpoint` (leading slash expected).
    ///
    /// - send failure → `TransportError::Network`
    /// - non-2xx status → `TransportError::Application` carrying whatever
    ///   user-facing text the body had
    /// - 2xx → parsed JSON body
    pub async fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(method = %method, url = %url, "issuing request");

        let mut builder = self.http.request(method, &url);
        if let Some(body) = body {
            // .json() sets the application/json content-type header
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(TransportError::Network)?;
        let status = resp.status();

        if !status.is_success() {
            let body: Value = resp.json().await.unwrap_or(Value::Null);
            return Err(TransportError::Application {
                status,
                message: extract_user_text(&body),
            });
        }

        resp.json().await.map_err(TransportError::Network)
    }
}

/// Pull the user-facing text out of a failure body.
/// The service uses `detail` for portfolio mutations and `error` for the
/// email endpoint; `message` is accepted as a last resort.
fn extract_user_text(body: &Value) -> Option<String> {
    ["detail", "error", "message"]
        .iter()
        .find_map(|key| body.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_prefers_detail() {
        let body = json!({"detail": "Not found", "message": "ignored"});
        assert_eq!(extract_user_text(&body).as_deref(), Some("Not found"));
    }

    #[test]
    fn test_extract_falls_through_to_error() {
        let body = json!({"error": "SMTP down"});
        assert_eq!(extract_user_text(&body).as_deref(), Some("SMTP down"));
    }

    #[test]
    fn test_extract_handles_unhelpful_body() {
        assert_eq!(extract_user_text(&Value::Null), None);
        assert_eq!(extract_user_text(&json!({"detail": 42})), None);
    }
}
