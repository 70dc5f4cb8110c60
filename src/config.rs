//! # config — read Config from environment variables

/// Everything tickerdeck needs to start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the portfolio service, no trailing slash
    pub backend_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let backend_url = std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        Ok(Self {
            backend_url: normalize_backend_url(&backend_url),
        })
    }
}

/// A trailing slash would double up when joined with endpoint paths.
fn normalize_backend_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        assert_eq!(normalize_backend_url("http://svc:9000/"), "http://svc:9000");
        assert_eq!(normalize_backend_url("http://svc:9000"), "http://svc:9000");
    }
}
