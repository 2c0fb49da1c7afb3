//! Dispatch API client configuration.
//!
//! The base URL points at the dispatch backend. Local development URLs are
//! forced to plain `http://`, since the backend's dev server does not speak
//! TLS.

use url::Url;

/// Default backend when `DISPATCH_API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the dispatch backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchApiConfig {
    /// Normalized base URL, without a trailing slash.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl DispatchApiConfig {
    /// Build a configuration from a raw base URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ConfigError> {
        let normalized = normalize_base_url(Some(base_url));
        let base_url = Url::parse(&normalized)
            .map_err(|e| ConfigError::InvalidUrl(normalized.clone(), e.to_string()))?;
        Ok(Self {
            base_url,
            timeout_secs,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `DISPATCH_API_BASE_URL` (default: `http://localhost:8000`)
    /// - `DISPATCH_API_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("DISPATCH_API_BASE_URL").ok();
        let timeout_secs = std::env::var("DISPATCH_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(&normalize_base_url(raw.as_deref()), timeout_secs)
    }

    /// Absolute URL of a backend path such as `/api/v1/dispatch/contact/`.
    pub fn endpoint_url(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// Normalize a configured base URL.
///
/// - Missing or blank input yields [`DEFAULT_BASE_URL`].
/// - Surrounding whitespace and trailing slashes are removed.
/// - `localhost` and `127.0.0.1` URLs always use `http://`.
/// - Any other URL without a scheme gets `http://`.
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_BASE_URL.to_string();
    };
    let clean = raw.trim_end_matches('/');
    let without_scheme = clean
        .strip_prefix("https://")
        .or_else(|| clean.strip_prefix("http://"));

    if clean.contains("localhost") || clean.contains("127.0.0.1") {
        return format!("http://{}", without_scheme.unwrap_or(clean));
    }
    match without_scheme {
        Some(_) => clean.to_string(),
        None => format!("http://{clean}"),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid dispatch API URL {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_uses_default() {
        assert_eq!(normalize_base_url(None), "http://localhost:8000");
        assert_eq!(normalize_base_url(Some("   ")), "http://localhost:8000");
    }

    #[test]
    fn strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url(Some(" https://api.growtrucking.com/// ")),
            "https://api.growtrucking.com"
        );
    }

    #[test]
    fn local_hosts_are_forced_to_http() {
        assert_eq!(
            normalize_base_url(Some("https://localhost:8000/")),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url(Some("https://127.0.0.1:9000")),
            "http://127.0.0.1:9000"
        );
        assert_eq!(
            normalize_base_url(Some("localhost:8000")),
            "http://localhost:8000"
        );
    }

    #[test]
    fn missing_scheme_defaults_to_http() {
        assert_eq!(
            normalize_base_url(Some("api.example.com")),
            "http://api.example.com"
        );
        assert_eq!(
            normalize_base_url(Some("http://api.example.com")),
            "http://api.example.com"
        );
    }

    #[test]
    fn endpoint_url_joins_paths() {
        let cfg = DispatchApiConfig::new("http://127.0.0.1:9000/", 5).unwrap();
        assert_eq!(
            cfg.endpoint_url("/api/v1/dispatch/contact/"),
            "http://127.0.0.1:9000/api/v1/dispatch/contact/"
        );
        assert_eq!(
            cfg.endpoint_url("api/v1/dispatch/"),
            "http://127.0.0.1:9000/api/v1/dispatch/"
        );
    }

    #[test]
    fn base_path_is_preserved() {
        let cfg = DispatchApiConfig::new("https://example.com/backend", 5).unwrap();
        assert_eq!(
            cfg.endpoint_url("/api/v1/dispatch/"),
            "https://example.com/backend/api/v1/dispatch/"
        );
    }

    #[test]
    fn rejects_unparseable_url() {
        assert!(DispatchApiConfig::new("http://exa mple.com", 5).is_err());
    }
}
