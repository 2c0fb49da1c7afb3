//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! - **Catalog**: immutable site content, shared behind an `Arc`.
//! - **Dispatch client**: optional; form routes answer 503 without one.
//! - **Metrics handle**: optional Prometheus renderer for `/metrics`.

use std::path::PathBuf;
use std::sync::Arc;

use gt_content::Catalog;
use gt_dispatch_client::DispatchClient;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::middleware::rate_limit::RateLimitConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Directory of content YAML; `None` serves the embedded content.
    pub content_dir: Option<PathBuf>,
    pub rate_limit: RateLimitConfig,
    pub form_rate_limit: RateLimitConfig,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            content_dir: None,
            rate_limit: RateLimitConfig::default(),
            form_rate_limit: RateLimitConfig::FORMS,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables: `PORT`, `CONTENT_DIR`, `RATE_LIMIT_MAX`,
    /// `RATE_LIMIT_WINDOW_SECS`, `FORM_RATE_LIMIT_MAX`, `LOG_FORMAT`.
    /// Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str| var(key).and_then(|v| v.trim().parse::<u64>().ok());

        let window_secs = number("RATE_LIMIT_WINDOW_SECS")
            .filter(|&w| w > 0)
            .unwrap_or(defaults.rate_limit.window_secs);
        Self {
            port: var("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            content_dir: var("CONTENT_DIR")
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
            rate_limit: RateLimitConfig {
                max_requests: number("RATE_LIMIT_MAX").unwrap_or(defaults.rate_limit.max_requests),
                window_secs,
            },
            form_rate_limit: RateLimitConfig {
                max_requests: number("FORM_RATE_LIMIT_MAX")
                    .unwrap_or(defaults.form_rate_limit.max_requests),
                window_secs,
            },
            log_format: LogFormat::parse(var("LOG_FORMAT").as_deref()),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub dispatch: Option<DispatchClient>,
    pub config: AppConfig,
    pub metrics_handle: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("catalog", &self.catalog.fingerprint())
            .field("dispatch", &self.dispatch.as_ref().map(|c| c.config().base_url.as_str()))
            .field("config", &self.config)
            .field("metrics", &self.metrics_handle.is_some())
            .finish()
    }
}

impl AppState {
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            dispatch: None,
            config,
            metrics_handle: None,
        }
    }

    pub fn with_dispatch(mut self, client: DispatchClient) -> Self {
        self.dispatch = Some(client);
        self
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }
}
