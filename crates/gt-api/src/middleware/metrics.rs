//! # Prometheus Metrics
//!
//! Request counters and latency histograms recorded through the `metrics`
//! facade. `main` installs the Prometheus recorder; without one (tests, the
//! CLI) every call is a no-op.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const HTTP_REQUESTS_TOTAL: &str = "gt_http_requests_total";
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "gt_http_request_duration_seconds";
pub const FORM_SUBMISSIONS_TOTAL: &str = "gt_form_submissions_total";

/// Install the global Prometheus recorder and return its render handle.
pub fn install_recorder() -> anyhow::Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {e}"))
}

/// Record the outcome of a form submission.
pub fn record_form_submission(form: &'static str, outcome: &'static str) {
    metrics::counter!(FORM_SUBMISSIONS_TOTAL, "form" => form, "outcome" => outcome).increment(1);
}

/// Middleware that records request count and latency per route template.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    // Route templates keep label cardinality bounded.
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    metrics::counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!(HTTP_REQUEST_DURATION_SECONDS, "method" => method, "path" => path)
        .record(started.elapsed().as_secs_f64());

    response
}
