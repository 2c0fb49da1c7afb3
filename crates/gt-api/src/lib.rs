//! # gt-api: Axum API for the Grow Trucking site
//!
//! Serves the site's content catalog as JSON and proxies its lead forms to
//! the dispatch backend.
//!
//! ## API Surface
//!
//! | Prefix | Module | Domain |
//! |--------|--------|--------|
//! | `/v1/partners`, `/v1/truck-types`, `/v1/careers`, `/v1/services`, `/v1/case-studies`, `/v1/navigation` | [`routes::content`] | Catalog |
//! | `/v1/states/*` | [`routes::states`] | States and lanes |
//! | `/areas-we-serve/*` | [`routes::areas`] | Legacy redirects |
//! | `/v1/forms/*` | [`routes::forms`] | Dispatch proxy |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → RateLimitMiddleware → Handler
//! ```
//!
//! Form submissions pass a second, stricter rate limiter.
//!
//! ## OpenAPI
//!
//! Auto-generated OpenAPI 3.1 spec via utoipa derive macros at `/openapi.json`.

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::response::{IntoResponse, Response};
use axum::Router;

use crate::error::AppError;
use crate::middleware::rate_limit::{rate_limit_middleware, RateLimiter};
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes and `/metrics` sit outside the rate limiter.
pub fn app(state: AppState) -> Router {
    let limiter = RateLimiter::new(state.config.rate_limit);
    let form_limiter = RateLimiter::new(state.config.form_rate_limit);

    let forms = routes::forms::router()
        .layer(from_fn_with_state(form_limiter, rate_limit_middleware));

    let api = Router::new()
        .merge(routes::content::router())
        .merge(routes::states::router())
        .merge(routes::areas::router())
        .merge(routes::forms::options_router())
        .merge(forms)
        .merge(openapi::router())
        .layer(from_fn_with_state(limiter, rate_limit_middleware))
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer());

    let ops = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .route("/metrics", axum::routing::get(render_metrics));

    Router::new().merge(ops).merge(api).with_state(state)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the catalog is loaded before the server binds.
async fn readiness() -> &'static str {
    "ready"
}

/// GET /metrics: Prometheus text exposition.
async fn render_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics_handle {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => AppError::service_unavailable("metrics recorder not installed").into_response(),
    }
}
