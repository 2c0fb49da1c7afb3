//! # Middleware
//!
//! Execution order: `TraceLayer → metrics → rate limit → handler`.

pub mod metrics;
pub mod rate_limit;
pub mod tracing_layer;
