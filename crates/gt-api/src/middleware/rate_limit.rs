//! # Per-Client Rate Limiting
//!
//! Fixed-window request counter keyed by client address. The key is the
//! first `X-Forwarded-For` entry set by the fronting proxy, or `anonymous`.
//! Form routes carry a second, stricter limiter.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use parking_lot::Mutex;

use crate::error::ErrorBody;

/// Rate limiter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum requests per window.
    pub max_requests: u64,
    /// Window duration in seconds.
    pub window_secs: u64,
}

impl RateLimitConfig {
    /// Limit for form submissions.
    pub const FORMS: Self = Self {
        max_requests: 20,
        window_secs: 60,
    };
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 600,
            window_secs: 60,
        }
    }
}

/// Per-key window state.
#[derive(Debug, Clone)]
struct BucketState {
    count: u64,
    window_start: Instant,
}

/// Buckets plus the time expired ones were last dropped.
#[derive(Debug)]
struct Buckets {
    by_key: HashMap<String, BucketState>,
    last_sweep: Instant,
}

/// Shared rate limiter state.
///
/// Keys come from a client-supplied header, so buckets whose window has
/// passed are swept once per window to keep the map bounded.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    buckets: Arc<Mutex<Buckets>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            buckets: Arc::new(Mutex::new(Buckets {
                by_key: HashMap::new(),
                last_sweep: Instant::now(),
            })),
        }
    }

    /// Number of tracked client keys.
    pub fn tracked_keys(&self) -> usize {
        self.buckets.lock().by_key.len()
    }

    /// Count a request from `key`; `false` when the window is exhausted.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let window_secs = self.config.window_secs;
        let mut buckets = self.buckets.lock();

        if now.duration_since(buckets.last_sweep).as_secs() >= window_secs {
            let before = buckets.by_key.len();
            buckets
                .by_key
                .retain(|_, b| now.duration_since(b.window_start).as_secs() < window_secs);
            buckets.last_sweep = now;
            tracing::debug!(
                dropped = before - buckets.by_key.len(),
                "expired rate limit buckets swept"
            );
        }

        let bucket = buckets.by_key.entry(key.to_string()).or_insert(BucketState {
            count: 0,
            window_start: now,
        });

        if now.duration_since(bucket.window_start).as_secs() >= window_secs {
            bucket.count = 0;
            bucket.window_start = now;
        }

        if bucket.count >= self.config.max_requests {
            false
        } else {
            bucket.count += 1;
            true
        }
    }
}

/// Rate limit key for a request.
fn client_key(request: &Request) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("anonymous")
        .to_string()
}

/// Middleware that enforces per-client rate limits.
///
/// Mounted with `axum::middleware::from_fn_with_state(limiter, rate_limit_middleware)`.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);
    if !limiter.check(&key) {
        tracing::warn!(client = %key, path = %request.uri().path(), "rate limit exceeded");
        let body = ErrorBody::new("RATE_LIMITED", "rate limit exceeded");
        return (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn limiter(max_requests: u64) -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            max_requests,
            window_secs: 60,
        })
    }

    #[test]
    fn allows_up_to_max_then_blocks() {
        let limiter = limiter(3);
        assert!(limiter.check("a"));
        assert!(limiter.check("a"));
        assert!(limiter.check("a"));
        assert!(!limiter.check("a"));
    }

    #[test]
    fn keys_are_independent() {
        let limiter = limiter(1);
        assert!(limiter.check("a"));
        assert!(!limiter.check("a"));
        assert!(limiter.check("b"));
    }

    #[test]
    fn window_resets() {
        let limiter = limiter(1);
        let start = Instant::now();
        assert!(limiter.check_at("a", start));
        assert!(!limiter.check_at("a", start + Duration::from_secs(59)));
        assert!(limiter.check_at("a", start + Duration::from_secs(60)));
    }

    #[test]
    fn expired_buckets_are_dropped_after_a_window() {
        let limiter = limiter(5);
        let start = Instant::now();
        for i in 0..5_000 {
            assert!(limiter.check_at(&format!("198.51.100.{i}"), start));
        }
        assert_eq!(limiter.tracked_keys(), 5_000);

        assert!(limiter.check_at("203.0.113.7", start + Duration::from_secs(3600)));
        assert_eq!(limiter.tracked_keys(), 1);
    }

    #[test]
    fn live_buckets_survive_a_sweep() {
        let limiter = limiter(1);
        let start = Instant::now();
        assert!(limiter.check_at("old", start));
        assert!(limiter.check_at("recent", start + Duration::from_secs(30)));

        assert!(limiter.check_at("new", start + Duration::from_secs(61)));
        assert_eq!(limiter.tracked_keys(), 2);
        assert!(!limiter.check_at("recent", start + Duration::from_secs(62)));
    }

    #[test]
    fn client_key_uses_first_forwarded_address() {
        let request = Request::builder()
            .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(client_key(&request), "203.0.113.9");

        let request = Request::builder().body(axum::body::Body::empty()).unwrap();
        assert_eq!(client_key(&request), "anonymous");
    }
}
