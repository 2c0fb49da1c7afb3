//! # gt-dispatch-client -- Typed client for the dispatch submission API
//!
//! The dispatch backend stores the site's lead forms. This crate is the only
//! path the rest of the workspace uses to reach it:
//! - **Forms** ([`forms`]): camelCase site payloads with validation and
//!   normalization into backend requests.
//! - **Client** ([`DispatchClient`]): submits contact, claim and signup
//!   requests and pings the backend.
//!
//! ## Endpoints
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/v1/dispatch/` | Connectivity test |
//! | POST   | `/api/v1/dispatch/contact/` | Contact submission |
//! | POST   | `/api/v1/dispatch/claim/` | Claim-a-dispatcher submission |
//! | POST   | `/api/v1/dispatch/signup/` | Carrier signup |
//!
//! Every submission answers with `{ success, message, data?, errors? }`.

pub mod config;
pub mod error;
pub mod forms;
pub(crate) mod retry;
pub mod types;

pub use config::{normalize_base_url, ConfigError, DispatchApiConfig};
pub use error::DispatchApiError;
pub use forms::{
    ClaimForm, ContactForm, SignupForm, SignupOptions, SignupType, COMMUNICATION_METHODS,
    OPERATION_AREAS, TRUCK_COUNT_BUCKETS, TRUCK_TYPES,
};
pub use types::{
    ClaimSubmissionRequest, ContactSubmissionRequest, PingResponse, SignupCommon,
    SignupSubmissionRequest, Submission,
};

use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use crate::types::{field_errors, ApiEnvelope};

const PING_PATH: &str = "/api/v1/dispatch/";
const CONTACT_PATH: &str = "/api/v1/dispatch/contact/";
const CLAIM_PATH: &str = "/api/v1/dispatch/claim/";
const SIGNUP_PATH: &str = "/api/v1/dispatch/signup/";

/// Header carrying the request id assigned by the API layer.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Dispatch backend client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct DispatchClient {
    http: reqwest::Client,
    config: DispatchApiConfig,
}

impl DispatchClient {
    /// Create a client from configuration.
    pub fn new(config: DispatchApiConfig) -> Result<Self, DispatchApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("gt-dispatch-client/", env!("CARGO_PKG_VERSION")))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| DispatchApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self { http, config })
    }

    /// Create a client from `DISPATCH_API_*` environment variables.
    pub fn from_env() -> Result<Self, DispatchApiError> {
        Self::new(DispatchApiConfig::from_env()?)
    }

    pub fn config(&self) -> &DispatchApiConfig {
        &self.config
    }

    /// `POST /api/v1/dispatch/contact/`
    pub async fn submit_contact(
        &self,
        req: &ContactSubmissionRequest,
        request_id: Uuid,
    ) -> Result<Submission, DispatchApiError> {
        self.submit(CONTACT_PATH, req, request_id).await
    }

    /// `POST /api/v1/dispatch/claim/`
    pub async fn submit_claim(
        &self,
        req: &ClaimSubmissionRequest,
        request_id: Uuid,
    ) -> Result<Submission, DispatchApiError> {
        self.submit(CLAIM_PATH, req, request_id).await
    }

    /// `POST /api/v1/dispatch/signup/`
    pub async fn submit_signup(
        &self,
        req: &SignupSubmissionRequest,
        request_id: Uuid,
    ) -> Result<Submission, DispatchApiError> {
        self.submit(SIGNUP_PATH, req, request_id).await
    }

    /// `GET /api/v1/dispatch/`
    pub async fn ping(&self) -> Result<PingResponse, DispatchApiError> {
        let endpoint = format!("GET {PING_PATH}");
        let url = self.config.endpoint_url(PING_PATH);

        let resp = retry::retry_send(&endpoint, || self.http.get(&url).send())
            .await
            .map_err(|e| DispatchApiError::transport(&endpoint, e))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DispatchApiError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        resp.json()
            .await
            .map_err(|e| DispatchApiError::Deserialization { endpoint, source: e })
    }

    async fn submit<T: Serialize>(
        &self,
        path: &str,
        req: &T,
        request_id: Uuid,
    ) -> Result<Submission, DispatchApiError> {
        let endpoint = format!("POST {path}");
        let url = self.config.endpoint_url(path);
        let request_id = request_id.to_string();

        let resp = retry::retry_send(&endpoint, || {
            self.http
                .post(&url)
                .header(REQUEST_ID_HEADER, &request_id)
                .json(req)
                .send()
        })
        .await
        .map_err(|e| DispatchApiError::transport(&endpoint, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(
                endpoint = %endpoint,
                status = status.as_u16(),
                request_id = %request_id,
                "dispatch API refused submission"
            );
            return Err(match serde_json::from_str::<ApiEnvelope>(&body) {
                Ok(envelope) if envelope.message.is_some() || envelope.errors.is_some() => {
                    DispatchApiError::Rejected {
                        endpoint,
                        status: status.as_u16(),
                        errors: field_errors(envelope.errors.as_ref()),
                        message: envelope
                            .message
                            .unwrap_or_else(|| "Validation failed".to_string()),
                    }
                }
                _ => DispatchApiError::ApiError {
                    endpoint,
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let envelope: ApiEnvelope = resp
            .json()
            .await
            .map_err(|e| DispatchApiError::Deserialization {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        tracing::debug!(endpoint = %endpoint, request_id = %request_id, "submission accepted");
        Ok(Submission {
            message: envelope.message,
            data: envelope.data,
        })
    }
}
