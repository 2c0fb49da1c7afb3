//! # Form Submission Proxy
//!
//! Validates the site's contact, claim and signup forms, normalizes them,
//! and forwards them to the dispatch backend via `gt-dispatch-client`.
//! Every accepted submission is answered with 201 and a request id that was
//! also sent upstream as `X-Request-Id`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use gt_dispatch_client::{
    ClaimForm, ContactForm, DispatchApiError, DispatchClient, SignupForm, SignupOptions,
    Submission,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::extract_validated_json;
use crate::middleware::metrics::record_form_submission;
use crate::state::AppState;

pub const CONTACT_SUCCESS: &str = "Thank you! Your message has been sent successfully.";
pub const CLAIM_SUCCESS: &str = "Your claim request has been submitted successfully!";
pub const SIGNUP_SUCCESS: &str = "Your account has been created successfully!";

/// Submission routes only; the options listing is mounted separately so it
/// stays outside the form rate limit.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/forms/contact", post(submit_contact))
        .route("/v1/forms/claim", post(submit_claim))
        .route("/v1/forms/signup", post(submit_signup))
}

pub fn options_router() -> Router<AppState> {
    Router::new().route("/v1/forms/signup/options", get(signup_options))
}

/// Body of an accepted submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct FormSubmissionResponse {
    pub success: bool,
    pub message: String,
    pub request_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl FormSubmissionResponse {
    fn accepted(submission: Submission, default_message: &str, request_id: Uuid) -> Self {
        Self {
            success: true,
            message: submission
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| default_message.to_string()),
            request_id,
            submitted_at: Utc::now(),
            data: submission.data,
        }
    }
}

pub const DISPATCH_UNAVAILABLE: &str =
    "Form submissions are unavailable: the dispatch client failed to initialize.";

/// Helper: extract the dispatch client from AppState or return 503.
fn require_dispatch(state: &AppState) -> Result<&DispatchClient, AppError> {
    state
        .dispatch
        .as_ref()
        .ok_or_else(|| AppError::service_unavailable(DISPATCH_UNAVAILABLE))
}

fn validated<T: crate::extractors::Validate>(
    form: &'static str,
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    extract_validated_json(body).map_err(|e| {
        record_form_submission(form, "invalid");
        e
    })
}

fn forwarded(
    form: &'static str,
    request_id: Uuid,
    result: Result<Submission, DispatchApiError>,
) -> Result<Submission, AppError> {
    match result {
        Ok(submission) => {
            record_form_submission(form, "accepted");
            tracing::info!(form, %request_id, "form submission forwarded");
            Ok(submission)
        }
        Err(err) => {
            let outcome = match &err {
                DispatchApiError::Rejected { .. } => "rejected",
                DispatchApiError::Timeout { .. } => "timeout",
                _ => "failed",
            };
            record_form_submission(form, outcome);
            tracing::warn!(form, %request_id, error = %err, "form submission not accepted");
            Err(err.into())
        }
    }
}

fn unavailable<'a>(
    form: &'static str,
    state: &'a AppState,
) -> Result<&'a DispatchClient, AppError> {
    require_dispatch(state).map_err(|e| {
        record_form_submission(form, "unavailable");
        e
    })
}

/// GET /v1/forms/signup/options: Choice lists for the signup form.
#[utoipa::path(
    get,
    path = "/v1/forms/signup/options",
    responses((status = 200, description = "Signup choice lists", body = SignupOptions)),
    tag = "forms"
)]
pub(crate) async fn signup_options() -> Json<SignupOptions> {
    Json(SignupOptions::current())
}

/// POST /v1/forms/contact: Contact page form.
#[utoipa::path(
    post,
    path = "/v1/forms/contact",
    request_body = ContactForm,
    responses(
        (status = 201, description = "Submission accepted", body = FormSubmissionResponse),
        (status = 400, description = "Malformed JSON", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failed", body = crate::error::ErrorBody),
        (status = 502, description = "Dispatch backend error", body = crate::error::ErrorBody),
        (status = 503, description = "Dispatch client failed to initialize", body = crate::error::ErrorBody),
        (status = 504, description = "Dispatch backend timeout", body = crate::error::ErrorBody),
    ),
    tag = "forms"
)]
pub(crate) async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactForm>, JsonRejection>,
) -> Result<(StatusCode, Json<FormSubmissionResponse>), AppError> {
    let form = validated("contact", body)?;
    let client = unavailable("contact", &state)?;
    let request = form.to_request()?;

    let request_id = Uuid::new_v4();
    let submission = forwarded(
        "contact",
        request_id,
        client.submit_contact(&request, request_id).await,
    )?;
    Ok((
        StatusCode::CREATED,
        Json(FormSubmissionResponse::accepted(
            submission,
            CONTACT_SUCCESS,
            request_id,
        )),
    ))
}

/// POST /v1/forms/claim: "Claim your dispatcher" form.
#[utoipa::path(
    post,
    path = "/v1/forms/claim",
    request_body = ClaimForm,
    responses(
        (status = 201, description = "Submission accepted", body = FormSubmissionResponse),
        (status = 400, description = "Malformed JSON", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failed", body = crate::error::ErrorBody),
        (status = 502, description = "Dispatch backend error", body = crate::error::ErrorBody),
        (status = 503, description = "Dispatch client failed to initialize", body = crate::error::ErrorBody),
        (status = 504, description = "Dispatch backend timeout", body = crate::error::ErrorBody),
    ),
    tag = "forms"
)]
pub(crate) async fn submit_claim(
    State(state): State<AppState>,
    body: Result<Json<ClaimForm>, JsonRejection>,
) -> Result<(StatusCode, Json<FormSubmissionResponse>), AppError> {
    let form = validated("claim", body)?;
    let client = unavailable("claim", &state)?;
    let request = form.to_request()?;

    let request_id = Uuid::new_v4();
    let submission = forwarded(
        "claim",
        request_id,
        client.submit_claim(&request, request_id).await,
    )?;
    Ok((
        StatusCode::CREATED,
        Json(FormSubmissionResponse::accepted(
            submission,
            CLAIM_SUCCESS,
            request_id,
        )),
    ))
}

/// POST /v1/forms/signup: Carrier signup, company or owner-operator.
#[utoipa::path(
    post,
    path = "/v1/forms/signup",
    request_body = SignupForm,
    responses(
        (status = 201, description = "Submission accepted", body = FormSubmissionResponse),
        (status = 400, description = "Malformed JSON", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failed", body = crate::error::ErrorBody),
        (status = 502, description = "Dispatch backend error", body = crate::error::ErrorBody),
        (status = 503, description = "Dispatch client failed to initialize", body = crate::error::ErrorBody),
        (status = 504, description = "Dispatch backend timeout", body = crate::error::ErrorBody),
    ),
    tag = "forms"
)]
pub(crate) async fn submit_signup(
    State(state): State<AppState>,
    body: Result<Json<SignupForm>, JsonRejection>,
) -> Result<(StatusCode, Json<FormSubmissionResponse>), AppError> {
    let form = validated("signup", body)?;
    let client = unavailable("signup", &state)?;
    let request = form.to_request()?;

    let request_id = Uuid::new_v4();
    tracing::debug!(signup_type = request.signup_type(), %request_id, "forwarding signup");
    let submission = forwarded(
        "signup",
        request_id,
        client.submit_signup(&request, request_id).await,
    )?;
    Ok((
        StatusCode::CREATED,
        Json(FormSubmissionResponse::accepted(
            submission,
            SIGNUP_SUCCESS,
            request_id,
        )),
    ))
}
