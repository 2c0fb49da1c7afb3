//! # Custom Extractors & Validation
//!
//! Provides the [`Validate`] trait for form DTOs and a helper to extract
//! and validate JSON bodies in handlers.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use gt_core::ValidationError;
use gt_dispatch_client::{ClaimForm, ContactForm, SignupForm};

use crate::error::AppError;

/// Request types that check business rules beyond what serde enforces.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<(), ValidationError> {
        ContactForm::validate(self)
    }
}

impl Validate for ClaimForm {
    fn validate(&self) -> Result<(), ValidationError> {
        ClaimForm::validate(self)
    }
}

impl Validate for SignupForm {
    fn validate(&self) -> Result<(), ValidationError> {
        SignupForm::validate(self)
    }
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it using the [`Validate`] trait.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate()?;
    Ok(value)
}
