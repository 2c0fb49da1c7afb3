//! # Error Types
//!
//! Validation failures shared by content loading and form handling.
//! Messages are written for end users: the API layer returns them verbatim
//! in 422 responses.

use thiserror::Error;

/// A single rule violation on user-supplied or content-supplied data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A slug contained characters outside `[a-z0-9-]` or misplaced dashes.
    #[error("invalid slug {slug:?}: {reason}")]
    InvalidSlug { slug: String, reason: &'static str },

    /// A required field was absent or blank after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// An e-mail address did not have the `local@domain.tld` shape.
    #[error("Please enter a valid {0}")]
    InvalidEmail(&'static str),

    /// A field was shorter than its minimum length.
    #[error("{field} must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    /// A field was longer than its maximum length.
    #[error("{field} must be at most {max} characters long")]
    TooLong { field: &'static str, max: usize },

    /// A numeric field must be strictly positive.
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    /// A numeric field exceeded the largest value the backend stores.
    #[error("{field} must be at most {max}")]
    TooLarge { field: &'static str, max: u64 },

    /// Two fields that must match did not.
    #[error("{0}")]
    Mismatch(&'static str),

    /// A required acknowledgement (checkbox) was not given.
    #[error("{0}")]
    NotAccepted(&'static str),

    /// A choice field held a value outside its option list.
    #[error("{field} must be one of: {allowed}")]
    UnknownOption {
        field: &'static str,
        allowed: String,
    },
}

impl ValidationError {
    /// Build an [`ValidationError::UnknownOption`] from a static option list.
    pub fn unknown_option(field: &'static str, options: &[&str]) -> Self {
        Self::UnknownOption {
            field,
            allowed: options.join(", "),
        }
    }
}
