//! Errors raised while loading or generating catalog content.

use std::path::PathBuf;

use gt_core::ValidationError;
use thiserror::Error;

/// Failure to assemble the content catalog.
///
/// Every variant names the file or entry at fault so a broken content edit
/// can be located from the log line alone.
#[derive(Error, Debug)]
pub enum ContentError {
    /// A content file could not be read from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A content file was not valid YAML for its schema.
    #[error("failed to parse {file}: {source}")]
    Yaml {
        file: &'static str,
        source: serde_yaml::Error,
    },

    /// Two entries of the same kind share a slug.
    #[error("duplicate {kind} slug {slug:?}")]
    DuplicateSlug { kind: &'static str, slug: String },

    /// An entry's slug is not a valid URL slug.
    #[error("invalid {kind} slug: {source}")]
    InvalidSlug {
        kind: &'static str,
        source: ValidationError,
    },

    /// A lane in the state table is not written as `Origin→Destination`.
    #[error("lane {lane:?} in {state} is not written as \"Origin→Destination\"")]
    MalformedLane { state: String, lane: String },

    /// A state abbreviation is not two uppercase ASCII letters.
    #[error("state {state} has invalid abbreviation {abbreviation:?}")]
    InvalidAbbreviation { state: String, abbreviation: String },
}
