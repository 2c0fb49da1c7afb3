//! # gt-core: Foundational Types for the Grow Trucking Stack
//!
//! Leaf crate shared by the content catalog, the dispatch client, the HTTP
//! service and the CLI. It owns the string rules that every URL in the site
//! depends on.
//!
//! ## Key Design Principles
//!
//! 1. **One slug pipeline per entity family.** Service titles, state names and
//!    lane names each have their own normalization function. Callers never
//!    hand-roll `to_lowercase().replace(..)` chains.
//!
//! 2. **`Slug` newtype.** Registry keys are [`Slug`] values whose constructor
//!    rejects anything outside `[a-z0-9]+(-[a-z0-9]+)*`.
//!
//! 3. **Validation errors are typed.** Form and content checks return
//!    [`ValidationError`] so the API layer can map them to structured responses.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gt-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod email;
pub mod error;
pub mod slug;
pub mod text;

pub use email::{is_valid_email, normalize_email};
pub use error::ValidationError;
pub use slug::{
    canonical_slug, lane_to_slug, normalize_segment, slug_to_display_name, state_to_slug,
    title_to_slug, Slug,
};
pub use text::{title_case, word_count};
