//! # Slug Normalization
//!
//! Every public URL on the site is built from one of these functions:
//!
//! | Function | Used for | Example |
//! |---|---|---|
//! | [`title_to_slug`] | service anchors, truck type names | `Rate Maximization & Negotiation` → `rate-maximization-and-negotiation` |
//! | [`state_to_slug`] | state pages | `New Mexico` → `new-mexico` |
//! | [`lane_to_slug`] | lane pages | `Chicago`, `St. Louis` → `chicago-to-st-louis` |
//! | [`normalize_segment`] | `/areas-we-serve/*` matching | `New York` → `new-york` |
//!
//! [`Slug`] is the validated registry key.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Convert a free-form title into a URL slug.
///
/// Trims, lowercases, spells `&` as `and`, turns every run of characters
/// outside `[a-z0-9]` into a single dash and strips dashes at both ends.
pub fn title_to_slug(title: &str) -> String {
    let lowered = title.trim().to_lowercase().replace('&', "and");
    join_alphanumeric_runs(&lowered)
}

/// Slug for a state name: lowercase with whitespace runs replaced by `-`.
pub fn state_to_slug(name: &str) -> String {
    normalize_segment(name.trim())
}

/// Normalize a raw path segment the way state links are written.
///
/// Lowercases and replaces each whitespace run with a single dash. Unlike
/// [`title_to_slug`] it keeps every other character, so `new-york` and
/// `New York` both normalize to `new-york`.
pub fn normalize_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut in_whitespace = false;
    for c in segment.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            out.push(c);
        }
    }
    out
}

/// Slug for the lane `origin → destination`.
///
/// The arrow becomes `-to-`, whitespace becomes `-`, punctuation is dropped
/// without leaving a separator (`O'Fallon` → `ofallon`) and dash runs are
/// collapsed.
pub fn lane_to_slug(origin: &str, destination: &str) -> String {
    let name = format!("{} → {}", origin.trim(), destination.trim()).to_lowercase();
    let mut raw = String::with_capacity(name.len() + 8);
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                raw.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c == '→' {
            raw.push_str("-to-");
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            raw.push(c);
        }
    }
    canonical_slug(&raw)
}

/// Lowercase, collapse dash runs and trim dashes.
///
/// Lane URLs were once published with doubled dashes
/// (`los-angeles--to--dallas`); this maps them onto the current form.
pub fn canonical_slug(input: &str) -> String {
    input
        .to_lowercase()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Title-case each dash-separated word: `box-truck` → `Box Truck`.
pub fn slug_to_display_name(slug: &str) -> String {
    slug.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn join_alphanumeric_runs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// A validated URL slug: `[a-z0-9]+(-[a-z0-9]+)*`.
///
/// The inner string is private; [`Slug::parse`] is the only constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate and wrap a slug.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let reason = if raw.is_empty() {
            Some("slug is empty")
        } else if raw.starts_with('-') || raw.ends_with('-') {
            Some("slug starts or ends with a dash")
        } else if raw.contains("--") {
            Some("slug contains consecutive dashes")
        } else if !raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            Some("slug may only contain a-z, 0-9 and '-'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ValidationError::InvalidSlug {
                slug: raw.to_string(),
                reason,
            }),
            None => Ok(Self(raw.to_string())),
        }
    }

    /// Borrow the slug text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A title slug is either empty or a valid `Slug`.
        #[test]
        fn title_slug_is_valid_or_empty(title in "\\PC{0,60}") {
            let slug = title_to_slug(&title);
            prop_assert!(slug.is_empty() || Slug::parse(&slug).is_ok(), "bad slug {:?}", slug);
        }

        /// Slugging a slug is a no-op.
        #[test]
        fn title_slug_is_idempotent(title in "[A-Za-z0-9 &.,'-]{0,40}") {
            let once = title_to_slug(&title);
            prop_assert_eq!(title_to_slug(&once), once.clone());
        }

        /// Lane slugs always contain the `to` joiner and always parse.
        #[test]
        fn lane_slug_always_parses(origin in "[A-Za-z .']{0,24}", destination in "[A-Za-z .']{0,24}") {
            let slug = lane_to_slug(&origin, &destination);
            prop_assert!(Slug::parse(&slug).is_ok(), "bad lane slug {:?}", slug);
            prop_assert!(slug.split('-').any(|w| w == "to"));
        }

        /// Canonicalization is idempotent.
        #[test]
        fn canonical_slug_is_idempotent(raw in "[a-z0-9-]{0,40}") {
            let once = canonical_slug(&raw);
            prop_assert_eq!(canonical_slug(&once), once.clone());
        }
    }
}
