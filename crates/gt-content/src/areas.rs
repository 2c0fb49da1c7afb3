//! `/areas-we-serve/...` resolution.
//!
//! The legacy areas menu links to `/areas-we-serve/{region}/{state}`. Only
//! the last segment matters: it is matched against the state catalog and
//! the visitor is sent to that state's page, or to the listing when nothing
//! matches. The route never 404s.

use gt_core::normalize_segment;

use crate::state::{State, StateRegistry};

/// Where an areas-we-serve path redirects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaRedirect {
    /// A state page, by slug.
    State(String),
    /// The `/states` listing.
    Listing,
}

impl AreaRedirect {
    pub fn location(&self) -> String {
        match self {
            Self::State(slug) => format!("/states/{slug}"),
            Self::Listing => "/states".to_string(),
        }
    }
}

fn state_matches(state: &State, segment: &str) -> bool {
    state.slug == segment
        || state.slug.to_lowercase() == segment
        || normalize_segment(&state.name) == segment
        || normalize_segment(&state.display_name) == segment
}

/// Resolve the path segments that follow `/areas-we-serve/`.
///
/// Empty segments (from doubled or trailing slashes) are skipped; region
/// segments before the last one are ignored.
pub fn resolve_area<'a, I>(segments: I, states: &StateRegistry) -> AreaRedirect
where
    I: IntoIterator<Item = &'a str>,
{
    let Some(last) = segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .last()
    else {
        return AreaRedirect::Listing;
    };

    let segment = normalize_segment(last);
    states
        .iter()
        .find(|state| state_matches(state, &segment))
        .map_or(AreaRedirect::Listing, |state| {
            AreaRedirect::State(state.slug.clone())
        })
}

/// Resolve a raw path such as `midwest/ohio` or `/areas-we-serve/midwest/ohio`.
pub fn resolve_area_path(path: &str, states: &StateRegistry) -> AreaRedirect {
    let rest = path.trim().trim_start_matches('/');
    let rest = rest.strip_prefix("areas-we-serve").unwrap_or(rest);
    resolve_area(rest.split('/'), states)
}
