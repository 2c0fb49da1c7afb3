//! Lane lookup keyed by `(state_slug, lane_slug)`.
//!
//! Lane slugs are only unique within a state (`portland-to-chicago` exists
//! for both Oregon and Maine), so the index key is the pair.

use std::collections::HashMap;

use gt_core::canonical_slug;

use crate::error::ContentError;
use crate::state::{Lane, State};

#[derive(Debug, Clone, Default)]
pub struct LaneRegistry {
    lanes: Vec<Lane>,
    index: HashMap<(String, String), usize>,
    by_state: HashMap<String, (usize, usize)>,
}

impl LaneRegistry {
    /// Index the lanes of every state, in state then lane order.
    pub fn from_states(states: &[State]) -> Result<Self, ContentError> {
        let mut lanes = Vec::new();
        let mut index = HashMap::new();
        let mut by_state = HashMap::with_capacity(states.len());

        for state in states {
            let start = lanes.len();
            for lane in &state.lanes {
                let key = (state.slug.clone(), lane.slug.clone());
                if index.insert(key, lanes.len()).is_some() {
                    return Err(ContentError::DuplicateSlug {
                        kind: "lane",
                        slug: format!("{}/{}", state.slug, lane.slug),
                    });
                }
                lanes.push(lane.clone());
            }
            by_state.insert(state.slug.clone(), (start, lanes.len()));
        }

        Ok(Self {
            lanes,
            index,
            by_state,
        })
    }

    /// Look up a lane. The lane slug is canonicalized first, so legacy
    /// double-dash URLs (`chicago--to--dallas`) resolve too.
    pub fn get(&self, state_slug: &str, lane_slug: &str) -> Option<&Lane> {
        let key = (state_slug.to_string(), canonical_slug(lane_slug));
        self.index.get(&key).and_then(|&i| self.lanes.get(i))
    }

    pub fn exists(&self, state_slug: &str, lane_slug: &str) -> bool {
        self.get(state_slug, lane_slug).is_some()
    }

    pub fn all(&self) -> &[Lane] {
        &self.lanes
    }

    /// Lanes of one state; empty when the state is unknown.
    pub fn all_in(&self, state_slug: &str) -> &[Lane] {
        self.by_state
            .get(state_slug)
            .and_then(|&(start, end)| self.lanes.get(start..end))
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_state, StateSeed};
    use crate::registry::Registry;

    fn states() -> Vec<State> {
        [
            ("Oregon", "OR", vec!["Portland→Chicago", "Portland→Dallas"]),
            ("Maine", "ME", vec!["Portland→Chicago"]),
        ]
        .into_iter()
        .map(|(name, abbreviation, lanes)| {
            generate_state(&StateSeed {
                name: name.to_string(),
                abbreviation: abbreviation.to_string(),
                lanes: lanes.into_iter().map(String::from).collect(),
            })
            .unwrap()
        })
        .collect()
    }

    #[test]
    fn same_lane_slug_in_two_states() {
        let lanes = LaneRegistry::from_states(&states()).unwrap();
        assert_eq!(lanes.len(), 3);
        let oregon = lanes.get("oregon", "portland-to-chicago").unwrap();
        let maine = lanes.get("maine", "portland-to-chicago").unwrap();
        assert_eq!(oregon.origin, "Portland, OR");
        assert_eq!(maine.origin, "Portland, ME");
    }

    #[test]
    fn legacy_double_dash_slug_resolves() {
        let lanes = LaneRegistry::from_states(&states()).unwrap();
        assert!(lanes.exists("oregon", "portland--to--dallas"));
        assert!(lanes.exists("oregon", "Portland-To-Dallas"));
        assert!(!lanes.exists("maine", "portland-to-dallas"));
        assert!(!lanes.exists("ohio", "portland-to-dallas"));
    }

    #[test]
    fn all_in_matches_lanes_by_state() {
        let states = states();
        let lanes = LaneRegistry::from_states(&states).unwrap();
        let registry = Registry::from_entries(states).unwrap();
        for slug in ["oregon", "maine", "nowhere"] {
            assert_eq!(lanes.all_in(slug), registry.lanes_by_state(slug));
        }
        assert!(lanes.all_in("nowhere").is_empty());
    }

    #[test]
    fn rejects_duplicate_lane_within_state() {
        let mut states = states();
        let copy = states[0].lanes[0].clone();
        states[0].lanes.push(copy);
        let err = LaneRegistry::from_states(&states).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug { kind: "lane", .. }));
    }
}
