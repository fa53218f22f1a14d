//! Name search over the body registry.
//!
//! Matching is a case-insensitive substring test; results keep registry
//! insertion order and are capped. Identity lookup by name is exact.

use bevy::prelude::*;

use crate::body::CelestialBody;

/// Maximum number of suggestions returned by a search.
pub const MAX_SUGGESTIONS: usize = 10;

/// Names containing `query` (case-insensitive), in insertion order, first `limit`.
///
/// An empty query yields no suggestions.
pub fn suggestions(bodies: &[CelestialBody], query: &str, limit: usize) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    bodies
        .iter()
        .filter(|body| body.name.to_lowercase().contains(&query))
        .map(|body| body.name.clone())
        .take(limit)
        .collect()
}

/// State of the search box, owned by the UI and cleared by navigation.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub open: bool,
    pub query: String,
    pub suggestions: Vec<String>,
}

impl SearchState {
    /// Replace the query and recompute suggestions.
    pub fn set_query(&mut self, bodies: &[CelestialBody], query: impl Into<String>, limit: usize) {
        self.query = query.into();
        self.refresh(bodies, limit);
    }

    /// Recompute suggestions for the current query.
    pub fn refresh(&mut self, bodies: &[CelestialBody], limit: usize) {
        self.suggestions = suggestions(bodies, &self.query, limit);
    }

    /// Target of "confirm": the first suggestion, if any.
    pub fn first_suggestion(&self) -> Option<&str> {
        self.suggestions.first().map(String::as_str)
    }

    /// Close the search box and forget the query.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyDetails, BodyKind, NeoDetails, NewBody};
    use crate::registry::BodyRegistry;
    use crate::scene::SceneGraph;

    fn registry(names: &[&str]) -> BodyRegistry {
        let mut registry = BodyRegistry::default();
        let mut scene = SceneGraph::new();
        registry.append(
            &mut scene,
            names.iter().map(|name| {
                NewBody::new(
                    *name,
                    BodyKind::NearEarthObject,
                    3.0,
                    BodyDetails::NearEarthObject(NeoDetails::default()),
                )
            }),
        );
        registry
    }

    #[test]
    fn test_substring_search_keeps_insertion_order() {
        let reg = registry(&["Mars", "Saturn", "Earth", "Eros A", "Apophis"]);
        let found = suggestions(reg.as_slice(), "a", MAX_SUGGESTIONS);
        assert_eq!(found, ["Mars", "Saturn", "Earth", "Eros A", "Apophis"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let reg = registry(&["Mars", "Saturn", "Earth", "Eros A", "Apophis"]);
        assert_eq!(suggestions(reg.as_slice(), "EROS", 10), ["Eros A"]);
        assert_eq!(suggestions(reg.as_slice(), "ar", 10), ["Mars", "Earth"]);
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let reg = registry(&["Mars"]);
        assert!(suggestions(reg.as_slice(), "", 10).is_empty());
    }

    #[test]
    fn test_suggestions_capped() {
        let names: Vec<String> = (0..25).map(|i| format!("2024 X{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let reg = registry(&refs);

        let found = suggestions(reg.as_slice(), "2024", MAX_SUGGESTIONS);
        assert_eq!(found.len(), MAX_SUGGESTIONS);
        assert_eq!(found[0], "2024 X0");
        assert_eq!(found[9], "2024 X9");
    }

    #[test]
    fn test_substring_match_beats_later_exact_match() {
        let reg = registry(&["Marsden", "Mars"]);
        let mut state = SearchState::default();
        state.set_query(reg.as_slice(), "mars", MAX_SUGGESTIONS);
        assert_eq!(state.first_suggestion(), Some("Marsden"));
    }

    #[test]
    fn test_clear_resets_state() {
        let reg = registry(&["Mars"]);
        let mut state = SearchState {
            open: true,
            ..default()
        };
        state.set_query(reg.as_slice(), "m", MAX_SUGGESTIONS);
        assert_eq!(state.first_suggestion(), Some("Mars"));

        state.clear();
        assert_eq!(state, SearchState::default());
        assert_eq!(state.first_suggestion(), None);
    }
}
