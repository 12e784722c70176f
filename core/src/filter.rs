//! Filter predicates
//!
//! Predicates run in a fixed order (name, group, state) and stop at the first
//! failure, so an element rejected by name is never checked against the
//! group or state filter.

use periodic_types::{ElementRecord, FilterState};

/// Case-insensitive substring match on name or symbol.
///
/// An unset or empty query matches everything.
pub fn matches_name(element: &ElementRecord, query: Option<&str>) -> bool {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return true;
    };
    let needle = query.to_lowercase();
    element.name.to_lowercase().contains(&needle) || element.symbol.to_lowercase().contains(&needle)
}

/// Exact group match. Elements without a group never match an active filter.
pub fn matches_group(element: &ElementRecord, group: Option<u8>) -> bool {
    match group {
        None => true,
        Some(g) => element.group == Some(g),
    }
}

/// Exact match of the lowercased state against an already lowercase key.
pub fn matches_state(element: &ElementRecord, state: Option<&str>) -> bool {
    match state.filter(|s| !s.is_empty()) {
        None => true,
        Some(key) => element.state_key() == key,
    }
}

/// Whether the element passes every active filter.
pub fn admits(element: &ElementRecord, filters: &FilterState) -> bool {
    matches_name(element, filters.name_query())
        && matches_group(element, filters.group)
        && matches_state(element, filters.state_query())
}
