//! Filter controls
//!
//! Options for the group and state selectors are derived from the dataset,
//! and raw control values are turned into [`FilterChange`]s here so the UI
//! never parses anything itself.

use std::collections::BTreeSet;

use periodic_types::{ElementRecord, FilterState};

/// One change coming from a filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    /// Search text; empty clears the filter
    Name(String),
    Group(Option<u8>),
    /// Lowercase state key
    State(Option<String>),
}

impl FilterChange {
    /// Value of the search input.
    pub fn name_from_control(value: &str) -> Self {
        FilterChange::Name(value.to_string())
    }

    /// Value of the group selector. The empty option, and anything that is
    /// not a group number, clears the filter.
    pub fn group_from_control(value: &str) -> Self {
        let group = value.trim().parse::<u8>().ok().filter(|g| *g != 0);
        FilterChange::Group(group)
    }

    /// Value of the state selector, lowercased.
    pub fn state_from_control(value: &str) -> Self {
        let state = value.trim();
        if state.is_empty() {
            FilterChange::State(None)
        } else {
            FilterChange::State(Some(state.to_lowercase()))
        }
    }

    /// Overwrite the one field this change controls.
    pub fn apply_to(self, filters: &mut FilterState) {
        match self {
            FilterChange::Name(name) => {
                filters.name = if name.is_empty() { None } else { Some(name) };
            }
            FilterChange::Group(group) => filters.group = group,
            FilterChange::State(state) => filters.state = state,
        }
    }
}

/// Distinct groups present in the dataset, ascending. Groupless elements
/// contribute nothing.
pub fn group_options(elements: &[ElementRecord]) -> Vec<u8> {
    elements
        .iter()
        .filter_map(|e| e.group)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct lowercase states present in the dataset, ascending.
pub fn state_options(elements: &[ElementRecord]) -> Vec<String> {
    elements
        .iter()
        .map(|e| e.state_key())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
