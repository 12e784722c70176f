//! Search, group and state filter controls

use dioxus::prelude::*;
use periodic_core::FilterChange;
use periodic_types::FilterState;
use periodic_types::formatting::{capitalize, group_option_label};

/// Each control reports one [`FilterChange`]; no debouncing, every keystroke
/// is forwarded.
#[component]
pub fn FilterBar(
    filters: FilterState,
    groups: Vec<u8>,
    states: Vec<String>,
    on_change: EventHandler<FilterChange>,
) -> Element {
    let name = filters.name.clone().unwrap_or_default();
    let group = filters.group.map(|g| g.to_string()).unwrap_or_default();
    let state = filters.state.clone().unwrap_or_default();

    rsx! {
        div { class: "filters",
            input {
                id: "search-input",
                class: "input-search",
                r#type: "search",
                placeholder: "Search by name or symbol",
                aria_label: "Search elements",
                value: "{name}",
                oninput: move |e: Event<FormData>| {
                    on_change.call(FilterChange::name_from_control(&e.value()));
                },
            }
            select {
                id: "group-filter",
                aria_label: "Filter by group",
                value: "{group}",
                onchange: move |e: Event<FormData>| {
                    on_change.call(FilterChange::group_from_control(&e.value()));
                },
                option { value: "", "All groups" }
                for g in groups {
                    option { key: "{g}", value: "{g}", {group_option_label(g)} }
                }
            }
            select {
                id: "state-filter",
                aria_label: "Filter by state",
                value: "{state}",
                onchange: move |e: Event<FormData>| {
                    on_change.call(FilterChange::state_from_control(&e.value()));
                },
                option { value: "", "All states" }
                for s in states {
                    option { key: "{s}", value: "{s}", {capitalize(&s)} }
                }
            }
        }
    }
}
