//! Root component
//!
//! Holds the single [`Explorer`] controller in a signal. Handlers mutate it
//! through its methods and the signal write triggers the next render, which
//! rebuilds the table and detail views from scratch.

use dioxus::prelude::*;
use periodic_core::{Explorer, FilterChange};
use periodic_types::ViewerConfig;

use crate::api;
use crate::components::{ElementModal, FilterBar, PeriodicTable};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut explorer = use_signal(|| None::<Explorer>);

    // Load the dataset once; nothing renders until it arrives
    use_future(move || async move {
        let config = ViewerConfig::default();
        match api::load_elements(&config).await {
            Ok(elements) => explorer.set(Some(Explorer::new(elements, config))),
            Err(err) => tracing::error!(error = %err, "Failed to load element dataset"),
        }
    });

    let guard = explorer.read();
    let Some(ex) = guard.as_ref() else {
        return rsx! {
            document::Stylesheet { href: MAIN_CSS }
            main { class: "app" }
        };
    };

    let table = ex.table();
    let detail = ex.detail();
    let filters = ex.filters().clone();
    let groups = ex.group_options();
    let states = ex.state_options();

    let on_filter = move |change: FilterChange| {
        if let Some(ex) = explorer.write().as_mut() {
            ex.apply(change);
        }
    };
    let on_select = move |number: u32| {
        if let Some(ex) = explorer.write().as_mut() {
            ex.open(number);
        }
    };
    let on_close = move |_: ()| {
        if let Some(ex) = explorer.write().as_mut() {
            ex.close();
        }
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        main { class: "app",
            h1 { class: "app-title", "Periodic Table" }
            FilterBar { filters, groups, states, on_change: on_filter }
            PeriodicTable { view: table, on_select }
            if let Some(detail) = detail {
                // Keyed so switching elements remounts the modal and refocuses it
                ElementModal { key: "{detail.number}", detail, on_close }
            }
        }
    }
}
