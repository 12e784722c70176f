//! Top-level controller
//!
//! [`Explorer`] owns the dataset, the filter state, and the selected element.
//! The frontend keeps one instance in a signal; each handler calls a method
//! here and reads back a fresh [`TableView`] or [`DetailView`].

use periodic_types::{ElementRecord, FilterState, ViewerConfig};

use crate::controls::{self, FilterChange};
use crate::detail::DetailView;
use crate::table::{TableView, render_table};

#[derive(Debug, Clone, PartialEq)]
pub struct Explorer {
    elements: Vec<ElementRecord>,
    filters: FilterState,
    selected: Option<u32>,
    config: ViewerConfig,
}

impl Explorer {
    pub fn new(elements: Vec<ElementRecord>, config: ViewerConfig) -> Self {
        Self {
            elements,
            filters: FilterState::default(),
            selected: None,
            config,
        }
    }

    fn element(&self, number: u32) -> Option<&ElementRecord> {
        self.elements.iter().find(|e| e.number == number)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Apply one filter control change.
    pub fn apply(&mut self, change: FilterChange) {
        tracing::debug!(?change, "Filter changed");
        change.apply_to(&mut self.filters);
    }

    /// Full table for the current filters.
    pub fn table(&self) -> TableView {
        render_table(&self.elements, &self.filters)
    }

    pub fn group_options(&self) -> Vec<u8> {
        controls::group_options(&self.elements)
    }

    pub fn state_options(&self) -> Vec<String> {
        controls::state_options(&self.elements)
    }

    /// Select an element for the detail panel.
    ///
    /// Returns false and leaves the selection alone if no element has this
    /// atomic number.
    pub fn open(&mut self, number: u32) -> bool {
        if self.element(number).is_none() {
            tracing::warn!(number, "No element with this atomic number");
            return false;
        }
        self.selected = Some(number);
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Detail panel for the selected element, if the panel is open.
    pub fn detail(&self) -> Option<DetailView> {
        let element = self.element(self.selected?)?;
        Some(DetailView::for_element(element, &self.config.diagram))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(number: u32, symbol: &str, name: &str, group: Option<u8>, period: u32) -> ElementRecord {
        ElementRecord {
            number,
            symbol: symbol.into(),
            name: name.into(),
            group,
            period,
            category: "Test".into(),
            state: String::from(if number == 35 { "Liquid" } else { "Gas" }),
            atomic_mass: number as f64,
            electrons: number,
        }
    }

    fn explorer() -> Explorer {
        Explorer::new(
            vec![
                element(1, "H", "Hydrogen", Some(1), 1),
                element(8, "O", "Oxygen", Some(16), 2),
                element(9, "F", "Fluorine", Some(17), 2),
                element(17, "Cl", "Chlorine", Some(17), 3),
                element(35, "Br", "Bromine", Some(17), 4),
            ],
            ViewerConfig::default(),
        )
    }

    #[test]
    fn test_initial_render_is_unfiltered() {
        let ex = explorer();
        assert!(ex.filters().is_empty());
        assert!(ex.detail().is_none());
        let view = ex.table();
        assert_eq!(view.tile_count(), 5);
        assert_eq!(view.background.len(), 4 * 18);
    }

    #[test]
    fn test_filter_changes_rerender() {
        let mut ex = explorer();
        ex.apply(FilterChange::group_from_control("17"));
        assert_eq!(ex.table().tile_count(), 3);

        ex.apply(FilterChange::state_from_control("Liquid"));
        let view = ex.table();
        assert_eq!(view.tile_count(), 1);
        assert_eq!(view.tiles[0].symbol, "Br");

        // Reverting controls to their empty value clears the filters
        ex.apply(FilterChange::group_from_control(""));
        ex.apply(FilterChange::state_from_control(""));
        assert!(ex.filters().is_empty());
        assert_eq!(ex.table().tile_count(), 5);
    }

    #[test]
    fn test_options() {
        let ex = explorer();
        assert_eq!(ex.group_options(), vec![1, 16, 17]);
        assert_eq!(ex.state_options(), vec!["gas", "liquid"]);
    }

    #[test]
    fn test_open_then_open_other_replaces_detail() {
        let mut ex = explorer();
        assert!(ex.open(8));
        assert_eq!(ex.detail().unwrap().heading, "Oxygen (O)");

        assert!(ex.open(17));
        let detail = ex.detail().unwrap();
        assert_eq!(detail.heading, "Chlorine (Cl)");
        assert_eq!(detail.number, 17);
        assert_eq!(detail.diagram.markers.len(), 17);
        assert!(detail.attributes.iter().all(|row| !row.value.contains("Oxygen")));
    }

    #[test]
    fn test_open_unknown_keeps_selection() {
        let mut ex = explorer();
        assert!(ex.open(9));
        assert!(!ex.open(200));
        assert_eq!(ex.detail().unwrap().number, 9);
    }

    #[test]
    fn test_close() {
        let mut ex = explorer();
        ex.open(1);
        ex.close();
        assert!(ex.detail().is_none());
    }

    #[test]
    fn test_reopen_after_close() {
        let mut ex = explorer();
        ex.open(8);
        ex.close();
        assert!(ex.open(8));
        assert_eq!(ex.detail().unwrap().number, 8);
        ex.open(9);
        assert_ne!(ex.detail().unwrap().number, 8);
    }

    #[test]
    fn test_bundled_masses_shown_as_stored() {
        let body = include_str!("../../app/public/elements.json");
        let elements = crate::dataset::parse_elements(body).unwrap();
        let mut ex = Explorer::new(elements.clone(), ViewerConfig::default());
        for el in &elements {
            assert!(ex.open(el.number));
            let detail = ex.detail().unwrap();
            assert_eq!(detail.attribute("Atomic Mass"), Some(el.atomic_mass.to_string().as_str()));
        }
        ex.open(2);
        assert_eq!(ex.detail().unwrap().attribute("Atomic Mass"), Some("4.0026"));
    }

    #[test]
    fn test_filters_do_not_close_detail() {
        let mut ex = explorer();
        ex.open(1);
        ex.apply(FilterChange::name_from_control("chl"));
        assert_eq!(ex.detail().unwrap().number, 1);
    }
}
