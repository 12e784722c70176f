//! UI Components
//!
//! Thin adapters from the core view models to DOM nodes.

pub mod element_modal;
pub mod filter_bar;
pub mod periodic_table;

pub use element_modal::ElementModal;
pub use filter_bar::FilterBar;
pub use periodic_table::PeriodicTable;
