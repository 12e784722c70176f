//! Shared types for the periodic table explorer
//!
//! Used by both the platform-independent core and the Dioxus frontend, so
//! nothing in here depends on the browser.

mod config;
mod element;
mod filter;
pub mod formatting;

pub use config::{DiagramGeometry, GROUP_COLUMNS, ViewerConfig};
pub use element::ElementRecord;
pub use filter::FilterState;
