pub mod controls;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod explorer;
pub mod filter;
pub mod table;

// Re-exports for convenience
pub use controls::{FilterChange, group_options, state_options};
pub use dataset::parse_elements;
pub use detail::{AttributeRow, DetailView, ElectronDiagram, Marker};
pub use error::LoadError;
pub use explorer::Explorer;
pub use periodic_types::{DiagramGeometry, ElementRecord, FilterState, ViewerConfig};
pub use table::{BackgroundCell, GridPlacement, TableView, Tile, render_table};
