//! Periodic table view model
//!
//! [`render_table`] turns the dataset and the current filters into a
//! [`TableView`]: a complete, declarative description of the grid. The view is
//! rebuilt from scratch on every call and holds no references to the UI, so the
//! frontend only has to map it onto DOM nodes.
//!
//! ```text
//!  column  1  2  3 ............................ 18
//!  row 1   ┌──┬──┬──────────────────────────────┬──┐
//!   ...    │ background cells: max_period x 18    │
//!  row P   └──┴──┴──────────────────────────────┴──┘
//!  row P+1  (spacer)
//!  row P+2        overflow block: groupless elements,
//!   ...           one row per period, from column 3
//! ```

mod layout;


use periodic_types::{ElementRecord, FilterState, GROUP_COLUMNS};

use crate::filter::admits;

pub use layout::{GridPlacement, MAX_GRID_ROWS};

/// Non-interactive cell of the background grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundCell {
    pub row: u32,
    pub column: u32,
}

/// Interactive tile for one element that passed the filters
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub number: u32,
    pub symbol: String,
    pub name: String,
    pub category: String,
    pub placement: GridPlacement,
}

impl Tile {
    /// Category as a CSS class fragment ("Noble gas" -> "noble-gas").
    pub fn category_slug(&self) -> String {
        slugify(&self.category)
    }

    /// Accessible label announced for the tile.
    pub fn aria_label(&self) -> String {
        format!("{} ({}), atomic number {}", self.name, self.symbol, self.number)
    }
}

/// Complete description of the rendered table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    /// Highest period in the full dataset, capped at [`MAX_GRID_ROWS`]
    pub max_period: u32,
    /// Width of the background grid
    pub columns: u32,
    /// Rows needed to show every tile, overflow block included
    pub total_rows: u32,
    pub background: Vec<BackgroundCell>,
    /// Admitted elements, in dataset order
    pub tiles: Vec<Tile>,
}

impl TableView {
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tile(&self, number: u32) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.number == number)
    }
}

/// Build the table for the current filters.
///
/// The background grid and every tile position depend only on `elements`;
/// `filters` decides which tiles are emitted.
pub fn render_table(elements: &[ElementRecord], filters: &FilterState) -> TableView {
    let columns = u32::from(GROUP_COLUMNS);
    let layout = layout::Layout::compute(elements);

    let mut background = Vec::with_capacity(layout.max_period.saturating_mul(columns) as usize);
    for row in 1..=layout.max_period {
        for column in 1..=columns {
            background.push(BackgroundCell { row, column });
        }
    }

    let tiles: Vec<Tile> = elements
        .iter()
        .zip(layout.placements.iter())
        .filter(|(element, _)| admits(element, filters))
        .map(|(element, placement)| Tile {
            number: element.number,
            symbol: element.symbol.clone(),
            name: element.name.clone(),
            category: element.category.clone(),
            placement: *placement,
        })
        .collect();

    tracing::debug!(
        elements = elements.len(),
        tiles = tiles.len(),
        max_period = layout.max_period,
        "Rendered periodic table"
    );

    TableView {
        max_period: layout.max_period,
        columns,
        total_rows: layout.total_rows,
        background,
        tiles,
    }
}

fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
