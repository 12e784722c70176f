//! Periodic table grid
//!
//! Renders a [`TableView`]: background cells first, then one focusable tile
//! per admitted element. Positions come straight from the view as CSS grid
//! coordinates.

use dioxus::prelude::*;
use periodic_core::{TableView, Tile};

#[component]
pub fn PeriodicTable(view: TableView, on_select: EventHandler<u32>) -> Element {
    let grid_style = format!(
        "grid-template-columns: repeat({}, 1fr); grid-template-rows: repeat({}, auto);",
        view.columns, view.total_rows
    );

    rsx! {
        div { id: "periodic-table", class: "periodic-table", role: "grid", style: "{grid_style}",
            for cell in view.background.iter() {
                div {
                    key: "cell-{cell.row}-{cell.column}",
                    class: "table-cell",
                    role: "presentation",
                    style: "grid-row: {cell.row}; grid-column: {cell.column};",
                }
            }
            for tile in view.tiles.iter() {
                ElementTile { key: "el-{tile.number}", tile: tile.clone(), on_select }
            }
        }
    }
}

/// One element; activated by click, Enter or Space
#[component]
fn ElementTile(tile: Tile, on_select: EventHandler<u32>) -> Element {
    let number = tile.number;
    let label = tile.aria_label();
    let class = if tile.placement.overflow {
        format!("element element-{} element-overflow", tile.category_slug())
    } else {
        format!("element element-{}", tile.category_slug())
    };

    rsx! {
        button {
            class: "{class}",
            role: "gridcell",
            tabindex: "0",
            aria_label: "{label}",
            style: "grid-row: {tile.placement.row}; grid-column: {tile.placement.column};",
            onclick: move |_| on_select.call(number),
            onkeydown: move |e: Event<KeyboardData>| match e.key() {
                Key::Enter => {
                    e.prevent_default();
                    on_select.call(number);
                }
                Key::Character(c) if c == " " => {
                    e.prevent_default();
                    on_select.call(number);
                }
                _ => {}
            },
            span { class: "atomic-number", "{tile.number}" }
            span { class: "symbol", "{tile.symbol}" }
            span { class: "name", "{tile.name}" }
        }
    }
}
