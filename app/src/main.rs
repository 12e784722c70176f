//! Periodic table explorer, Dioxus web frontend
//!
//! The core crate builds the table and detail views; this crate fetches the
//! dataset and maps those views onto DOM nodes.

mod api;
mod app;
mod components;

use tracing::Level;

fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("failed to initialize logger: {err}");
    }
    dioxus::launch(app::App);
}
