//! Element detail modal
//!
//! Shows one [`DetailView`]. Closed by the close button, by Escape while the
//! modal has focus, or by clicking the backdrop. The caller keys it by element
//! number, so every opened element gets a fresh mount and takes focus.

use dioxus::prelude::*;
use periodic_core::{DetailView, ElectronDiagram};
use periodic_types::formatting::format_coordinate;

#[component]
pub fn ElementModal(detail: DetailView, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            id: "modal",
            class: "modal-backdrop",
            role: "dialog",
            aria_modal: "true",
            aria_labelledby: "element-heading",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |e: Event<KeyboardData>| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            // Take focus so Escape reaches this handler
            onmounted: move |e: Event<MountedData>| async move {
                if let Err(err) = e.set_focus(true).await {
                    tracing::debug!(error = ?err, "Could not focus modal");
                }
            },
            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    button {
                        id: "close-modal",
                        class: "btn btn-close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { id: "element-details", class: "modal-content",
                    h2 { id: "element-heading", "{detail.heading}" }
                    div { class: "particle-model",
                        ElectronSvg { diagram: detail.diagram.clone() }
                    }
                    dl { class: "details-grid",
                        for row in detail.attributes.iter() {
                            dt { "{row.label}" }
                            dd { "{row.value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ElectronSvg(diagram: ElectronDiagram) -> Element {
    let view_box = diagram.view_box_attr();
    let center = format_coordinate(diagram.center);
    let shell = format_coordinate(diagram.shell_radius);
    let nucleus = format_coordinate(diagram.nucleus_radius);

    rsx! {
        svg { class: "particle-svg", view_box: "{view_box}",
            circle {
                class: "shell",
                cx: "{center}",
                cy: "{center}",
                r: "{shell}",
                fill: "#23262f",
                stroke: "#fbbf24",
                stroke_width: "2",
            }
            circle {
                class: "nucleus",
                cx: "{center}",
                cy: "{center}",
                r: "{nucleus}",
                fill: "#3b82f6",
            }
            for (i, marker) in diagram.markers.iter().enumerate() {
                circle {
                    key: "{i}",
                    class: "electron",
                    cx: format_coordinate(marker.x),
                    cy: format_coordinate(marker.y),
                    r: format_coordinate(marker.radius),
                    fill: "#fbbf24",
                }
            }
        }
    }
}
