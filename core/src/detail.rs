//! Element detail panel
//!
//! Describes everything the modal shows for one element: the heading, a
//! radial electron diagram, and the attribute list. Each view is built fresh
//! from a single record, so nothing carries over between elements.

use std::f64::consts::TAU;

use periodic_types::formatting::{format_atomic_mass, format_group};
use periodic_types::{DiagramGeometry, ElementRecord};

/// One electron marker on the diagram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Angle from the positive x axis, in radians
    pub angle: f64,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Radial electron diagram on a square canvas
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronDiagram {
    pub view_box: f64,
    pub center: f64,
    pub shell_radius: f64,
    pub nucleus_radius: f64,
    pub markers: Vec<Marker>,
}

impl ElectronDiagram {
    /// Place `count` markers evenly around the center.
    ///
    /// Marker `i` of `n` sits at angle `2π·i/n` on the orbit radius.
    pub fn new(count: u32, geometry: &DiagramGeometry) -> Self {
        let center = geometry.center();
        let markers = (0..count)
            .map(|i| {
                let angle = f64::from(i) / f64::from(count) * TAU;
                Marker {
                    angle,
                    x: center + geometry.orbit_radius * angle.cos(),
                    y: center + geometry.orbit_radius * angle.sin(),
                    radius: geometry.marker_radius,
                }
            })
            .collect();

        Self {
            view_box: geometry.view_box,
            center,
            shell_radius: geometry.shell_radius,
            nucleus_radius: geometry.nucleus_radius,
            markers,
        }
    }

    /// SVG `viewBox` attribute value
    pub fn view_box_attr(&self) -> String {
        format!("0 0 {} {}", self.view_box, self.view_box)
    }
}

/// Label/value pair of the attribute list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the detail modal renders for one element
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub number: u32,
    pub heading: String,
    pub diagram: ElectronDiagram,
    pub attributes: Vec<AttributeRow>,
}

impl DetailView {
    pub fn for_element(element: &ElementRecord, geometry: &DiagramGeometry) -> Self {
        let row = |label: &'static str, value: String| AttributeRow { label, value };

        let attributes = vec![
            row("Atomic Number", element.number.to_string()),
            row("Symbol", element.symbol.clone()),
            row("Name", element.name.clone()),
            row("Group", format_group(element.group)),
            row("Period", element.period.to_string()),
            row("Category", element.category.clone()),
            row("State", element.state.clone()),
            row("Atomic Mass", format_atomic_mass(element.atomic_mass)),
            row("Electrons", element.electrons.to_string()),
        ];

        Self {
            number: element.number,
            heading: format!("{} ({})", element.name, element.symbol),
            diagram: ElectronDiagram::new(element.electrons, geometry),
            attributes,
        }
    }

    pub fn attribute(&self, label: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}
