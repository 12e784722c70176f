//! Viewer configuration

/// Number of regular periodic-table columns.
pub const GROUP_COLUMNS: u8 = 18;

/// Top-level configuration for the explorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Path of the dataset, relative to the page
    pub dataset_path: String,
    pub diagram: DiagramGeometry,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dataset_path: "elements.json".to_string(),
            diagram: DiagramGeometry::default(),
        }
    }
}

/// Fixed geometry of the electron diagram, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramGeometry {
    /// Width and height of the square view box
    pub view_box: f64,
    /// Radius of the outlined shell circle
    pub shell_radius: f64,
    pub nucleus_radius: f64,
    /// Distance from the center at which electron markers sit
    pub orbit_radius: f64,
    pub marker_radius: f64,
}

impl DiagramGeometry {
    /// Center coordinate on both axes.
    pub fn center(&self) -> f64 {
        self.view_box / 2.0
    }
}

impl Default for DiagramGeometry {
    fn default() -> Self {
        Self {
            view_box: 130.0,
            shell_radius: 40.0,
            nucleus_radius: 5.0,
            orbit_radius: 36.0,
            marker_radius: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.dataset_path, "elements.json");
        assert_eq!(config.diagram.center(), 65.0);
        assert_eq!(config.diagram.orbit_radius, 36.0);
    }
}
