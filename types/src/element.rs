use serde::{Deserialize, Deserializer};

/// One chemical element as stored in the dataset.
///
/// Records are immutable once loaded. Field names match the JSON keys of
/// `elements.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementRecord {
    /// Atomic number, unique across the dataset
    pub number: u32,
    pub symbol: String,
    pub name: String,
    /// Periodic-table column (1-18). `None` for f-block elements and any
    /// record whose group is missing, `null` or `0`.
    #[serde(default, deserialize_with = "deserialize_group")]
    pub group: Option<u8>,
    /// Periodic-table row
    pub period: u32,
    pub category: String,
    /// Matter state at room temperature ("Solid", "Liquid", "Gas", ...)
    pub state: String,
    pub atomic_mass: f64,
    /// Number of electrons drawn in the detail diagram
    pub electrons: u32,
}

impl ElementRecord {
    /// Whether this element sits in one of the 18 regular columns.
    pub fn has_group(&self) -> bool {
        self.group.is_some()
    }

    /// State normalized for filtering.
    pub fn state_key(&self) -> String {
        self.state.to_lowercase()
    }
}

/// Treat `0` like a missing group, same as an absent key or `null`.
fn deserialize_group<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<u8>::deserialize(deserializer)?;
    Ok(raw.filter(|group| *group != 0))
}
