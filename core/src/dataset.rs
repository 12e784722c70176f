//! Element dataset parsing
//!
//! The dataset is a JSON array of element records, kept in file order. Records
//! are not validated beyond what deserialization enforces.

use periodic_types::ElementRecord;

use crate::error::LoadError;

/// Parse the body of the dataset resource.
pub fn parse_elements(body: &str) -> Result<Vec<ElementRecord>, LoadError> {
    let elements: Vec<ElementRecord> = serde_json::from_str(body)?;
    tracing::info!(count = elements.len(), "Loaded element dataset");
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let body = r#"[
            {"number": 2, "symbol": "He", "name": "Helium", "group": 18, "period": 1,
             "category": "Noble gas", "state": "Gas", "atomic_mass": 4.0026, "electrons": 2},
            {"number": 1, "symbol": "H", "name": "Hydrogen", "group": 1, "period": 1,
             "category": "Reactive nonmetal", "state": "Gas", "atomic_mass": 1.008, "electrons": 1}
        ]"#;
        let elements = parse_elements(body).unwrap();
        let symbols: Vec<_> = elements.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, ["He", "H"]);
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_elements("[]").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_elements("<html>not found</html>").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let body = r#"[{"number": 1, "symbol": "H", "name": "Hydrogen"}]"#;
        assert!(matches!(parse_elements(body), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let body = include_str!("../../app/public/elements.json");
        let elements = parse_elements(body).unwrap();
        assert_eq!(elements.len(), 118);
        for (i, el) in elements.iter().enumerate() {
            assert_eq!(el.number as usize, i + 1);
            assert_eq!(el.electrons, el.number);
        }
    }
}
