/// Active constraints of the three filter controls.
///
/// Each field is written independently by its control. An empty name or state
/// behaves the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring of name or symbol
    pub name: Option<String>,
    /// Exact group
    pub group: Option<u8>,
    /// Lowercase matter state, compared exactly
    pub state: Option<String>,
}

impl FilterState {
    /// True when no control constrains the table.
    pub fn is_empty(&self) -> bool {
        self.name_query().is_none() && self.group.is_none() && self.state_query().is_none()
    }

    /// Name filter, skipping the empty string
    pub fn name_query(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// State filter, skipping the empty string
    pub fn state_query(&self) -> Option<&str> {
        self.state.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(FilterState::default().is_empty());
    }

    #[test]
    fn test_empty_strings_count_as_unset() {
        let filters = FilterState {
            name: Some(String::new()),
            group: None,
            state: Some(String::new()),
        };
        assert!(filters.is_empty());
        assert_eq!(filters.name_query(), None);
        assert_eq!(filters.state_query(), None);
    }

    #[test]
    fn test_any_field_makes_it_non_empty() {
        let by_group = FilterState {
            group: Some(17),
            ..Default::default()
        };
        assert!(!by_group.is_empty());

        let by_name = FilterState {
            name: Some("ox".into()),
            ..Default::default()
        };
        assert_eq!(by_name.name_query(), Some("ox"));
        assert!(!by_name.is_empty());
    }
}
