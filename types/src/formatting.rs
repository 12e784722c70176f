//! Centralized value formatting for element details and filter labels.
//!
//! All user-visible numbers go through this module so the table, the filter
//! controls, and the detail panel agree on how values look.

/// Placeholder shown for values an element does not have.
pub const MISSING: &str = "-";

/// Format with a fixed number of decimals, then drop trailing zeros and a
/// dangling decimal point.
fn trim_decimal(n: f64, precision: usize) -> String {
    let s = format!("{:.prec$}", n, prec = precision);
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    // "-0" after trimming a tiny negative value
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format an atomic mass exactly as stored in the dataset, without rounding.
///
/// # Examples
/// ```
/// use periodic_types::formatting::format_atomic_mass;
/// assert_eq!(format_atomic_mass(15.999), "15.999");
/// assert_eq!(format_atomic_mass(4.0026), "4.0026");
/// assert_eq!(format_atomic_mass(98.0), "98");
/// assert_eq!(format_atomic_mass(207.2), "207.2");
/// ```
pub fn format_atomic_mass(mass: f64) -> String {
    mass.to_string()
}

/// Format an SVG coordinate with at most 3 decimals.
///
/// # Examples
/// ```
/// use periodic_types::formatting::format_coordinate;
/// assert_eq!(format_coordinate(65.0), "65");
/// assert_eq!(format_coordinate(90.455844), "90.456");
/// ```
pub fn format_coordinate(value: f64) -> String {
    trim_decimal(value, 3)
}

/// Format an optional group number.
///
/// # Examples
/// ```
/// use periodic_types::formatting::format_group;
/// assert_eq!(format_group(Some(17)), "17");
/// assert_eq!(format_group(None), "-");
/// ```
pub fn format_group(group: Option<u8>) -> String {
    match group {
        Some(g) => g.to_string(),
        None => MISSING.to_string(),
    }
}

/// Label for one entry of the group selector.
///
/// # Examples
/// ```
/// use periodic_types::formatting::group_option_label;
/// assert_eq!(group_option_label(1), "Group 1");
/// ```
pub fn group_option_label(group: u8) -> String {
    format!("Group {}", group)
}

/// Uppercase the first character, leaving the rest untouched.
///
/// Used to label lowercase state keys ("gas" -> "Gas").
///
/// # Examples
/// ```
/// use periodic_types::formatting::capitalize;
/// assert_eq!(capitalize("gas"), "Gas");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
