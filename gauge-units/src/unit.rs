//! Unit representation with conversion factors

use serde::Serialize;

/// A unit within a category, identified by name.
///
/// The factor is defined so that `value_in_unit = value_in_base * factor`
/// for the category's implicit reference unit (the one with factor 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Display name, unique within its category (e.g., "Meter")
    pub name: &'static str,
    /// Scale factor relative to the category's reference unit
    pub factor: f64,
}

impl Unit {
    pub const fn new(name: &'static str, factor: f64) -> Self {
        Unit { name, factor }
    }

    /// Whether this is the category's reference unit
    pub fn is_reference(&self) -> bool {
        self.factor == 1.0
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Requested unit is not a member of the selected category
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// No category registered under this name
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_unit() {
        let m = Unit::new("Meter", 1.0);
        assert!(m.is_reference());

        let km = Unit::new("Kilometer", 0.001);
        assert!(!km.is_reference());
    }

    #[test]
    fn test_error_display() {
        let err = ConversionError::UnknownUnit("Furlong".to_string());
        assert_eq!(err.to_string(), "unknown unit: Furlong");

        let err = ConversionError::UnknownCategory("Speed".to_string());
        assert_eq!(err.to_string(), "unknown category: Speed");
    }
}
