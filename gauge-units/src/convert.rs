//! The conversion engine and its public accessors

use crate::registry::CATEGORIES;
use crate::unit::ConversionError;
use crate::Category;

/// Category names in declaration order.
pub fn categories() -> Vec<&'static str> {
    CATEGORIES.names()
}

/// Unit names of a category in declaration order.
pub fn units(category: &str) -> Result<Vec<&'static str>, ConversionError> {
    lookup_category(category).map(|c| c.unit_names())
}

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Pure linear scaling: `value * (factor[to] / factor[from])` in f64
/// arithmetic. No side effects; identical inputs give identical results.
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Result<f64, ConversionError> {
    let category = lookup_category(category)?;

    let from = category
        .unit(from_unit)
        .ok_or_else(|| ConversionError::UnknownUnit(from_unit.to_string()))?;
    let to = category
        .unit(to_unit)
        .ok_or_else(|| ConversionError::UnknownUnit(to_unit.to_string()))?;

    Ok(value * (to.factor / from.factor))
}

fn lookup_category(name: &str) -> Result<&'static Category, ConversionError> {
    CATEGORIES
        .get(name)
        .ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilometer_to_meter() {
        let result = convert(5.0, "Kilometer", "Meter", "Length").unwrap();
        assert_eq!(result, 5000.0);
    }

    #[test]
    fn test_kilogram_to_pound() {
        let result = convert(10.0, "Kilogram", "Pound", "Weight").unwrap();
        assert!((result - 22.0462).abs() < 1e-9);
    }

    #[test]
    fn test_identity_conversion() {
        for category in categories() {
            for unit in units(category).unwrap() {
                assert_eq!(convert(2.5, unit, unit, category).unwrap(), 2.5);
            }
        }
    }

    #[test]
    fn test_zero_input() {
        assert_eq!(convert(0.0, "Mile", "Inch", "Length").unwrap(), 0.0);
    }

    #[test]
    fn test_temperature_is_linear_scaling() {
        // Not the physical value (212); the table is multiplicative only.
        let result = convert(100.0, "Celsius", "Fahrenheit", "Temperature").unwrap();
        assert!((result - 3380.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_unit_fails() {
        let err = convert(1.0, "Furlong", "Meter", "Length").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("Furlong".to_string()));

        let err = convert(1.0, "Meter", "Furlong", "Length").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("Furlong".to_string()));
    }

    #[test]
    fn test_unknown_category_fails() {
        let err = convert(1.0, "Meter", "Meter", "Speed").unwrap_err();
        assert_eq!(err, ConversionError::UnknownCategory("Speed".to_string()));

        assert!(units("Speed").is_err());
    }
}
