//! Display-ready conversion results for the presentation layer

use std::fmt;

use serde::{Deserialize, Serialize};

/// A completed conversion, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

impl Conversion {
    pub fn new(value: f64, from_unit: &str, to_unit: &str, result: f64) -> Self {
        Conversion {
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result,
        }
    }

    /// Result rounded to the two-decimal display convention
    pub fn formatted_result(&self) -> String {
        format!("{:.2}", self.result)
    }

    /// Bar-chart payload: one bar per side of the conversion
    pub fn chart(&self) -> ChartData {
        ChartData {
            labels: vec![self.from_unit.clone(), self.to_unit.clone()],
            values: vec![self.value, self.result],
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is equal to {:.2} {}",
            self.value, self.from_unit, self.result, self.to_unit
        )
    }
}

/// Two-bar comparison chart of input value and converted value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message() {
        let c = Conversion::new(5.0, "Kilometer", "Meter", 5000.0);
        assert_eq!(c.to_string(), "5 Kilometer is equal to 5000.00 Meter");
    }

    #[test]
    fn test_two_decimal_formatting() {
        let c = Conversion::new(10.0, "Kilogram", "Pound", 22.0462);
        assert_eq!(c.formatted_result(), "22.05");
    }

    #[test]
    fn test_chart_bars() {
        let c = Conversion::new(1_000_000.0, "bit per second", "Megabit per second", 1.0);
        let chart = c.chart();
        assert_eq!(chart.labels, vec!["bit per second", "Megabit per second"]);
        assert_eq!(chart.values, vec![1_000_000.0, 1.0]);
    }

    #[test]
    fn test_serializes_for_the_wire() {
        let c = Conversion::new(5.0, "Kilometer", "Meter", 5000.0);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["result"], 5000.0);
        assert_eq!(json["from_unit"], "Kilometer");
    }
}
