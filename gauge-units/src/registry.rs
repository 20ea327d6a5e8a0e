//! Category definitions - the fixed conversion table

use std::sync::LazyLock;

use crate::Unit;

/// Global category registry
pub static CATEGORIES: LazyLock<CategoryRegistry> = LazyLock::new(CategoryRegistry::new);

/// A named group of mutually convertible units.
///
/// Units keep their declaration order; that order is the API order for
/// selection widgets, so the storage is a `Vec` rather than a map.
#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub units: Vec<Unit>,
}

impl Category {
    fn new(name: &'static str, units: Vec<Unit>) -> Self {
        Category { name, units }
    }

    /// Look up a unit by name
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name == name)
    }

    /// Unit names in declaration order
    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name).collect()
    }
}

/// Registry of all known categories
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        let mut registry = CategoryRegistry { categories: Vec::new() };
        registry.register_all_categories();
        registry
    }

    /// Get a category by name
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Category names in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.name).collect()
    }

    fn register(&mut self, category: Category) {
        self.categories.push(category);
    }

    fn register_all_categories(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
        self.register_data_rate_units();
    }

    fn register_length_units(&mut self) {
        self.register(Category::new("Length", vec![
            Unit::new("Meter", 1.0),
            Unit::new("Kilometer", 0.001),
            Unit::new("Centimeter", 100.0),
            Unit::new("Millimeter", 1000.0),
            Unit::new("Mile", 0.000621371),
            Unit::new("Yard", 1.09361),
            Unit::new("Foot", 3.28084),
            Unit::new("Inch", 39.3701),
        ]));
    }

    fn register_weight_units(&mut self) {
        self.register(Category::new("Weight", vec![
            Unit::new("Kilogram", 1.0),
            Unit::new("Gram", 1000.0),
            Unit::new("Milligram", 1_000_000.0),
            Unit::new("Pound", 2.20462),
            Unit::new("Ounce", 35.274),
        ]));
    }

    fn register_temperature_units(&mut self) {
        // Multiplicative factors only. Cross-unit temperature conversion is
        // therefore not physically correct (100 C -> 3380 F); kept as-is for
        // parity with the upstream table.
        self.register(Category::new("Temperature", vec![
            Unit::new("Celsius", 1.0),
            Unit::new("Fahrenheit", 33.8),
            Unit::new("Kelvin", 274.15),
        ]));
    }

    fn register_data_rate_units(&mut self) {
        self.register(Category::new("Data Transfer Rate", vec![
            Unit::new("bit per second", 1.0),
            Unit::new("Kilobit per second", 0.001),
            Unit::new("Megabit per second", 0.000_001),
            Unit::new("Gigabit per second", 0.000_000_001),
        ]));
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
