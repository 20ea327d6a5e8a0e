//! Gauge Units - Conversion Table and Engine
//!
//! A fixed registry of unit categories and a pure linear-scaling conversion
//! function. The registry is built once at first use and never mutated, so it
//! is freely shared across threads without synchronization.
//!
//! Categories:
//! - Length (Meter, Kilometer, Mile, Foot, etc.)
//! - Weight (Kilogram, Gram, Pound, Ounce, etc.)
//! - Temperature (Celsius, Fahrenheit, Kelvin)
//! - Data Transfer Rate (bit per second through Gigabit per second)
//!
//! Temperature note: the table models all units with multiplicative factors,
//! including Celsius/Fahrenheit/Kelvin. Cross-unit temperature results do not
//! match physical affine conversion; this mirrors the upstream table exactly.

mod convert;
mod display;
mod registry;
mod unit;

pub use convert::{categories, convert, units};
pub use display::{ChartData, Conversion};
pub use registry::{Category, CategoryRegistry, CATEGORIES};
pub use unit::{ConversionError, Unit};
