//! Temperature conversion to Kelvin.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Offset between Celsius and Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Input temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

impl Scale {
    /// Convert a reading on this scale to Kelvin.
    pub fn to_kelvin(self, value: f64) -> f64 {
        match self {
            Scale::Celsius => value + KELVIN_OFFSET,
            Scale::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        }
    }
}

impl FromStr for Scale {
    type Err = Error;

    /// Parse a unit letter, case-insensitively. Anything outside `c`/`f`
    /// is an [`Error::InvalidUnit`].
    fn from_str(unit: &str) -> Result<Self> {
        if unit.eq_ignore_ascii_case("c") {
            Ok(Scale::Celsius)
        } else if unit.eq_ignore_ascii_case("f") {
            Ok(Scale::Fahrenheit)
        } else {
            Err(Error::InvalidUnit(unit.to_string()))
        }
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Scale::Celsius => write!(f, "C"),
            Scale::Fahrenheit => write!(f, "F"),
        }
    }
}

/// Convert a temperature to a Kelvin display string, e.g. `353.15 K`.
///
/// The unit defaults to Celsius when `None`. The result always carries
/// exactly two decimal places.
pub fn temp_to_kelvin(value: f64, unit: Option<&str>) -> Result<String> {
    let scale = match unit {
        Some(unit) => unit.parse::<Scale>()?,
        None => Scale::Celsius,
    };
    Ok(format!("{:.2} K", scale.to_kelvin(value)))
}
