//! Length and temperature conversions selected by a short keyword.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

const METERS_TO_FEET: f64 = 3.28084;
const FEET_TO_METERS: f64 = 0.3048;

/// A supported unit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `m2ft`
    MetersToFeet,
    /// `ft2m`
    FeetToMeters,
    /// `c2f`
    CelsiusToFahrenheit,
    /// `f2c`
    FahrenheitToCelsius,
}

impl Conversion {
    /// Every conversion, in keyword order.
    pub const ALL: [Self; 4] = [
        Self::MetersToFeet,
        Self::FeetToMeters,
        Self::CelsiusToFahrenheit,
        Self::FahrenheitToCelsius,
    ];

    /// The keyword that selects this conversion.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::MetersToFeet => "m2ft",
            Self::FeetToMeters => "ft2m",
            Self::CelsiusToFahrenheit => "c2f",
            Self::FahrenheitToCelsius => "f2c",
        }
    }

    /// Apply the conversion.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::MetersToFeet => value * METERS_TO_FEET,
            Self::FeetToMeters => value * FEET_TO_METERS,
            Self::CelsiusToFahrenheit => value * 9.0 / 5.0 + 32.0,
            Self::FahrenheitToCelsius => (value - 32.0) * 5.0 / 9.0,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Conversion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.keyword() == s)
            .ok_or_else(|| Error::unsupported_conversion(s))
    }
}

/// Convert `value` using the conversion named by `kind`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedConversion`] if `kind` is not one of
/// `m2ft`, `ft2m`, `c2f` or `f2c`.
pub fn convert(kind: &str, value: f64) -> Result<f64> {
    let conversion: Conversion = kind.parse()?;
    let result = conversion.apply(value);
    debug!(%conversion, value, result, "converted value");
    Ok(result)
}
