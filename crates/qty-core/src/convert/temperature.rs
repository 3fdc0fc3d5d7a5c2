//! Temperature scales
//!
//! Absolute temperatures (`tempC`, ...) convert with offsets and may not drop below absolute
//! zero. Degrees (`degC`, ...) are temperature differences and only scale.

/// One of the four supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempScale {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

const ZERO_CELSIUS: f64 = 273.15;
const ZERO_FAHRENHEIT: f64 = 459.67;

impl TempScale {
    /// Scale of an absolute temperature token such as `<temp-C>`
    pub fn of_temperature(token: &str) -> Option<Self> {
        match token {
            "<temp-K>" => Some(Self::Kelvin),
            "<temp-C>" => Some(Self::Celsius),
            "<temp-F>" => Some(Self::Fahrenheit),
            "<temp-R>" => Some(Self::Rankine),
            _ => None,
        }
    }

    /// Scale of a degree token such as `<celsius>`
    pub fn of_degree(token: &str) -> Option<Self> {
        match token {
            "<kelvin>" => Some(Self::Kelvin),
            "<celsius>" => Some(Self::Celsius),
            "<fahrenheit>" => Some(Self::Fahrenheit),
            "<rankine>" => Some(Self::Rankine),
            _ => None,
        }
    }

    pub fn temperature_token(self) -> &'static str {
        match self {
            Self::Kelvin => "<temp-K>",
            Self::Celsius => "<temp-C>",
            Self::Fahrenheit => "<temp-F>",
            Self::Rankine => "<temp-R>",
        }
    }

    pub fn degree_token(self) -> &'static str {
        match self {
            Self::Kelvin => "<kelvin>",
            Self::Celsius => "<celsius>",
            Self::Fahrenheit => "<fahrenheit>",
            Self::Rankine => "<rankine>",
        }
    }

    /// Absolute temperature on this scale to kelvin
    pub fn to_kelvin(self, value: f64) -> f64 {
        match self {
            Self::Kelvin => value,
            Self::Celsius => value + ZERO_CELSIUS,
            Self::Fahrenheit => (value + ZERO_FAHRENHEIT) * 5.0 / 9.0,
            Self::Rankine => value * 5.0 / 9.0,
        }
    }

    /// Kelvin to an absolute temperature on this scale
    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            Self::Kelvin => kelvin,
            Self::Celsius => kelvin - ZERO_CELSIUS,
            Self::Fahrenheit => kelvin * 9.0 / 5.0 - ZERO_FAHRENHEIT,
            Self::Rankine => kelvin * 9.0 / 5.0,
        }
    }

    /// Size of a temperature difference on this scale, in kelvin
    pub fn degrees_to_kelvin(self, value: f64) -> f64 {
        match self {
            Self::Kelvin | Self::Celsius => value,
            Self::Fahrenheit | Self::Rankine => value * 5.0 / 9.0,
        }
    }

    /// Kelvin difference expressed on this scale
    pub fn kelvin_to_degrees(self, kelvin: f64) -> f64 {
        match self {
            Self::Kelvin | Self::Celsius => kelvin,
            Self::Fahrenheit | Self::Rankine => kelvin * 9.0 / 5.0,
        }
    }
}
