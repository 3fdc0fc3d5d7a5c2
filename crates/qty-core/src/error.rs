//! Error types for qty operations

use thiserror::Error;

/// Result alias used throughout qty-core
pub type Result<T> = std::result::Result<T, QtyError>;

/// Any failure raised by the engine.
///
/// Operations never apply partially: an `Err` means no quantity was produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QtyError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("incompatible units: {left} and {right}")]
    IncompatibleUnits { left: String, right: String },

    #[error(transparent)]
    Temperature(#[from] TemperatureError),

    #[error("divide by zero")]
    DivideByZero,

    #[error("unit not recognized: {0}")]
    UnknownUnit(String),

    #[error("kind not recognized: {0}")]
    UnknownKind(String),

    #[error("can't convert {0} to a float unless unitless")]
    NotUnitless(String),

    #[error("invalid unit registry: {0}")]
    Registry(String),
}

impl QtyError {
    pub(crate) fn incompatible(left: &str, right: &str) -> Self {
        QtyError::IncompatibleUnits {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

/// Failures while reading a quantity expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{input}: quantity not recognized")]
    Syntax { input: String, message: String },

    #[error("unit not recognized: {0}")]
    UnknownUnit(String),

    #[error("unit exponent {exponent} is out of range for {unit}")]
    ExponentOutOfRange { unit: String, exponent: i32 },

    #[error("unit exponent is not a number: {0}")]
    InvalidExponent(String),

    #[error("invalid scalar: {0}")]
    InvalidScalar(String),
}

/// Physically meaningless temperature operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemperatureError {
    #[error("cannot add two temperatures")]
    AddTemperatures,

    #[error("cannot subtract a temperature from a differential degree unit")]
    SubtractFromDegree,

    #[error("cannot multiply by temperatures")]
    Multiply,

    #[error("cannot divide with temperatures")]
    Divide,

    #[error("temperatures must stand alone in the numerator")]
    CompoundUnit,

    #[error("temperatures must not be less than absolute zero")]
    BelowAbsoluteZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatible_message() {
        let err = QtyError::incompatible("cm", "A");
        assert_eq!(err.to_string(), "incompatible units: cm and A");
    }

    #[test]
    fn test_nested_errors_are_transparent() {
        let err: QtyError = TemperatureError::BelowAbsoluteZero.into();
        assert_eq!(
            err.to_string(),
            "temperatures must not be less than absolute zero"
        );

        let err: QtyError = ParseError::UnknownUnit("zz".to_string()).into();
        assert_eq!(err.to_string(), "unit not recognized: zz");
    }
}
