//! Right-hand operands for arithmetic

use super::Quantity;

/// Anything accepted on the right of `add`, `sub`, `mul`, `div` and `to_prec`
#[derive(Debug, Clone)]
pub enum Operand {
    /// Bare number
    Scalar(f64),
    /// Quantity expression to parse, e.g. `"3 m"`
    Text(String),
    Quantity(Quantity),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<Quantity> for Operand {
    fn from(value: Quantity) -> Self {
        Operand::Quantity(value)
    }
}

impl From<&Quantity> for Operand {
    fn from(value: &Quantity) -> Self {
        Operand::Quantity(value.clone())
    }
}
