//! The quantity value type

use crate::convert::temperature::TempScale;
use crate::error::{QtyError, Result};
use crate::format::default_format;
use crate::registry::UNITY;
use crate::signature;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A scalar with a compound unit, e.g. `3 A/km`.
///
/// Quantities are created by an [`Engine`](crate::Engine) and never change afterwards.
/// Base scalar, signature and rendered units are computed once at construction.
#[derive(Debug, Clone)]
pub struct Quantity {
    pub(crate) scalar: f64,
    pub(crate) numerator: Vec<String>,
    pub(crate) denominator: Vec<String>,
    pub(crate) base_scalar: f64,
    pub(crate) signature: i64,
    pub(crate) units: String,
    pub(crate) is_base: bool,
}

impl Quantity {
    /// Magnitude in the quantity's own units
    pub fn scalar(&self) -> f64 {
        self.scalar
    }

    /// Magnitude in SI base units
    pub fn base_scalar(&self) -> f64 {
        self.base_scalar
    }

    pub fn signature(&self) -> i64 {
        self.signature
    }

    /// Numerator tokens, e.g. `["<kilo>", "<meter>"]`
    pub fn numerator(&self) -> &[String] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[String] {
        &self.denominator
    }

    /// Rendered unit string, empty when unitless
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Physical kind, e.g. "force", when the signature is a well-known one
    pub fn kind(&self) -> Option<&'static str> {
        signature::kind_of(self.signature)
    }

    pub fn is_base(&self) -> bool {
        self.is_base
    }

    pub fn is_unitless(&self) -> bool {
        is_unity(&self.numerator) && is_unity(&self.denominator)
    }

    /// Same dimensions, so conversion between the two is possible
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.signature == other.signature
    }

    /// Reciprocal dimensions, e.g. ohm and siemens
    pub fn is_inverse(&self, other: &Quantity) -> bool {
        !self.is_temperature() && -self.signature == other.signature
    }

    /// Absolute temperature such as `tempC`
    pub fn is_temperature(&self) -> bool {
        self.temperature_scale().is_some()
    }

    /// Temperature difference such as `degC`
    pub fn is_degrees(&self) -> bool {
        self.degree_scale().is_some()
    }

    pub(crate) fn temperature_scale(&self) -> Option<TempScale> {
        self.single_token().and_then(TempScale::of_temperature)
    }

    pub(crate) fn degree_scale(&self) -> Option<TempScale> {
        self.single_token().and_then(TempScale::of_degree)
    }

    /// Whether any token is a temperature or degree unit
    pub(crate) fn has_temperature_units(&self) -> bool {
        self.numerator
            .iter()
            .chain(&self.denominator)
            .any(|t| TempScale::of_temperature(t).is_some() || TempScale::of_degree(t).is_some())
    }

    fn single_token(&self) -> Option<&str> {
        match self.numerator.as_slice() {
            [token] if is_unity(&self.denominator) => Some(token.as_str()),
            _ => None,
        }
    }

    /// Scalar of a unitless quantity
    pub fn to_float(&self) -> Result<f64> {
        if self.is_unitless() {
            Ok(self.scalar)
        } else {
            Err(QtyError::NotUnitless(self.units.clone()))
        }
    }

    /// Literal equality: same scalar and same rendered units, without conversion
    pub fn same(&self, other: &Quantity) -> bool {
        self.scalar == other.scalar && self.units == other.units
    }

    /// Order by magnitude in base units.
    ///
    /// Fails for incompatible units. A unit and its reciprocal are incompatible here even
    /// though [`to`](crate::Engine::to) can convert between them.
    pub fn compare_to(&self, other: &Quantity) -> Result<Ordering> {
        if !self.is_compatible(other) {
            return Err(QtyError::incompatible(&self.units, &other.units));
        }
        Ok(self
            .base_scalar
            .partial_cmp(&other.base_scalar)
            .unwrap_or_else(|| self.base_scalar.total_cmp(&other.base_scalar)))
    }

    pub fn eq(&self, other: &Quantity) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Equal)
    }

    pub fn lt(&self, other: &Quantity) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Less)
    }

    pub fn lte(&self, other: &Quantity) -> Result<bool> {
        Ok(self.compare_to(other)? != Ordering::Greater)
    }

    pub fn gt(&self, other: &Quantity) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Greater)
    }

    pub fn gte(&self, other: &Quantity) -> Result<bool> {
        Ok(self.compare_to(other)? != Ordering::Less)
    }

    /// Render with a custom formatter receiving the scalar and the unit string
    pub fn format<F>(&self, formatter: F) -> String
    where
        F: FnOnce(f64, &str) -> String,
    {
        formatter(self.scalar, &self.units)
    }
}

fn is_unity(tokens: &[String]) -> bool {
    matches!(tokens, [token] if token == UNITY)
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(default_format))
    }
}

#[derive(Serialize)]
struct QuantityRepr<'a> {
    scalar: f64,
    units: &'a str,
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        QuantityRepr {
            scalar: self.scalar,
            units: &self.units,
        }
        .serialize(serializer)
    }
}
