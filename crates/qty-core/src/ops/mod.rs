//! Arithmetic on quantities
//!
//! Addition and subtraction need compatible units and keep the left operand's units.
//! Multiplication and division combine unit terms, cancelling what appears on both sides.

pub mod terms;

use crate::convert::temperature::TempScale;
use crate::error::{QtyError, Result, TemperatureError};
use crate::math::{div_safe, mul_safe};
use crate::registry::UNITY;
use crate::types::{Operand, Quantity};
use crate::Engine;
use terms::clean_terms;

impl Engine {
    /// `q + other`. A temperature plus degrees is a temperature; two temperatures can't be added.
    pub fn add(&self, q: &Quantity, other: impl Into<Operand>) -> Result<Quantity> {
        let other = self.operand(other.into())?;
        if !q.is_compatible(&other) {
            return Err(QtyError::incompatible(&q.units, &other.units));
        }

        match (q.temperature_scale(), other.temperature_scale()) {
            (Some(_), Some(_)) => Err(TemperatureError::AddTemperatures.into()),
            (Some(scale), None) => self.shift_temperature(q, scale, &other, 1.0),
            (None, Some(scale)) => self.shift_temperature(&other, scale, q, 1.0),
            (None, None) => {
                let other = self.to_units_of(&other, q)?;
                self.build(q.scalar + other.scalar, q.numerator.clone(), q.denominator.clone())
            }
        }
    }

    /// `q - other`. The difference of two temperatures is in degrees.
    pub fn sub(&self, q: &Quantity, other: impl Into<Operand>) -> Result<Quantity> {
        let other = self.operand(other.into())?;
        if !q.is_compatible(&other) {
            return Err(QtyError::incompatible(&q.units, &other.units));
        }

        match (q.temperature_scale(), other.is_temperature()) {
            (Some(scale), true) => {
                let other = self.to_units_of(&other, q)?;
                self.build(
                    q.scalar - other.scalar,
                    vec![scale.degree_token().to_string()],
                    vec![UNITY.to_string()],
                )
            }
            (Some(scale), false) => self.shift_temperature(q, scale, &other, -1.0),
            (None, true) => Err(TemperatureError::SubtractFromDegree.into()),
            (None, false) => {
                let other = self.to_units_of(&other, q)?;
                self.build(q.scalar - other.scalar, q.numerator.clone(), q.denominator.clone())
            }
        }
    }

    /// Move a temperature by a degree difference, expressed on the temperature's own scale
    fn shift_temperature(
        &self,
        temperature: &Quantity,
        scale: TempScale,
        degrees: &Quantity,
        sign: f64,
    ) -> Result<Quantity> {
        let unit = self.build(
            1.0,
            vec![scale.degree_token().to_string()],
            vec![UNITY.to_string()],
        )?;
        let degrees = self.to_units_of(degrees, &unit)?;
        self.build(
            temperature.scalar + sign * degrees.scalar,
            temperature.numerator.clone(),
            temperature.denominator.clone(),
        )
    }

    /// `q * other`. A bare number only scales.
    pub fn mul(&self, q: &Quantity, other: impl Into<Operand>) -> Result<Quantity> {
        let other = match other.into() {
            Operand::Scalar(factor) => {
                let scalar = mul_safe(&[q.scalar, factor]);
                return self.build(scalar, q.numerator.clone(), q.denominator.clone());
            }
            other => self.operand(other)?,
        };
        if (q.is_temperature() || other.is_temperature())
            && !(q.is_unitless() || other.is_unitless())
        {
            return Err(TemperatureError::Multiply.into());
        }

        let other = self.align(q, other)?;
        let terms = clean_terms(
            &self.registry,
            &q.numerator,
            &q.denominator,
            &other.numerator,
            &other.denominator,
        )?;
        let scalar = mul_safe(&[q.scalar, other.scalar, terms.scale]);
        self.build(scalar, terms.numerator, terms.denominator)
    }

    /// `q / other`. Dividing by zero or by a temperature fails.
    pub fn div(&self, q: &Quantity, other: impl Into<Operand>) -> Result<Quantity> {
        let other = match other.into() {
            Operand::Scalar(divisor) => {
                let scalar = div_safe(q.scalar, divisor)?;
                return self.build(scalar, q.numerator.clone(), q.denominator.clone());
            }
            other => self.operand(other)?,
        };
        if other.scalar == 0.0 {
            return Err(QtyError::DivideByZero);
        }
        if other.is_temperature() || (q.is_temperature() && !other.is_unitless()) {
            return Err(TemperatureError::Divide.into());
        }

        let other = self.align(q, other)?;
        let terms = clean_terms(
            &self.registry,
            &q.numerator,
            &q.denominator,
            &other.denominator,
            &other.numerator,
        )?;
        let scalar = div_safe(mul_safe(&[q.scalar, terms.scale]), other.scalar)?;
        self.build(scalar, terms.numerator, terms.denominator)
    }

    /// Reciprocal: `1 / q`
    pub fn inverse(&self, q: &Quantity) -> Result<Quantity> {
        if q.is_temperature() {
            return Err(TemperatureError::Divide.into());
        }
        if q.scalar == 0.0 {
            return Err(QtyError::DivideByZero);
        }
        let scalar = div_safe(1.0, q.scalar)?;
        self.build(scalar, q.denominator.clone(), q.numerator.clone())
    }

    /// Express `other` in `q`'s units when they are compatible so identical units cancel.
    ///
    /// Operands holding temperature or degree units keep their own units, so different degree
    /// scales never cancel each other.
    fn align(&self, q: &Quantity, other: Quantity) -> Result<Quantity> {
        let keeps_units = q.has_temperature_units() || other.has_temperature_units();
        if q.is_compatible(&other) && !keeps_units {
            self.to_units_of(&other, q)
        } else {
            Ok(other)
        }
    }
}
