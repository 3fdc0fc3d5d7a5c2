//! Conversion between compatible units
//!
//! Ordinary units convert through their base scalar. Temperatures and degrees have their
//! own formulas, see [`temperature`].

pub mod converter;
pub mod temperature;

use crate::error::{QtyError, Result};
use crate::math::{div_safe, mul_safe};
use crate::parser;
use crate::registry::{BaseUnits, UNITY};
use crate::types::{Operand, Quantity};
use crate::{token_key, Engine};
use temperature::TempScale;

impl Engine {
    /// Convert `q` into the units of `target`, e.g. `"ft/s"`.
    ///
    /// A scalar in `target` is ignored. Reciprocal units convert through the inverse, so ohms
    /// convert to siemens.
    pub fn to(&self, q: &Quantity, target: &str) -> Result<Quantity> {
        let target = self.target(target)?;
        self.to_units_of(q, &target)
    }

    /// Convert `q` into the units of `like`, ignoring `like`'s scalar
    pub(crate) fn to_units_of(&self, q: &Quantity, like: &Quantity) -> Result<Quantity> {
        if like.units == q.units {
            return Ok(q.clone());
        }
        let target = if like.scalar == 1.0 {
            like.clone()
        } else {
            self.build(1.0, like.numerator.clone(), like.denominator.clone())?
        };
        if !q.is_compatible(&target) {
            if q.is_inverse(&target) {
                let inverse = self.inverse(q)?;
                return self.to_units_of(&inverse, &target);
            }
            return Err(QtyError::incompatible(&q.units, &target.units));
        }
        self.convert_to(q, &target)
    }

    /// Convert into SI base units
    pub fn to_base(&self, q: &Quantity) -> Result<Quantity> {
        if q.is_base {
            return Ok(q.clone());
        }
        if q.is_temperature() {
            return self.build(
                q.base_scalar,
                vec![TempScale::Kelvin.temperature_token().to_string()],
                vec![UNITY.to_string()],
            );
        }
        let base = self.base_units(&q.numerator, &q.denominator)?;
        self.build(q.base_scalar, base.numerator, base.denominator)
    }

    /// Round `q` to the nearest multiple of `precision`.
    ///
    /// A bare number is taken in `q`'s own units; quantities are converted into them first.
    pub fn to_prec(&self, q: &Quantity, precision: impl Into<Operand>) -> Result<Quantity> {
        let precision = match precision.into() {
            Operand::Scalar(scalar) => {
                self.build(scalar, q.numerator.clone(), q.denominator.clone())?
            }
            other => self.operand(other)?,
        };
        let precision = if !q.is_unitless() {
            self.to_units_of(&precision, q)?
        } else if !precision.is_unitless() {
            return Err(QtyError::incompatible(&q.units, &precision.units));
        } else {
            precision
        };

        if precision.scalar == 0.0 {
            return Err(QtyError::DivideByZero);
        }
        let steps = (q.scalar / precision.scalar).round();
        let scalar = mul_safe(&[steps, precision.scalar]);
        self.build(scalar, q.numerator.clone(), q.denominator.clone())
    }

    /// Normalized target quantity (scalar 1) for a unit string, memoized by that string.
    ///
    /// A blank string is the unitless target, so `to(q, q.units())` works for unitless `q`.
    pub(crate) fn target(&self, units: &str) -> Result<Quantity> {
        self.cache.target(units, || {
            let parsed = if units.trim().is_empty() {
                parser::parse_units(units)?
            } else {
                parser::parse_quantity(units)?
            };
            self.from_parsed(1.0, &parsed)
        })
    }

    /// Convert between compatible quantities
    pub(crate) fn convert_to(&self, q: &Quantity, target: &Quantity) -> Result<Quantity> {
        if target.units == q.units {
            return Ok(q.clone());
        }
        if let Some(scale) = target.temperature_scale() {
            let scalar = scale.from_kelvin(q.base_scalar);
            return self.build(scalar, target.numerator.clone(), target.denominator.clone());
        }
        if let Some(scale) = target.degree_scale() {
            let kelvin = match q.temperature_scale() {
                Some(source) => source.degrees_to_kelvin(q.scalar),
                None => q.base_scalar,
            };
            let scalar = scale.kelvin_to_degrees(kelvin);
            return self.build(scalar, target.numerator.clone(), target.denominator.clone());
        }
        let scalar = div_safe(q.base_scalar, target.base_scalar)?;
        self.build(scalar, target.numerator.clone(), target.denominator.clone())
    }

    /// Reduce unit tokens to base units, memoized by token list
    pub(crate) fn base_units(&self, numerator: &[String], denominator: &[String]) -> Result<BaseUnits> {
        let key = token_key(numerator, denominator);
        self.cache.base_units(&key, || {
            let mut base = BaseUnits {
                scale: 1.0,
                numerator: Vec::new(),
                denominator: Vec::new(),
            };
            for token in numerator {
                if let Some(prefix) = self.registry.prefix_scalar(token) {
                    base.scale = mul_safe(&[base.scale, prefix]);
                    continue;
                }
                let unit = self.reduced(token)?;
                base.scale = mul_safe(&[base.scale, unit.scale]);
                base.numerator.extend(unit.numerator.iter().cloned());
                base.denominator.extend(unit.denominator.iter().cloned());
            }
            for token in denominator {
                if let Some(prefix) = self.registry.prefix_scalar(token) {
                    base.scale = div_safe(base.scale, prefix)?;
                    continue;
                }
                let unit = self.reduced(token)?;
                base.scale = div_safe(base.scale, unit.scale)?;
                base.numerator.extend(unit.denominator.iter().cloned());
                base.denominator.extend(unit.numerator.iter().cloned());
            }
            Ok(base)
        })
    }

    fn reduced(&self, token: &str) -> Result<&BaseUnits> {
        self.registry
            .base_of(token)
            .ok_or_else(|| QtyError::UnknownUnit(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_units_fold_prefixes() {
        let engine = Engine::new();
        let km = vec!["<kilo>".to_string(), "<meter>".to_string()];
        let h = vec!["<hour>".to_string()];
        let base = engine.base_units(&km, &h).unwrap();
        assert_eq!(base.numerator, vec!["<meter>"]);
        assert_eq!(base.denominator, vec!["<second>"]);
        assert_eq!(engine.cache().stats().base_units, 1);
    }

    #[test]
    fn test_blank_target_is_unitless() {
        let engine = Engine::new();
        let q = engine.parse("5").unwrap();
        assert_eq!(engine.to(&q, "").unwrap().to_string(), "5");
        assert_eq!(engine.to(&q, q.units()).unwrap().scalar(), 5.0);
        assert_eq!(engine.to(&q, "  ").unwrap().scalar(), 5.0);
        assert!(matches!(
            engine.to(&engine.parse("5 m").unwrap(), ""),
            Err(QtyError::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn test_targets_memoized() {
        let engine = Engine::new();
        let q = engine.parse("1 km").unwrap();
        engine.to(&q, "m").unwrap();
        engine.to(&q, "m").unwrap();
        assert_eq!(engine.cache().stats().targets, 1);
    }
}
