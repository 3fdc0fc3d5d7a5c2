//! Batch conversion of plain numbers between two fixed units

use crate::error::{QtyError, Result};
use crate::types::Quantity;
use crate::Engine;

#[derive(Debug, Clone)]
enum Mode {
    Identity,
    /// Multiply by a factor computed once
    Linear(f64),
    /// Temperatures need the full conversion for every value
    PerValue,
}

/// Converts numbers expressed in one unit into another without re-parsing either unit.
///
/// Unlike [`Engine::to`], linear conversions skip floating-point-safe rounding.
#[derive(Debug, Clone)]
pub struct Converter<'a> {
    engine: &'a Engine,
    source: Quantity,
    target: Quantity,
    mode: Mode,
}

impl<'a> Converter<'a> {
    pub(crate) fn new(engine: &'a Engine, source: &str, target: &str) -> Result<Self> {
        let source = engine.target(source)?;
        let target = engine.target(target)?;
        if !source.is_compatible(&target) {
            return Err(QtyError::incompatible(&source.units, &target.units));
        }

        let mode = if source.units == target.units {
            Mode::Identity
        } else if source.is_temperature() || target.is_temperature() {
            Mode::PerValue
        } else {
            Mode::Linear(source.base_scalar / target.base_scalar)
        };
        tracing::debug!(from = %source.units, to = %target.units, ?mode, "converter ready");

        Ok(Self {
            engine,
            source,
            target,
            mode,
        })
    }

    /// Units values are converted from
    pub fn source_units(&self) -> &str {
        &self.source.units
    }

    /// Units values are converted to
    pub fn target_units(&self) -> &str {
        &self.target.units
    }

    pub fn convert(&self, value: f64) -> Result<f64> {
        match self.mode {
            Mode::Identity => Ok(value),
            Mode::Linear(factor) => Ok(value * factor),
            Mode::PerValue => {
                let q = self.engine.build(
                    value,
                    self.source.numerator.clone(),
                    self.source.denominator.clone(),
                )?;
                Ok(self.engine.convert_to(&q, &self.target)?.scalar)
            }
        }
    }

    /// Convert a whole series, failing on the first value that cannot be converted
    pub fn convert_all(&self, values: &[f64]) -> Result<Vec<f64>> {
        values.iter().map(|&v| self.convert(v)).collect()
    }
}

impl Engine {
    /// Build a [`Converter`] from `source` units to `target` units
    pub fn converter(&self, source: &str, target: &str) -> Result<Converter<'_>> {
        Converter::new(self, source, target)
    }
}
