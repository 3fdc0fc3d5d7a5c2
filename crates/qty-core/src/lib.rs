//! qty-core: Unit algebra engine for qty
//!
//! This crate parses physical quantities such as `"3 A/km"`, checks dimensional
//! compatibility, converts between units and does arithmetic that keeps track of units.
//! It has no I/O and can be embedded anywhere.
//!
//! # Example
//!
//! ```
//! use qty_core::Engine;
//!
//! let engine = Engine::new();
//!
//! // Compatible units convert automatically
//! let length = engine.parse("2.5 m").unwrap();
//! let sum = engine.add(&length, "3 cm").unwrap();
//! assert_eq!(sum.to_string(), "2.53 m");
//!
//! // Units multiply and cancel
//! let area = engine.mul(&length, "3 m").unwrap();
//! assert_eq!(area.to_string(), "7.5 m^2");
//!
//! // Reciprocal units convert through the inverse
//! let resistance = engine.parse("10 ohm").unwrap();
//! let conductance = engine.to(&resistance, "siemens").unwrap();
//! assert_eq!(conductance.scalar(), 0.1);
//! assert_eq!(conductance.kind(), Some("conductance"));
//! ```

pub mod cache;
pub mod convert;
pub mod error;
pub mod format;
pub mod math;
pub mod ops;
pub mod parser;
pub mod registry;
pub mod signature;
pub mod types;

pub use cache::{Cache, CacheStats};
pub use convert::converter::Converter;
pub use convert::temperature::TempScale;
pub use error::{ParseError, QtyError, Result, TemperatureError};
pub use math::{div_safe, mul_safe};
pub use registry::{Registry, RegistryConfig};
pub use types::{Operand, Quantity};

use parser::ParsedQuantity;
use registry::UNITY;
use std::sync::Arc;

/// Main engine: owns the unit registry and the memoization caches.
///
/// An engine is cheap to clone (clones share registry and caches) and can be used from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Arc<Registry>,
    cache: Arc<Cache>,
}

impl Engine {
    /// Create an engine with the builtin unit catalog
    pub fn new() -> Self {
        Self::with_registry(Registry::builtin())
    }

    /// Create an engine with a custom unit registry
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
            cache: Arc::new(Cache::new()),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Parse a quantity expression such as `"5.6 kg*m/s^2"`.
    ///
    /// A missing scalar means 1.
    pub fn parse(&self, expr: &str) -> Result<Quantity> {
        let parsed = parser::parse_quantity(expr)?;
        self.from_parsed(parsed.scalar.unwrap_or(1.0), &parsed)
    }

    /// Create a quantity from a scalar and a unit expression; an empty expression is unitless
    pub fn quantity(&self, scalar: f64, units: &str) -> Result<Quantity> {
        let parsed = parser::parse_units(units)?;
        self.from_parsed(scalar, &parsed)
    }

    /// Every known kind name, sorted
    pub fn kinds(&self) -> Vec<&'static str> {
        signature::kinds()
    }

    /// Names of every unit, sorted case-insensitively
    pub fn units(&self) -> Vec<String> {
        self.unit_names(|_| true)
    }

    /// Names of the units of one kind, sorted case-insensitively
    pub fn units_of_kind(&self, kind: &str) -> Result<Vec<String>> {
        if !signature::is_known_kind(kind) {
            return Err(QtyError::UnknownKind(kind.to_string()));
        }
        Ok(self.unit_names(|k| k == kind))
    }

    /// Aliases of a unit or prefix, given by name or by any alias
    pub fn aliases_of(&self, name: &str) -> Result<Vec<String>> {
        self.registry.aliases_of(name).map(<[String]>::to_vec)
    }

    fn unit_names(&self, mut filter: impl FnMut(&str) -> bool) -> Vec<String> {
        let mut names: Vec<String> = self
            .registry
            .units()
            .filter(|unit| unit.name != UNITY && filter(&unit.kind))
            .map(|unit| bare_name(&unit.name).to_string())
            .collect();
        names.sort_by_cached_key(|name| name.to_lowercase());
        names
    }

    pub(crate) fn from_parsed(&self, scalar: f64, parsed: &ParsedQuantity) -> Result<Quantity> {
        let (top, bottom) = parsed.expand();
        let numerator = self.resolve_words(&top)?;
        let denominator = self.resolve_words(&bottom)?;
        self.build(scalar, numerator, denominator)
    }

    fn resolve_words(&self, words: &[&str]) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        for word in words {
            let resolved = self.cache.parsed_units(word, || {
                self.registry
                    .resolve(word)
                    .ok_or_else(|| ParseError::UnknownUnit(word.to_string()).into())
            })?;
            tokens.extend(resolved);
        }
        Ok(tokens)
    }

    /// Resolve a right-hand operand into a quantity; bare numbers are unitless
    pub(crate) fn operand(&self, operand: Operand) -> Result<Quantity> {
        match operand {
            Operand::Scalar(scalar) => {
                self.build(scalar, vec![UNITY.to_string()], vec![UNITY.to_string()])
            }
            Operand::Text(text) => self.parse(&text),
            Operand::Quantity(q) => Ok(q),
        }
    }

    /// Construct a quantity from tokens, computing its rendered units, base scalar and
    /// signature.
    pub(crate) fn build(
        &self,
        scalar: f64,
        numerator: Vec<String>,
        denominator: Vec<String>,
    ) -> Result<Quantity> {
        let numerator = normalize(numerator);
        let denominator = normalize(denominator);
        check_temperature_tokens(&numerator, &denominator)?;

        let key = token_key(&numerator, &denominator);
        let units = self.cache.unit_string(&key, || {
            format::stringify_units(&self.registry, &numerator, &denominator)
        });
        let is_base = numerator
            .iter()
            .chain(&denominator)
            .all(|t| t == UNITY || self.registry.is_base_unit(t));

        let mut q = Quantity {
            scalar,
            numerator,
            denominator,
            base_scalar: scalar,
            signature: 0,
            units,
            is_base,
        };

        if is_base {
            q.signature = signature::compute(&self.registry, &q.numerator, &q.denominator);
        } else if let Some(scale) = q.temperature_scale() {
            q.base_scalar = scale.to_kelvin(scalar);
            q.signature = signature::TEMPERATURE_SIGNATURE;
        } else {
            let base = self.base_units(&q.numerator, &q.denominator)?;
            q.base_scalar = mul_safe(&[base.scale, scalar]);
            q.signature = signature::compute(&self.registry, &base.numerator, &base.denominator);
        }

        if q.is_temperature() && q.base_scalar < 0.0 {
            return Err(TemperatureError::BelowAbsoluteZero.into());
        }
        Ok(q)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop unity placeholders; an empty list becomes the unity singleton
fn normalize(tokens: Vec<String>) -> Vec<String> {
    let tokens: Vec<String> = tokens.into_iter().filter(|t| t != UNITY).collect();
    if tokens.is_empty() {
        vec![UNITY.to_string()]
    } else {
        tokens
    }
}

/// Temperatures must stand alone: one numerator token over unity
fn check_temperature_tokens(numerator: &[String], denominator: &[String]) -> Result<()> {
    let is_temperature = |t: &String| TempScale::of_temperature(t).is_some();
    let alone = numerator.len() == 1 && denominator.len() == 1 && denominator[0] == UNITY;
    if denominator.iter().any(is_temperature) || (!alone && numerator.iter().any(is_temperature)) {
        return Err(TemperatureError::CompoundUnit.into());
    }
    Ok(())
}

/// Cache key for a token list
pub(crate) fn token_key(numerator: &[String], denominator: &[String]) -> String {
    format!("{}|{}", numerator.join(" "), denominator.join(" "))
}

/// `<meter>` -> `meter`
fn bare_name(name: &str) -> &str {
    name.strip_prefix('<')
        .and_then(|n| n.strip_suffix('>'))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_basic() {
        let engine = Engine::new();
        let q = engine.parse("2.5 m").unwrap();
        let sum = engine.add(&q, "3 cm").unwrap();
        assert_eq!(sum.to_string(), "2.53 m");
    }

    #[test]
    fn test_quantity_constructor() {
        let engine = Engine::new();
        let q = engine.quantity(3.0, "A/km").unwrap();
        assert_eq!(q.to_string(), "3 A/km");
        let unitless = engine.quantity(4.0, "").unwrap();
        assert!(unitless.is_unitless());
        assert_eq!(unitless.to_float(), Ok(4.0));
    }

    #[test]
    fn test_build_rejects_compound_temperatures() {
        let engine = Engine::new();
        assert_eq!(
            engine.parse("1 tempC*m").map(|q| q.to_string()),
            Err(QtyError::Temperature(TemperatureError::CompoundUnit))
        );
        assert_eq!(
            engine.parse("1 m/tempF").map(|q| q.to_string()),
            Err(QtyError::Temperature(TemperatureError::CompoundUnit))
        );
    }

    #[test]
    fn test_engines_are_isolated() {
        let first = Engine::new();
        let second = Engine::new();
        first.parse("1 km").unwrap();
        assert!(!first.cache().is_empty());
        assert!(second.cache().is_empty());
    }
}
