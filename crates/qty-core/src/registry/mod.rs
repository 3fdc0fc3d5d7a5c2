//! Unit and prefix registry
//!
//! The registry is configuration data: canonical tokens, their aliases, scale factors,
//! base-unit compositions and kinds. [`Registry::builtin`] loads the static catalog,
//! [`Registry::from_json`] loads a user supplied one.

pub mod catalog;

use crate::error::{QtyError, Result};
use crate::math::{div_safe, mul_safe};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub use catalog::UNITY;

/// Deepest composition chain accepted when reducing a unit to base units
const MAX_DEPTH: usize = 32;

/// Serialized prefix entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixConfig {
    pub name: String,
    pub aliases: Vec<String>,
    pub scalar: f64,
}

/// Serialized unit entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConfig {
    pub name: String,
    #[serde(default)]
    pub kind: String,
    pub aliases: Vec<String>,
    pub scalar: f64,
    #[serde(default)]
    pub numerator: Vec<String>,
    #[serde(default)]
    pub denominator: Vec<String>,
}

/// Complete registry description, as read from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub prefixes: Vec<PrefixConfig>,
    pub units: Vec<UnitConfig>,
    pub base_units: Vec<String>,
}

impl RegistryConfig {
    /// Config equivalent of the builtin catalog
    pub fn builtin() -> Self {
        let strings = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            prefixes: catalog::PREFIXES
                .iter()
                .map(|p| PrefixConfig {
                    name: p.name.to_string(),
                    aliases: strings(p.aliases),
                    scalar: p.scalar,
                })
                .collect(),
            units: catalog::UNITS
                .iter()
                .map(|u| UnitConfig {
                    name: u.name.to_string(),
                    kind: u.kind.to_string(),
                    aliases: strings(u.aliases),
                    scalar: u.scalar,
                    numerator: strings(u.numerator),
                    denominator: strings(u.denominator),
                })
                .collect(),
            base_units: strings(catalog::BASE_UNITS),
        }
    }
}

/// A unit reduced to base units
#[derive(Debug, Clone, PartialEq)]
pub struct BaseUnits {
    pub scale: f64,
    pub numerator: Vec<String>,
    pub denominator: Vec<String>,
}

impl BaseUnits {
    fn unit(name: &str) -> Self {
        Self {
            scale: 1.0,
            numerator: vec![name.to_string()],
            denominator: Vec::new(),
        }
    }
}

/// Validated, indexed unit registry
#[derive(Debug, Clone)]
pub struct Registry {
    prefixes: HashMap<String, PrefixConfig>,
    units: HashMap<String, UnitConfig>,
    /// Unit names in declaration order
    unit_order: Vec<String>,
    base_units: HashSet<String>,
    unit_aliases: HashMap<String, String>,
    prefix_aliases: HashMap<String, String>,
    /// Prefix aliases, longest first
    prefix_lookup: Vec<(String, String)>,
    reduced: HashMap<String, BaseUnits>,
}

impl Registry {
    /// Registry backed by the static catalog
    pub fn builtin() -> Self {
        match Self::from_config(RegistryConfig::builtin()) {
            Ok(registry) => registry,
            Err(err) => panic!("builtin unit catalog is invalid: {err}"),
        }
    }

    /// Load a registry from its JSON description
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RegistryConfig =
            serde_json::from_str(json).map_err(|e| QtyError::Registry(e.to_string()))?;
        Self::from_config(config)
    }

    /// Validate and index a registry description
    pub fn from_config(config: RegistryConfig) -> Result<Self> {
        let mut registry = Registry {
            prefixes: HashMap::new(),
            units: HashMap::new(),
            unit_order: Vec::new(),
            base_units: HashSet::new(),
            unit_aliases: HashMap::new(),
            prefix_aliases: HashMap::new(),
            prefix_lookup: Vec::new(),
            reduced: HashMap::new(),
        };

        for prefix in config.prefixes {
            check_entry(&prefix.name, &prefix.aliases, prefix.scalar)?;
            for alias in &prefix.aliases {
                claim(&mut registry.prefix_aliases, alias, &prefix.name)?;
            }
            if registry.prefixes.contains_key(&prefix.name) {
                return Err(invalid(format!("duplicate prefix {}", prefix.name)));
            }
            registry.prefixes.insert(prefix.name.clone(), prefix);
        }

        for unit in config.units {
            check_entry(&unit.name, &unit.aliases, unit.scalar)?;
            for alias in &unit.aliases {
                claim(&mut registry.unit_aliases, alias, &unit.name)?;
            }
            if registry.units.contains_key(&unit.name) {
                return Err(invalid(format!("duplicate unit {}", unit.name)));
            }
            registry.unit_order.push(unit.name.clone());
            registry.units.insert(unit.name.clone(), unit);
        }

        if !registry.units.contains_key(UNITY) {
            return Err(invalid(format!("missing unity unit {UNITY}")));
        }

        for base in config.base_units {
            if !registry.units.contains_key(&base) {
                return Err(invalid(format!("base unit {base} is not defined")));
            }
            registry.base_units.insert(base);
        }

        let mut lookup: Vec<(String, String)> = registry
            .prefix_aliases
            .iter()
            .map(|(alias, name)| (alias.clone(), name.clone()))
            .collect();
        lookup.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        registry.prefix_lookup = lookup;

        for name in &registry.unit_order {
            let base = registry.reduce(name, 0)?;
            registry.reduced.insert(name.clone(), base);
        }

        tracing::debug!(
            units = registry.units.len(),
            prefixes = registry.prefixes.len(),
            base_units = registry.base_units.len(),
            "unit registry loaded"
        );
        Ok(registry)
    }

    /// Reduce a unit to base units, following compositions recursively
    fn reduce(&self, name: &str, depth: usize) -> Result<BaseUnits> {
        if depth > MAX_DEPTH {
            return Err(invalid(format!("{name} does not reduce to base units")));
        }
        if self.base_units.contains(name) {
            return Ok(BaseUnits::unit(name));
        }
        let def = self
            .units
            .get(name)
            .ok_or_else(|| invalid(format!("unknown unit {name} in composition")))?;

        let mut base = BaseUnits {
            scale: def.scalar,
            numerator: Vec::new(),
            denominator: Vec::new(),
        };
        if name == UNITY {
            return Ok(base);
        }
        for token in &def.numerator {
            let part = self.reduce(token, depth + 1)?;
            base.scale = mul_safe(&[base.scale, part.scale]);
            base.numerator.extend(part.numerator);
            base.denominator.extend(part.denominator);
        }
        for token in &def.denominator {
            let part = self.reduce(token, depth + 1)?;
            base.scale = div_safe(base.scale, part.scale)?;
            base.numerator.extend(part.denominator);
            base.denominator.extend(part.numerator);
        }
        Ok(base)
    }

    /// Resolve one unit word to its tokens: `[unit]` or `[prefix, unit]`.
    ///
    /// A whole unit alias wins over a prefixed reading, so `min` is minutes and not milli-inches.
    pub fn resolve(&self, word: &str) -> Option<Vec<String>> {
        if let Some(unit) = self.unit_aliases.get(word) {
            return Some(vec![unit.clone()]);
        }
        self.prefix_lookup.iter().find_map(|(alias, prefix)| {
            let rest = word.strip_prefix(alias.as_str())?;
            let unit = self.unit_aliases.get(rest)?;
            (unit != UNITY).then(|| vec![prefix.clone(), unit.clone()])
        })
    }

    pub fn is_prefix(&self, token: &str) -> bool {
        self.prefixes.contains_key(token)
    }

    pub fn is_base_unit(&self, token: &str) -> bool {
        self.base_units.contains(token)
    }

    /// Multiplier of a prefix token
    pub fn prefix_scalar(&self, token: &str) -> Option<f64> {
        self.prefixes.get(token).map(|p| p.scalar)
    }

    /// Base-unit reduction of a unit token
    pub fn base_of(&self, token: &str) -> Option<&BaseUnits> {
        self.reduced.get(token)
    }

    /// Kind tag declared for a unit token
    pub fn kind_of(&self, token: &str) -> Option<&str> {
        self.units.get(token).map(|u| u.kind.as_str())
    }

    /// Aliases of a unit or prefix token in declaration order; empty for unknown tokens
    pub fn token_aliases(&self, token: &str) -> &[String] {
        match (self.units.get(token), self.prefixes.get(token)) {
            (Some(unit), _) => &unit.aliases,
            (None, Some(prefix)) => &prefix.aliases,
            (None, None) => &[],
        }
    }

    /// Primary alias of a unit or prefix token, used when rendering
    pub fn output_name<'a>(&'a self, token: &'a str) -> &'a str {
        self.token_aliases(token)
            .first()
            .map_or(token, String::as_str)
    }

    /// Aliases of a unit or prefix, found by canonical name (with or without angle
    /// brackets) or by any of its aliases
    pub fn aliases_of(&self, name: &str) -> Result<&[String]> {
        let bracketed = format!("<{name}>");
        let canonical = [name, bracketed.as_str()];
        for candidate in canonical {
            if let Some(unit) = self.units.get(candidate) {
                return Ok(&unit.aliases);
            }
        }
        if let Some(unit) = self.unit_aliases.get(name).and_then(|n| self.units.get(n)) {
            return Ok(&unit.aliases);
        }
        for candidate in canonical {
            if let Some(prefix) = self.prefixes.get(candidate) {
                return Ok(&prefix.aliases);
            }
        }
        self.prefix_aliases
            .get(name)
            .and_then(|n| self.prefixes.get(n))
            .map(|p| p.aliases.as_slice())
            .ok_or_else(|| QtyError::UnknownUnit(name.to_string()))
    }

    /// Units in declaration order
    pub fn units(&self) -> impl Iterator<Item = &UnitConfig> {
        self.unit_order.iter().filter_map(|name| self.units.get(name))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn invalid(message: String) -> QtyError {
    QtyError::Registry(message)
}

fn check_entry(name: &str, aliases: &[String], scalar: f64) -> Result<()> {
    if aliases.is_empty() {
        return Err(invalid(format!("{name} has no aliases")));
    }
    if aliases.iter().any(|a| a.is_empty()) {
        return Err(invalid(format!("{name} has an empty alias")));
    }
    if !scalar.is_finite() || scalar == 0.0 {
        return Err(invalid(format!("{name} has an invalid scalar {scalar}")));
    }
    Ok(())
}

fn claim(table: &mut HashMap<String, String>, alias: &str, name: &str) -> Result<()> {
    match table.get(alias) {
        Some(owner) => Err(invalid(format!(
            "alias {alias} is claimed by both {owner} and {name}"
        ))),
        None => {
            table.insert(alias.to_string(), name.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_prefers_whole_alias() {
        let registry = Registry::builtin();
        assert_eq!(registry.resolve("kg"), Some(vec!["<kilogram>".to_string()]));
        assert_eq!(registry.resolve("min"), Some(vec!["<minute>".to_string()]));
        assert_eq!(
            registry.resolve("cm"),
            Some(vec!["<centi>".to_string(), "<meter>".to_string()])
        );
        assert_eq!(
            registry.resolve("kilometers"),
            Some(vec!["<kilo>".to_string(), "<meter>".to_string()])
        );
    }

    #[test]
    fn test_resolve_longest_prefix() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.resolve("dam"),
            Some(vec!["<deca>".to_string(), "<meter>".to_string()])
        );
        assert_eq!(
            registry.resolve("Kibyte"),
            Some(vec!["<kibi>".to_string(), "<byte>".to_string()])
        );
    }

    #[test]
    fn test_resolve_unknown_and_prefixed_unity() {
        let registry = Registry::builtin();
        assert_eq!(registry.resolve("zz"), None);
        assert_eq!(registry.resolve("k1"), None);
        assert_eq!(registry.resolve("1"), Some(vec![UNITY.to_string()]));
    }

    #[test]
    fn test_token_aliases() {
        let registry = Registry::builtin();
        assert_eq!(registry.token_aliases("<inch>")[..2], ["in", "inch"]);
        assert_eq!(registry.token_aliases("<milli>")[0], "m");
        assert!(registry.token_aliases("<florp>").is_empty());
        assert!(!registry.token_aliases("<micro>").contains(&"mc".to_string()));
        assert_eq!(registry.output_name("<florp>"), "<florp>");
    }

    #[test]
    fn test_recursive_reduction() {
        let registry = Registry::builtin();
        let gross = registry.base_of("<gross>").unwrap();
        assert_eq!(gross.scale, 144.0);
        assert_eq!(gross.numerator, vec!["<each>", "<each>"]);

        let ppi = registry.base_of("<ppi>").unwrap();
        assert_eq!(ppi.numerator, vec!["<each>"]);
        assert_eq!(ppi.denominator, vec!["<meter>"]);

        let sqft = registry.base_of("<sqft>").unwrap();
        assert_eq!(sqft.scale, 0.09290304);
    }

    #[test]
    fn test_aliases_of() {
        let registry = Registry::builtin();
        assert_eq!(registry.aliases_of("m").unwrap()[1], "meter");
        assert_eq!(registry.aliases_of("meter").unwrap()[0], "m");
        assert_eq!(registry.aliases_of("<kilo>").unwrap(), &["k", "kilo"]);
        assert!(registry.aliases_of("nope").is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "prefixes": [{ "name": "<kilo>", "aliases": ["k"], "scalar": 1000 }],
            "units": [
                { "name": "<1>", "aliases": ["1"], "scalar": 1 },
                { "name": "<meter>", "kind": "length", "aliases": ["m"], "scalar": 1, "numerator": ["<meter>"] },
                { "name": "<pace>", "kind": "length", "aliases": ["pace"], "scalar": 0.75, "numerator": ["<meter>"] }
            ],
            "base_units": ["<meter>"]
        }"#;
        let registry = Registry::from_json(json).unwrap();
        assert_eq!(
            registry.resolve("kpace"),
            Some(vec!["<kilo>".to_string(), "<pace>".to_string()])
        );
        assert_eq!(registry.base_of("<pace>").unwrap().scale, 0.75);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let duplicate = r#"{
            "units": [
                { "name": "<1>", "aliases": ["1"], "scalar": 1 },
                { "name": "<a>", "aliases": ["x"], "scalar": 1, "numerator": ["<a>"] },
                { "name": "<b>", "aliases": ["x"], "scalar": 1, "numerator": ["<a>"] }
            ],
            "base_units": ["<a>"]
        }"#;
        assert!(matches!(
            Registry::from_json(duplicate),
            Err(QtyError::Registry(_))
        ));

        let cycle = r#"{
            "units": [
                { "name": "<1>", "aliases": ["1"], "scalar": 1 },
                { "name": "<a>", "aliases": ["a"], "scalar": 1, "numerator": ["<b>"] },
                { "name": "<b>", "aliases": ["b"], "scalar": 1, "numerator": ["<a>"] }
            ],
            "base_units": []
        }"#;
        assert!(matches!(Registry::from_json(cycle), Err(QtyError::Registry(_))));

        assert!(Registry::from_json("not json").is_err());
    }
}
