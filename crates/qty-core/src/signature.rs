//! Dimensional signatures
//!
//! Every base unit belongs to one of ten dimension classes. A unit expression's signature
//! is the sum of `exponent * 20^class` over those classes, so equal signatures mean equal
//! dimensions whatever the surface units. A reciprocal unit has the negated signature.

use crate::registry::Registry;

/// Dimension classes, in signature weight order
pub const SIGNATURE_KINDS: [&str; 10] = [
    "length",
    "time",
    "temperature",
    "mass",
    "current",
    "substance",
    "luminosity",
    "currency",
    "information",
    "angle",
];

const RADIX: i64 = 20;

/// Signature shared by every temperature and degree unit
pub const TEMPERATURE_SIGNATURE: i64 = RADIX * RADIX;

/// Known signatures and their kind names, sorted by signature
static KINDS: &[(i64, &str)] = &[
    (-312078, "elastance"),
    (-312058, "resistance"),
    (-312057, "resistivity"),
    (-312038, "inductance"),
    (-152058, "potential"),
    (-152040, "magnetism"),
    (-152038, "magnetism"),
    (-7997, "specific_volume"),
    (-79, "snap"),
    (-59, "jolt"),
    (-39, "acceleration"),
    (-38, "radiation"),
    (-20, "frequency"),
    (-19, "speed"),
    (-18, "viscosity"),
    (-17, "volumetric_flow"),
    (-1, "wavenumber"),
    (0, "unitless"),
    (1, "length"),
    (2, "area"),
    (3, "volume"),
    (20, "time"),
    (400, "temperature"),
    (7941, "yank"),
    (7942, "power"),
    (7959, "pressure"),
    (7961, "force"),
    (7962, "energy"),
    (7979, "viscosity"),
    (7981, "momentum"),
    (7982, "angular_momentum"),
    (7997, "density"),
    (7998, "area_density"),
    (8000, "mass"),
    (152020, "radiation_exposure"),
    (159999, "magnetism"),
    (160000, "current"),
    (160020, "charge"),
    (312057, "conductivity"),
    (312058, "conductance"),
    (312078, "capacitance"),
    (3199980, "activity"),
    (3199997, "molar_concentration"),
    (3200000, "substance"),
    (63999998, "illuminance"),
    (64000000, "luminous_power"),
    (1280000000, "currency"),
    (25599999980, "information_rate"),
    (25600000000, "information"),
    (511999999980, "angular_velocity"),
    (512000000000, "angle"),
];

/// Signature of a list of base-unit tokens.
///
/// Tokens whose kind is not a dimension class (counts, solid angles, decibels) are
/// dimensionless and do not contribute.
pub fn compute(registry: &Registry, numerator: &[String], denominator: &[String]) -> i64 {
    let mut vector = [0i64; SIGNATURE_KINDS.len()];
    let mut add = |token: &str, delta: i64| {
        let class = registry
            .kind_of(token)
            .and_then(|kind| SIGNATURE_KINDS.iter().position(|k| *k == kind));
        if let Some(class) = class {
            vector[class] += delta;
        }
    };
    numerator.iter().for_each(|t| add(t.as_str(), 1));
    denominator.iter().for_each(|t| add(t.as_str(), -1));
    encode(&vector)
}

/// Mixed-radix encoding of a dimension exponent vector
pub fn encode(vector: &[i64; SIGNATURE_KINDS.len()]) -> i64 {
    vector
        .iter()
        .rev()
        .fold(0, |signature, exponent| signature * RADIX + exponent)
}

/// Kind name for a signature, if it is a well-known one
pub fn kind_of(signature: i64) -> Option<&'static str> {
    KINDS
        .binary_search_by_key(&signature, |(sig, _)| *sig)
        .ok()
        .map(|i| KINDS[i].1)
}

/// Every known kind name, sorted and deduplicated
pub fn kinds() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = KINDS.iter().map(|(_, name)| *name).collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Whether `kind` appears in the kind table
pub fn is_known_kind(kind: &str) -> bool {
    KINDS.iter().any(|(_, name)| *name == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_table_sorted() {
        assert!(KINDS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_encode() {
        // kg*m/s^2
        let mut force = [0; 10];
        force[0] = 1;
        force[1] = -2;
        force[3] = 1;
        assert_eq!(encode(&force), 7961);
        assert_eq!(kind_of(7961), Some("force"));

        let mut temperature = [0; 10];
        temperature[2] = 1;
        assert_eq!(encode(&temperature), TEMPERATURE_SIGNATURE);
    }

    #[test]
    fn test_kind_lookup() {
        assert_eq!(kind_of(0), Some("unitless"));
        assert_eq!(kind_of(312058), Some("conductance"));
        assert_eq!(kind_of(-312058), Some("resistance"));
        assert_eq!(kind_of(12345), None);
    }

    #[test]
    fn test_kinds_deduplicated() {
        let kinds = kinds();
        assert_eq!(kinds.iter().filter(|k| **k == "magnetism").count(), 1);
        assert!(kinds.contains(&"length"));
        assert!(is_known_kind("pressure"));
        assert!(!is_known_kind("counting"));
    }
}
