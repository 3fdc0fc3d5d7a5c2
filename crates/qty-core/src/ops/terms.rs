//! Term combination for multiplication and division
//!
//! Unit tokens of both operands are grouped by bare unit, ignoring prefixes. Each group keeps
//! a net exponent and the first prefix seen; occurrences with a different prefix contribute
//! their prefix ratio to the overall scale. Groups whose net exponent is zero cancel out.

use crate::error::Result;
use crate::math::{div_safe, mul_safe};
use crate::registry::{Registry, UNITY};

/// Combined units and the scale factor left over from mismatched prefixes
#[derive(Debug, Clone, PartialEq)]
pub struct Terms {
    pub numerator: Vec<String>,
    pub denominator: Vec<String>,
    pub scale: f64,
}

#[derive(Debug)]
struct Group<'a> {
    unit: &'a str,
    prefix: Option<&'a str>,
    /// Net exponent
    direction: i32,
    /// Prefix ratios of occurrences found in a numerator
    numerator_ratio: f64,
    /// Prefix ratios of occurrences found in a denominator
    denominator_ratio: f64,
}

/// Combine `num1/den1` with `num2/den2`.
///
/// Multiplication passes the second operand as is; division passes it swapped.
pub fn clean_terms(
    registry: &Registry,
    num1: &[String],
    den1: &[String],
    num2: &[String],
    den2: &[String],
) -> Result<Terms> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    combine(registry, &mut groups, num1, 1)?;
    combine(registry, &mut groups, den1, -1)?;
    combine(registry, &mut groups, num2, 1)?;
    combine(registry, &mut groups, den2, -1)?;

    let mut terms = Terms {
        numerator: Vec::new(),
        denominator: Vec::new(),
        scale: 1.0,
    };
    for group in groups {
        let target = if group.direction > 0 {
            &mut terms.numerator
        } else {
            &mut terms.denominator
        };
        for _ in 0..group.direction.unsigned_abs() {
            if let Some(prefix) = group.prefix {
                target.push(prefix.to_string());
            }
            target.push(group.unit.to_string());
        }
        let ratio = div_safe(group.numerator_ratio, group.denominator_ratio)?;
        terms.scale = mul_safe(&[terms.scale, ratio]);
    }
    Ok(terms)
}

fn combine<'a>(
    registry: &Registry,
    groups: &mut Vec<Group<'a>>,
    tokens: &'a [String],
    direction: i32,
) -> Result<()> {
    let mut tokens = tokens.iter().filter(|t| *t != UNITY);
    while let Some(token) = tokens.next() {
        let (prefix, unit) = if registry.is_prefix(token) {
            match tokens.next() {
                Some(unit) => (Some(token.as_str()), unit.as_str()),
                None => break,
            }
        } else {
            (None, token.as_str())
        };
        let scalar = prefix_value(registry, prefix);

        match groups.iter_mut().find(|g| g.unit == unit) {
            Some(group) => {
                group.direction += direction;
                let ratio = div_safe(scalar, prefix_value(registry, group.prefix))?;
                if direction > 0 {
                    group.numerator_ratio = mul_safe(&[group.numerator_ratio, ratio]);
                } else {
                    group.denominator_ratio = mul_safe(&[group.denominator_ratio, ratio]);
                }
            }
            None => groups.push(Group {
                unit,
                prefix,
                direction,
                numerator_ratio: 1.0,
                denominator_ratio: 1.0,
            }),
        }
    }
    Ok(())
}

fn prefix_value(registry: &Registry, prefix: Option<&str>) -> f64 {
    prefix
        .and_then(|p| registry.prefix_scalar(p))
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cancels_matching_units() {
        let registry = Registry::builtin();
        let terms = clean_terms(
            &registry,
            &tokens(&["<siemens>"]),
            &tokens(&[UNITY]),
            &tokens(&[UNITY]),
            &tokens(&["<siemens>"]),
        )
        .unwrap();
        assert!(terms.numerator.is_empty());
        assert!(terms.denominator.is_empty());
        assert_eq!(terms.scale, 1.0);
    }

    #[test]
    fn test_keeps_first_prefix() {
        let registry = Registry::builtin();
        // cm*kg times m
        let terms = clean_terms(
            &registry,
            &tokens(&["<centi>", "<meter>", "<kilogram>"]),
            &tokens(&[UNITY]),
            &tokens(&["<meter>"]),
            &tokens(&[UNITY]),
        )
        .unwrap();
        assert_eq!(
            terms.numerator,
            tokens(&["<centi>", "<meter>", "<centi>", "<meter>", "<kilogram>"])
        );
        assert_eq!(terms.scale, 100.0);
    }

    #[test]
    fn test_cancelled_prefixes_still_scale() {
        let registry = Registry::builtin();
        // km divided by m
        let terms = clean_terms(
            &registry,
            &tokens(&["<kilo>", "<meter>"]),
            &tokens(&[UNITY]),
            &tokens(&[UNITY]),
            &tokens(&["<meter>"]),
        )
        .unwrap();
        assert!(terms.numerator.is_empty());
        assert_eq!(terms.scale, 1000.0);
    }
}
