//! Rendering unit tokens back to text

use crate::registry::{Registry, UNITY};

/// Canonical unit string: `kg*m/s^2`, `1/s`, or empty when unitless
pub fn stringify_units(registry: &Registry, numerator: &[String], denominator: &[String]) -> String {
    let top = render_terms(registry, numerator);
    let bottom = render_terms(registry, denominator);
    match (top.is_empty(), bottom.is_empty()) {
        (_, true) => top,
        (true, false) => format!("1/{bottom}"),
        (false, false) => format!("{top}/{bottom}"),
    }
}

/// Output names joined by `*`, repeated names collapsed to `name^count` in first-seen order
fn render_terms(registry: &Registry, tokens: &[String]) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut prefix: Option<&str> = None;
    for token in tokens.iter().filter(|t| *t != UNITY) {
        if registry.is_prefix(token) {
            prefix = Some(token.as_str());
            continue;
        }
        words.push(match prefix.take() {
            Some(prefix) => prefixed_name(registry, prefix, token),
            None => registry.output_name(token).to_string(),
        });
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    for word in words {
        match counts.iter_mut().find(|(seen, _)| *seen == word) {
            Some((_, count)) => *count += 1,
            None => counts.push((word, 1)),
        }
    }

    counts
        .into_iter()
        .map(|(word, count)| match count {
            1 => word,
            n => format!("{word}^{n}"),
        })
        .collect::<Vec<_>>()
        .join("*")
}

/// First prefix and unit alias pair that reads back as the same two tokens.
///
/// Plain concatenation of primary aliases can name another unit: milli + `in` is `min`, so
/// milli-inches render as `minch`.
fn prefixed_name(registry: &Registry, prefix: &str, unit: &str) -> String {
    let expected = [prefix, unit];
    for prefix_alias in registry.token_aliases(prefix) {
        for unit_alias in registry.token_aliases(unit) {
            let word = format!("{prefix_alias}{unit_alias}");
            if registry.resolve(&word).is_some_and(|tokens| tokens == expected) {
                return word;
            }
        }
    }
    tracing::warn!(prefix, unit, "no alias pair reads back as the same units");
    format!("{}{}", registry.output_name(prefix), registry.output_name(unit))
}

/// Default scalar and unit rendering: `"2.53 m"`, `"20"`
pub fn default_format(scalar: f64, units: &str) -> String {
    format!("{scalar} {units}").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collapses_repeats() {
        let registry = Registry::builtin();
        let units = stringify_units(
            &registry,
            &tokens(&["<kilogram>", "<meter>", "<meter>"]),
            &tokens(&["<second>", "<second>"]),
        );
        assert_eq!(units, "kg*m^2/s^2");
    }

    #[test]
    fn test_prefixes_and_unity() {
        let registry = Registry::builtin();
        let units = stringify_units(&registry, &tokens(&["<centi>", "<meter>"]), &tokens(&[UNITY]));
        assert_eq!(units, "cm");
        let units = stringify_units(&registry, &tokens(&[UNITY]), &tokens(&["<second>"]));
        assert_eq!(units, "1/s");
        let units = stringify_units(&registry, &tokens(&[UNITY]), &tokens(&[UNITY]));
        assert_eq!(units, "");
    }

    #[test]
    fn test_prefixed_names_read_back() {
        let registry = Registry::builtin();
        let render = |prefix: &str, unit: &str| {
            stringify_units(&registry, &tokens(&[prefix, unit]), &tokens(&[UNITY]))
        };
        // Primary aliases would spell minutes, knots, candela and days
        assert_eq!(render("<milli>", "<inch>"), "minch");
        assert_eq!(render("<kilo>", "<metric-ton>"), "ktonne");
        assert_eq!(render("<centi>", "<day>"), "cday");
        assert_eq!(render("<deca>", "<year>"), "dayr");
        assert_eq!(render("<micro>", "<carat>"), "µct");
        assert_eq!(render("<kilo>", "<meter>"), "km");
    }

    #[test]
    fn test_default_format() {
        assert_eq!(default_format(2.53, "m"), "2.53 m");
        assert_eq!(default_format(20.0, ""), "20");
        assert_eq!(default_format(0.0000001, "s"), "0.0000001 s");
    }
}
