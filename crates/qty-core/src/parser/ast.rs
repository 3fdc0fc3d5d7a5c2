//! Parsed quantity representation

use crate::error::ParseError;
use pest::iterators::{Pair, Pairs};
use std::iter;

use super::Rule;

/// Exponents accepted in the numerator
const NUMERATOR_EXPONENTS: std::ops::RangeInclusive<i32> = -4..=4;
/// Exponents accepted in the denominator
const DENOMINATOR_EXPONENTS: std::ops::RangeInclusive<i32> = 0..=4;

/// One unit word with its exponent, e.g. `km^2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factor {
    pub name: String,
    pub exponent: i32,
}

/// A quantity expression before unit words are resolved against a registry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuantity {
    pub scalar: Option<f64>,
    pub numerator: Vec<Factor>,
    pub denominator: Vec<Factor>,
}

impl ParsedQuantity {
    /// Unit words after exponent expansion.
    ///
    /// `X^n` becomes `n` copies of `X`. Negative numerator exponents move the copies to the
    /// end of the denominator.
    pub fn expand(&self) -> (Vec<&str>, Vec<&str>) {
        let mut top = Vec::new();
        let mut moved = Vec::new();
        for factor in &self.numerator {
            let count = factor.exponent.unsigned_abs() as usize;
            let words = iter::repeat(factor.name.as_str()).take(count);
            if factor.exponent < 0 {
                moved.extend(words);
            } else {
                top.extend(words);
            }
        }

        let mut bottom = Vec::new();
        for factor in &self.denominator {
            let count = factor.exponent.unsigned_abs() as usize;
            bottom.extend(iter::repeat(factor.name.as_str()).take(count));
        }
        bottom.extend(moved);
        (top, bottom)
    }
}

#[derive(Clone, Copy)]
enum Position {
    Numerator,
    Denominator,
}

/// Build a [`ParsedQuantity`] from a `quantity` or `unit_expr` parse
pub fn build_quantity(pairs: Pairs<'_, Rule>) -> Result<ParsedQuantity, ParseError> {
    let mut parsed = ParsedQuantity::default();
    for pair in pairs.flat_map(|p| p.into_inner()) {
        match pair.as_rule() {
            Rule::scalar => parsed.scalar = Some(build_scalar(pair.as_str())?),
            Rule::numerator => parsed.numerator = build_factors(pair, Position::Numerator)?,
            Rule::denominator => {
                parsed.denominator = build_factors(pair, Position::Denominator)?
            }
            _ => {}
        }
    }
    Ok(parsed)
}

fn build_scalar(text: &str) -> Result<f64, ParseError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .parse()
        .map_err(|_| ParseError::InvalidScalar(text.to_string()))
}

fn build_factors(pair: Pair<'_, Rule>, position: Position) -> Result<Vec<Factor>, ParseError> {
    let mut factors = Vec::new();
    for term in pair.into_inner() {
        if term.as_rule() != Rule::term {
            // unity
            continue;
        }
        for factor in term.into_inner() {
            factors.push(build_factor(factor, position)?);
        }
    }
    Ok(factors)
}

fn build_factor(pair: Pair<'_, Rule>, position: Position) -> Result<Factor, ParseError> {
    let mut name = String::new();
    let mut exponent = 1;
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::name => name = part.as_str().to_string(),
            Rule::power => {
                let text = part.as_str();
                let digits = text.trim_start_matches(['^', '*']);
                exponent = digits
                    .parse()
                    .map_err(|_| ParseError::InvalidExponent(text.to_string()))?;
            }
            _ => {}
        }
    }

    let allowed = match position {
        Position::Numerator => NUMERATOR_EXPONENTS,
        Position::Denominator => DENOMINATOR_EXPONENTS,
    };
    if !allowed.contains(&exponent) {
        return Err(ParseError::ExponentOutOfRange {
            unit: name,
            exponent,
        });
    }
    Ok(Factor { name, exponent })
}
