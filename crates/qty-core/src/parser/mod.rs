//! Quantity expression parser using pest

mod ast;

pub use ast::{Factor, ParsedQuantity};

use crate::error::ParseError;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct QtyParser;

/// Parse a full quantity expression such as `"5.6 kg*m/s^2"`
pub fn parse_quantity(input: &str) -> Result<ParsedQuantity, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(syntax(input, "empty expression".to_string()));
    }
    let pairs =
        QtyParser::parse(Rule::quantity, input).map_err(|e| syntax(input, e.to_string()))?;
    ast::build_quantity(pairs)
}

/// Parse a unit expression without a scalar, such as `"kg*m/s^2"`.
///
/// An empty string is the unitless expression.
pub fn parse_units(input: &str) -> Result<ParsedQuantity, ParseError> {
    let input = input.trim();
    let pairs =
        QtyParser::parse(Rule::unit_expr, input).map_err(|e| syntax(input, e.to_string()))?;
    ast::build_quantity(pairs)
}

fn syntax(input: &str, message: String) -> ParseError {
    ParseError::Syntax {
        input: input.to_string(),
        message,
    }
}
