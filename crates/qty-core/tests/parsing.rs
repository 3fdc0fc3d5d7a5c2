use qty_core::{Engine, ParseError, QtyError};

#[test]
fn test_scalar_and_compound_units() {
    let engine = Engine::new();

    let q = engine.parse("5.6 kg*m/s^2").unwrap();
    assert_eq!(q.scalar(), 5.6);
    assert_eq!(q.units(), "kg*m/s^2");
    assert_eq!(q.kind(), Some("force"));

    let q = engine.parse("3 A/km").unwrap();
    assert_eq!(q.to_string(), "3 A/km");
}

#[test]
fn test_missing_scalar_is_one() {
    let engine = Engine::new();
    let q = engine.parse("km").unwrap();
    assert_eq!(q.scalar(), 1.0);
    assert_eq!(q.units(), "km");
}

#[test]
fn test_scalar_forms() {
    let engine = Engine::new();
    assert_eq!(engine.parse("-3e2 ft").unwrap().scalar(), -300.0);
    assert_eq!(engine.parse("- 1.5 m").unwrap().scalar(), -1.5);
    assert_eq!(engine.parse(".5 m").unwrap().scalar(), 0.5);
    assert_eq!(engine.parse("+2 s").unwrap().scalar(), 2.0);
}

#[test]
fn test_unitless() {
    let engine = Engine::new();
    let q = engine.parse("42").unwrap();
    assert!(q.is_unitless());
    assert_eq!(q.units(), "");
    assert_eq!(q.to_string(), "42");
    assert_eq!(q.to_float(), Ok(42.0));
}

#[test]
fn test_exponent_notations_agree() {
    let engine = Engine::new();
    for expr in ["1 m^2/s^2", "1 m**2/s**2", "1 m2/s2", "1 m^2*s^-2", "1 m2 s-2"] {
        let q = engine.parse(expr).unwrap();
        assert_eq!(q.units(), "m^2/s^2", "parsing {expr}");
    }
}

#[test]
fn test_prefixes_and_aliases() {
    let engine = Engine::new();
    let q = engine.parse("1 kilometre").unwrap();
    assert_eq!(q.units(), "km");
    assert_eq!(q.base_scalar(), 1000.0);

    // A whole-unit alias wins over a prefix split
    let q = engine.parse("1 min").unwrap();
    assert_eq!(q.kind(), Some("time"));

    let q = engine.parse("1 Mibyte").unwrap();
    assert_eq!(q.base_scalar(), 1_048_576.0);
    assert_eq!(q.kind(), Some("information"));
}

#[test]
fn test_reciprocal_units() {
    let engine = Engine::new();
    let q = engine.parse("10 1/s").unwrap();
    assert_eq!(q.to_string(), "10 1/s");
    assert_eq!(q.numerator(), ["<1>"]);
    assert_eq!(q.denominator(), ["<second>"]);

    let q = engine.parse("2/S").unwrap();
    assert_eq!(q.scalar(), 2.0);
    assert_eq!(q.units(), "1/S");
}

#[test]
fn test_digits_inside_unit_names() {
    let engine = Engine::new();
    let q = engine.parse("4 cmH2O").unwrap();
    assert_eq!(q.kind(), Some("pressure"));
}

#[test]
fn test_constructor_with_units() {
    let engine = Engine::new();
    let q = engine.quantity(2.5, "m/s").unwrap();
    assert_eq!(q.to_string(), "2.5 m/s");
    assert_eq!(q.kind(), Some("speed"));

    let unitless = engine.quantity(7.0, "").unwrap();
    assert!(unitless.is_unitless());

    assert!(matches!(
        engine.quantity(1.0, "2 m"),
        Err(QtyError::Parse(ParseError::Syntax { .. }))
    ));
}

#[test]
fn test_parse_errors() {
    let engine = Engine::new();

    assert!(matches!(
        engine.parse(""),
        Err(QtyError::Parse(ParseError::Syntax { .. }))
    ));
    assert!(matches!(
        engine.parse("1 m/s/s"),
        Err(QtyError::Parse(ParseError::Syntax { .. }))
    ));
    assert_eq!(
        engine.parse("1 florps").unwrap_err(),
        QtyError::Parse(ParseError::UnknownUnit("florps".to_string()))
    );
    assert!(matches!(
        engine.parse("1 m^5"),
        Err(QtyError::Parse(ParseError::ExponentOutOfRange { exponent: 5, .. }))
    ));
    assert!(matches!(
        engine.parse("1 J/s^-2"),
        Err(QtyError::Parse(ParseError::ExponentOutOfRange { exponent: -2, .. }))
    ));
    assert!(matches!(
        engine.parse("1 m^x"),
        Err(QtyError::Parse(ParseError::InvalidExponent(_)))
    ));
}

#[test]
fn test_error_messages() {
    let engine = Engine::new();
    let err = engine.parse("1 florps").unwrap_err();
    assert_eq!(err.to_string(), "unit not recognized: florps");
}
