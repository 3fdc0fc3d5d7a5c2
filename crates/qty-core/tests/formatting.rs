use pretty_assertions::assert_eq;
use qty_core::Engine;

#[test]
fn test_default_format() {
    let engine = Engine::new();
    let cases = [
        ("2.53 m", "2.53 m"),
        ("7.5 m^2", "7.5 m^2"),
        ("1 kg*m/s^2", "1 kg*m/s^2"),
        ("3 1/s", "3 1/s"),
        ("20", "20"),
        ("1 m*m*m", "1 m^3"),
        ("2 km/h", "2 km/h"),
    ];
    for (input, expected) in cases {
        let q = engine.parse(input).unwrap();
        assert_eq!(q.to_string(), expected, "formatting {input}");
    }
}

#[test]
fn test_aliases_render_primary_name() {
    let engine = Engine::new();
    assert_eq!(engine.parse("3 meters").unwrap().units(), "m");
    assert_eq!(engine.parse("1 kilogram").unwrap().units(), "kg");
    assert_eq!(engine.parse("1 centigrade").unwrap().units(), "degC");
}

#[test]
fn test_repeated_units_keep_first_seen_order() {
    let engine = Engine::new();
    let q = engine.parse("1 m*s*m").unwrap();
    assert_eq!(q.units(), "m^2*s");
}

#[test]
fn test_custom_formatter() {
    let engine = Engine::new();
    let q = engine.parse("2.5 m").unwrap();
    let text = q.format(|scalar, units| format!("{scalar:.2} [{units}]"));
    assert_eq!(text, "2.50 [m]");

    let unitless = engine.parse("4").unwrap();
    assert_eq!(unitless.format(|scalar, units| format!("{scalar}|{units}")), "4|");
}

#[test]
fn test_serialize() {
    let engine = Engine::new();
    let q = engine.parse("2.5 m/s").unwrap();
    let json = serde_json::to_value(&q).unwrap();
    assert_eq!(json, serde_json::json!({ "scalar": 2.5, "units": "m/s" }));
}
