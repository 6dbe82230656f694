use crate::Value;
use indexmap::IndexMap;

#[test]
fn floats_always_print_a_fraction_or_exponent() {
    assert_eq!(Value::Float(1.5).to_string(), "1.5");
    assert_eq!(Value::Float(2.0).to_string(), "2.0");
    assert_eq!(Value::Float(-0.25).to_string(), "-0.25");
}

#[test]
fn strings_use_json_style_escapes() {
    assert_eq!(
        Value::String("a\"b\\c\nd\te\u{1}".to_string()).to_string(),
        "\"a\\\"b\\\\c\\nd\\te\\u0001\"",
    );
    assert_eq!(Value::String("héllo".to_string()).to_string(), "\"héllo\"");
}

#[test]
fn composite_values() {
    let value = Value::Object(IndexMap::from([
        ("a".to_string(), Value::Int(1)),
        ("b".to_string(), Value::List(vec![
            Value::String("x".to_string()),
            Value::Null,
            Value::Bool(false),
            Value::Enum("RED".to_string()),
        ])),
        ("c".to_string(), Value::Object(IndexMap::new())),
    ]));

    assert_eq!(value.to_string(), "{a: 1, b: [\"x\", null, false, RED], c: {}}");
    assert_eq!(Value::List(vec![]).to_string(), "[]");
}

#[test]
fn as_str_only_for_strings() {
    assert_eq!(Value::String("x".to_string()).as_str(), Some("x"));
    assert_eq!(Value::Enum("X".to_string()).as_str(), None);
}
