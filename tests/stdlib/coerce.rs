//! Integration tests for coercion

use sundry::prelude::*;

#[test]
fn to_number_literals() {
    let cases = [
        ("0x1A", 26.0),
        ("0b101", 5.0),
        ("0o17", 15.0),
        (" 42 ", 42.0),
        ("-1e-2", -0.01),
        ("", 0.0),
        (".5", 0.5),
    ];
    for (text, expected) in cases {
        assert_eq!(to_number(&Value::from(text)), expected, "{text}");
    }
}

#[test]
fn to_number_malformed_is_nan() {
    for text in ["not a number", "-0x1A", "1.2.3", "0b2", "12abc"] {
        assert!(to_number(&Value::from(text)).is_nan(), "{text}");
    }
}

#[test]
fn to_number_of_reference_kinds_is_nan() {
    let values = [
        Value::array([]),
        Value::object::<&str, _>([]),
        Value::arguments([]),
        Value::function("f", "function f() {}", |_| Value::Undefined),
        Value::symbol(None),
        Value::map_of([]),
        Value::set_of([]),
    ];
    for value in values {
        assert!(to_number(&value).is_nan(), "{value:?}");
    }
}

#[test]
fn to_finite_and_to_integer() {
    assert_eq!(to_finite(&Value::from("Infinity")), f64::MAX);
    assert_eq!(to_finite(&Value::Undefined), 0.0);
    assert_eq!(to_integer(&Value::from("-3.9")), -3.0);
    assert_eq!(to_integer(&Value::Bool(true)), 1.0);
}

#[test]
fn to_string_forms() {
    let cases = [
        (Value::Null, ""),
        (Value::Undefined, "undefined"),
        (Value::from("abc"), "abc"),
        (Value::from(-0.0), "-0"),
        (Value::from(1.5), "1.5"),
        (Value::from(f64::INFINITY), "Infinity"),
        (Value::Bool(false), "false"),
        (
            Value::array([Value::from(1), Value::from(2), Value::from(3)]),
            "1,2,3",
        ),
        (Value::array([Value::Null, Value::Undefined]), ","),
        (Value::arguments([Value::from(1)]), "[object Arguments]"),
        (Value::date(Date::invalid()), "Invalid Date"),
    ];
    for (value, expected) in cases {
        assert_eq!(to_string(&value), expected, "{value:?}");
    }
}

#[test]
fn to_string_plain_object() {
    let v = Value::object([
        ("x", Value::from(5)),
        ("y", Value::array([Value::from(6), Value::from(7)])),
    ]);
    assert_eq!(to_string(&v), r#"{"x":5,"y":[6,7]}"#);
}
