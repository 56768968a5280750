//! Integration tests for defaults, casting, and equality

use sundry::prelude::*;

#[test]
fn cast_array_cases() {
    assert_eq!(cast_array(Some(&Value::from(2))), Value::array([Value::from(2)]));
    assert_eq!(
        cast_array(Some(&Value::array([Value::from(2)]))),
        Value::array([Value::from(2)])
    );
    assert_eq!(cast_array(Some(&Value::Undefined)), Value::array([Value::Undefined]));
    assert_eq!(cast_array(Some(&Value::Null)), Value::array([Value::Null]));
    assert_eq!(cast_array(None), Value::array([]));
}

#[test]
fn default_to_cases() {
    let three = Value::from(3);
    assert_eq!(default_to(&Value::from(2), &three), Value::from(2));
    for missing in [Value::from(f64::NAN), Value::Null, Value::Undefined] {
        assert_eq!(default_to(&missing, &three), three, "{missing:?}");
    }
}

#[test]
fn default_to_any_cases() {
    assert_eq!(
        default_to_any(&Value::from(2), &[Value::from(3), Value::from(4)]),
        Value::from(2)
    );
    let defaults = [
        Value::from(f64::NAN),
        Value::Null,
        Value::Undefined,
        Value::from(10),
        Value::from(20),
    ];
    assert_eq!(default_to_any(&Value::Null, &defaults), Value::from(10));
    assert_eq!(default_to_any(&Value::from(2), &[]), Value::from(2));
}

#[test]
fn eq_cases() {
    let obj = Value::object([("x", Value::from(0))]);
    let cases = [
        (Value::from(2), Value::from("2"), false),
        (Value::from(f64::NAN), Value::from(f64::NAN), true),
        (Value::from(0.0), Value::from(-0.0), true),
        (Value::from(-0.0), Value::from(0.0), true),
        (Value::from(2), Value::from(2), true),
        (Value::from(2), Value::from(3), false),
        (Value::Undefined, Value::Undefined, true),
        (Value::Null, Value::Null, true),
        (Value::from("x"), Value::from("x"), true),
        (obj.clone(), obj.clone(), true),
        (obj, Value::object([("x", Value::from(0))]), false),
    ];
    for (a, b, expected) in cases {
        assert_eq!(eq(&a, &b), expected, "eq({a:?}, {b:?})");
    }
}
