//! Integration tests for type predicates

use sundry::prelude::*;

fn every_kind() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::Bool(true),
        Value::from(0),
        Value::from(f64::NAN),
        Value::from(""),
        Value::from("text"),
        Value::symbol(Some("s")),
        Value::array([]),
        Value::arguments([Value::from(1)]),
        Value::object::<&str, _>([]),
        Value::object([("length", Value::from(0))]),
        Value::map_of([]),
        Value::set_of([]),
        Value::function("f", "function f() {}", |_| Value::Undefined),
        Value::date(Date::invalid()),
        Value::buffer(vec![0]),
        Value::typed_array(TypedArray::from_numbers(TypedArrayKind::Uint8Clamped, &[1.0])),
    ]
}

#[test]
fn is_arguments_on_plain_object() {
    assert!(!is_arguments(&Value::object::<&str, _>([])));
}

#[test]
fn is_arguments_on_arguments() {
    assert!(is_arguments(&Value::arguments([Value::from(1), Value::from(2)])));
}

#[test]
fn exactly_one_kind_check_matches() {
    for value in every_kind() {
        let hits = [
            is_arguments(&value),
            is_boolean(&value),
            is_buffer(&value),
            is_date(&value),
            is_symbol(&value),
            is_typed_array(&value),
        ]
        .iter()
        .filter(|hit| **hit)
        .count();
        assert!(hits <= 1, "{value:?}");
    }
}

#[test]
fn array_like_implies_valid_length() {
    for value in every_kind() {
        if is_array_like(&value) {
            let length = value.property("length").unwrap_or(Value::Undefined);
            assert!(is_length(&length), "{value:?}");
        }
    }
}

#[test]
fn object_false_for_primitives() {
    for value in every_kind() {
        if value.tag().is_primitive() {
            assert!(!is_object(&value), "{value:?}");
        }
    }
}

#[test]
fn array_like_object_excludes_strings() {
    assert!(is_array_like(&Value::from("abc")));
    assert!(!is_array_like_object(&Value::from("abc")));
    assert!(is_array_like_object(&Value::buffer(vec![1])));
}

#[test]
fn is_empty_by_kind() {
    let expectations = [
        (Value::Undefined, true),
        (Value::Null, true),
        (Value::from(""), true),
        (Value::from("a"), false),
        (Value::array([]), true),
        (Value::arguments([Value::from(1)]), false),
        (Value::object::<&str, _>([]), true),
        (Value::object([("length", Value::from(0))]), false),
        (Value::map_of([(Value::Null, Value::Null)]), false),
        (Value::set_of([]), true),
        (Value::buffer(Vec::<u8>::new()), true),
        (Value::from(42), true),
        (Value::symbol(None), true),
        (Value::function("f", "function f() {}", |_| Value::Undefined), true),
    ];
    for (value, expected) in expectations {
        assert_eq!(is_empty(&value), expected, "{value:?}");
    }
}
