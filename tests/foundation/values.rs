//! Integration tests for Value types
//!
//! Tests Value variants, equality, identity, hashing, display, and
//! property access.

use std::collections::HashSet;

use sundry_foundation::{Date, LtMap, Record, Symbol, Tag, TypedArray, TypedArrayKind, Value};

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_undefined_and_null() {
    assert!(Value::Undefined.is_undefined());
    assert!(Value::Null.is_null());
    assert!(Value::Undefined.is_nullish());
    assert!(Value::Null.is_nullish());
    assert!(!Value::from(0).is_nullish());
}

#[test]
fn value_from_option() {
    assert_eq!(Value::from(Some(3)), Value::from(3));
    assert_eq!(Value::from(None::<i32>), Value::Undefined);
}

#[test]
fn value_from_vec() {
    let v = Value::from(vec![1, 2, 3]);
    assert_eq!(v.tag(), Tag::Array);
    assert_eq!(v.length(), Some(3));
}

#[test]
fn value_from_record() {
    let record: Record = LtMap::new()
        .insert("a".into(), Value::from(1))
        .insert("b".into(), Value::from(2));
    let v = Value::from(record);
    assert_eq!(v.property("b"), Some(Value::from(2)));
    let keys: Vec<_> = v
        .as_object()
        .map(|r| r.keys().map(ToString::to_string).collect())
        .unwrap_or_default();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn value_object_duplicate_keys_keep_first_position() {
    let v = Value::object([
        ("a", Value::from(1)),
        ("b", Value::from(2)),
        ("a", Value::from(3)),
    ]);
    assert_eq!(v.to_string(), r#"{"a":3,"b":2}"#);
}

#[test]
fn value_tags_cover_every_kind() {
    let tags: Vec<Tag> = [
        Value::Undefined,
        Value::Null,
        Value::Bool(true),
        Value::from(1),
        Value::from("s"),
        Value::symbol(None),
        Value::array([]),
        Value::arguments([]),
        Value::object::<&str, _>([]),
        Value::map_of([]),
        Value::set_of([]),
        Value::function("f", "function f() {}", |_| Value::Undefined),
        Value::date_from_millis(0.0),
        Value::buffer(vec![]),
        Value::typed_array(TypedArray::from_numbers(TypedArrayKind::Float32, &[])),
    ]
    .iter()
    .map(Value::tag)
    .collect();
    let unique: HashSet<Tag> = tags.iter().copied().collect();
    assert_eq!(unique.len(), tags.len());
}

// =============================================================================
// Equality and Identity
// =============================================================================

#[test]
fn clones_share_identity() {
    let v = Value::array([Value::from(1)]);
    let w = v.clone();
    assert!(v.same_value_zero(&w));
}

#[test]
fn structurally_equal_values_have_distinct_identity() {
    let v = Value::array([Value::from(1)]);
    let w = Value::array([Value::from(1)]);
    assert_eq!(v, w);
    assert!(!v.same_value_zero(&w));
}

#[test]
fn dates_compare_by_timestamp() {
    let a = Value::date_from_millis(86_400_000.0);
    let b = Value::date_from_millis(86_400_000.0);
    assert_eq!(a, b);
    assert!(!a.same_value_zero(&b));
}

#[test]
fn functions_compare_by_identity() {
    let f = Value::function("f", "function f() {}", |_| Value::Undefined);
    let g = Value::function("f", "function f() {}", |_| Value::Undefined);
    assert_eq!(f, f.clone());
    assert_ne!(f, g);
}

#[test]
fn maps_use_deep_keys() {
    let m = Value::map_of([(Value::array([Value::from(1)]), Value::from("one"))]);
    let Value::Map(map) = &m else {
        panic!("expected a map");
    };
    assert_eq!(
        map.get(&Value::array([Value::from(1)])),
        Some(&Value::from("one"))
    );
}

#[test]
fn equal_values_hash_equally() {
    let mut set = HashSet::new();
    set.insert(Value::object([("x", Value::from(f64::NAN))]));
    assert!(set.contains(&Value::object([("x", Value::from(f64::NAN))])));
    assert!(!set.contains(&Value::object([("x", Value::from(1))])));
}

// =============================================================================
// Symbols, Functions, Dates
// =============================================================================

#[test]
fn symbol_descriptions() {
    let sym = Symbol::new(Some("tag"));
    assert_eq!(sym.description(), Some("tag"));
    assert_eq!(Value::from(sym).to_string(), "Symbol(tag)");
    assert_eq!(Value::symbol(None).to_string(), "Symbol()");
}

#[test]
fn function_name_and_call() {
    let f = Value::function("sum", "(a, b) => a + b", |args| {
        Value::from(args.iter().filter_map(Value::as_number).sum::<f64>())
    });
    assert_eq!(f.property("name"), Some(Value::from("sum")));
    assert_eq!(f.call(&[Value::from(2), Value::from(3)]).unwrap(), Value::from(5));
    assert_eq!(format!("{f:?}"), "[Function: sum]");
}

#[test]
fn date_rendering() {
    let date = Date::from_millis(1_000_000_000_000.0);
    assert_eq!(
        date.to_string(),
        "Sun Sep 09 2001 01:46:40 GMT+0000 (Coordinated Universal Time)"
    );
    assert_eq!(format!("{date:?}"), "2001-09-09T01:46:40.000Z");
    assert!(!Date::invalid().is_valid());
}

// =============================================================================
// Property Access
// =============================================================================

#[test]
fn string_properties() {
    let s = Value::from("abc");
    assert_eq!(s.property("length"), Some(Value::from(3)));
    assert_eq!(s.property("2"), Some(Value::from("c")));
    assert_eq!(s.index(3), None);
}

#[test]
fn typed_array_properties() {
    let t = Value::typed_array(TypedArray::from_numbers(
        TypedArrayKind::Int16,
        &[1.0, 40000.0],
    ));
    assert_eq!(t.property("length"), Some(Value::from(2)));
    assert_eq!(t.index(1), Some(Value::from(-25536)));
}

#[test]
fn map_and_set_sizes() {
    let m = Value::map_of([
        (Value::from("a"), Value::from(1)),
        (Value::from("a"), Value::from(2)),
    ]);
    assert_eq!(m.property("size"), Some(Value::from(1)));
    assert_eq!(m.property("length"), None);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_numbers() {
    assert_eq!(Value::from(1e21).to_string(), "1e+21");
    assert_eq!(Value::from(0.000_001).to_string(), "0.000001");
    assert_eq!(Value::from(1e-7).to_string(), "1e-7");
    assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
}

#[test]
fn display_nested_object() {
    let v = Value::object([
        ("x", Value::from(5)),
        ("y", Value::array([Value::from(6), Value::from(7)])),
        ("z", Value::object([("w", Value::Null)])),
    ]);
    assert_eq!(v.to_string(), r#"{"x":5,"y":[6,7],"z":{"w":null}}"#);
}

#[test]
fn display_map_and_function() {
    assert_eq!(Value::map_of([]).to_string(), "[object Map]");
    let f = Value::function("id", "x => x", |args| {
        args.first().cloned().unwrap_or(Value::Undefined)
    });
    assert_eq!(f.to_string(), "x => x");
}
