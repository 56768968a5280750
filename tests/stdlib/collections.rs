//! Integration tests for collection functions

use sundry::foundation::MAX_SAFE_INTEGER;
use sundry::prelude::*;

fn nums(values: &[i32]) -> Value {
    Value::array(values.iter().copied().map(Value::from))
}

fn num_vec(values: &[i32]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}

fn people() -> Value {
    Value::array([
        Value::object([("nimi", Value::from("a")), ("x", Value::from(10))]),
        Value::object([("nimi", Value::from("b")), ("x", Value::from(20))]),
        Value::object([("nimi", Value::from("c")), ("x", Value::from(30))]),
        Value::object([("nimi", Value::from("d")), ("x", Value::from(20))]),
    ])
}

// =============================================================================
// at / get
// =============================================================================

#[test]
fn at_mixed_paths() {
    let obj = Value::array([
        Value::from(10),
        Value::from(20),
        Value::object([("x", Value::from(5)), ("y", nums(&[6, 7]))]),
    ]);
    let paths = [
        Value::array([Value::from("2.y[1]"), Value::from("5")]),
        Value::from("1"),
        Value::from("0"),
    ];
    assert_eq!(
        at(&obj, &paths),
        vec![Value::from(7), Value::Undefined, Value::from(20), Value::from(10)]
    );
}

#[test]
fn at_with_no_paths() {
    assert!(at(&nums(&[1]), &[]).is_empty());
}

#[test]
fn get_through_nested_containers() {
    let obj = Value::object([(
        "a",
        Value::array([Value::object([("b", Value::object([("c", Value::from(3))]))])]),
    )]);
    assert_eq!(get(&obj, &Value::from("a[0].b.c"), Value::Undefined), Value::from(3));
    assert_eq!(get(&obj, &Value::from("a[0][\"b\"].c"), Value::Undefined), Value::from(3));
    assert_eq!(get(&obj, &Value::from("a[1].b"), Value::from("x")), Value::from("x"));
    assert_eq!(get(&Value::Null, &Value::from("a"), Value::from(1)), Value::from(1));
}

#[test]
fn get_string_length() {
    let obj = Value::object([("name", Value::from("abc"))]);
    assert_eq!(get(&obj, &Value::from("name.length"), Value::Undefined), Value::from(3));
}

// =============================================================================
// chunk / drop / slice
// =============================================================================

#[test]
fn chunk_cases() {
    let arr = nums(&[10, 20, 30]);
    assert_eq!(
        chunk(&arr, Some(1)),
        vec![num_vec(&[10]), num_vec(&[20]), num_vec(&[30])]
    );
    assert_eq!(chunk(&arr, Some(2)), vec![num_vec(&[10, 20]), num_vec(&[30])]);
    assert_eq!(chunk(&arr, Some(3)), vec![num_vec(&[10, 20, 30])]);
    assert_eq!(chunk(&arr, Some(4)), vec![num_vec(&[10, 20, 30])]);
    assert!(chunk(&nums(&[]), Some(1)).is_empty());
}

#[test]
fn drop_cases() {
    let arr = nums(&[10, 20, 30]);
    let cases = [
        (Some(1), num_vec(&[20, 30])),
        (None, num_vec(&[20, 30])),
        (Some(2), num_vec(&[30])),
        (Some(3), vec![]),
        (Some(4), vec![]),
        (Some(0), num_vec(&[10, 20, 30])),
        (Some(-1), num_vec(&[10, 20, 30])),
    ];
    for (n, expected) in cases {
        assert_eq!(drop(&arr, n), expected, "drop {n:?}");
    }
    assert!(drop(&nums(&[]), Some(1)).is_empty());
}

#[test]
fn drop_leaves_input_untouched() {
    let arr = nums(&[10, 20, 30]);
    let _ = drop(&arr, Some(2));
    assert_eq!(arr, nums(&[10, 20, 30]));
}

#[test]
fn slice_and_drop_with_max_safe_length() {
    let obj = Value::object([("length", Value::from(MAX_SAFE_INTEGER))]);
    assert_eq!(slice(&obj, Some(0), Some(1)), vec![Value::Undefined]);
    assert_eq!(drop(&obj, Some(9_007_199_254_740_990)), vec![Value::Undefined]);
}

#[test]
fn count_by_with_max_safe_length() {
    let obj = Value::object([("length", Value::from(MAX_SAFE_INTEGER))]);
    let counts = count_by(&obj, |_| Value::from("all"));
    assert_eq!(counts.get("all"), Some(&1));
}

#[test]
fn slice_of_string() {
    assert_eq!(
        slice(&Value::from("abcd"), Some(1), Some(-1)),
        vec![Value::from("b"), Value::from("c")]
    );
}

// =============================================================================
// compact / difference
// =============================================================================

#[test]
fn compact_cases() {
    let mixed = Value::array([
        Value::from(10),
        Value::from(20),
        Value::Bool(false),
        Value::Null,
        Value::from(0),
        Value::from(""),
        Value::Undefined,
        Value::from(f64::NAN),
        Value::from(30),
    ]);
    assert_eq!(compact(&mixed), num_vec(&[10, 20, 30]));
    assert_eq!(compact(&nums(&[10, 20, 30])), num_vec(&[10, 20, 30]));
    assert!(compact(&nums(&[])).is_empty());
}

#[test]
fn difference_cases() {
    let exclusions = [nums(&[20, 50, 60]), nums(&[10])];
    assert_eq!(
        difference(&nums(&[10, 20, 30, 40, 50]), &exclusions),
        num_vec(&[30, 40])
    );
    assert_eq!(
        difference(&nums(&[10, 20, 30, 40, 50, 20, 20]), &exclusions),
        num_vec(&[30, 40])
    );
    assert_eq!(difference(&nums(&[10, 20]), &[]), num_vec(&[10, 20]));
}

// =============================================================================
// countBy / keys / map
// =============================================================================

#[test]
fn count_by_property() {
    let counts = count_by(&people(), |el| get(el, &Value::from("x"), Value::Undefined));
    let pairs: Vec<(String, usize)> = counts.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    assert_eq!(
        pairs,
        vec![("10".to_string(), 1), ("20".to_string(), 2), ("30".to_string(), 1)]
    );
}

#[test]
fn count_by_missing_property() {
    let counts = count_by(&people(), |el| get(el, &Value::from("y"), Value::Undefined));
    assert!(counts.is_empty());
}

#[test]
fn count_by_function_value() {
    let first_letter = Value::function("first", "s => s[0]", |args| {
        args.first()
            .and_then(Value::as_str)
            .and_then(|s| s.chars().next())
            .map_or(Value::Undefined, |c| Value::from(c.to_string()))
    });
    let words = Value::array([Value::from("one"), Value::from("two"), Value::from("three")]);
    let counts = count_by_with(&words, &first_letter).unwrap();
    assert_eq!(counts.get("t"), Some(&2));
    assert_eq!(counts.get("o"), Some(&1));
}

#[test]
fn keys_of_arguments() {
    assert_eq!(
        keys(&Value::arguments([Value::from(1), Value::from(2)])),
        vec!["0", "1"]
    );
}

#[test]
fn map_with_rejects_non_function() {
    let err = map_with(&nums(&[1]), &Value::from(3)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotCallable(Tag::Number)));
}
