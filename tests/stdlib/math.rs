//! Integration tests for math functions

use sundry::prelude::*;

fn n(x: f64) -> Value {
    Value::from(x)
}

#[test]
fn add_numbers() {
    assert_eq!(add(&n(3.0), &n(4.0)), n(7.0));
}

#[test]
fn divide_cases() {
    assert_eq!(divide(&n(12.0), &n(3.0)), n(4.0));
    assert_eq!(divide(&n(1.0), &n(0.0)), n(f64::INFINITY));
    assert!(divide(&n(0.0), &n(0.0)).is_nan());
}

#[test]
fn ceil_cases() {
    let cases = [
        (Some(3), 123.456),
        (Some(2), 123.46),
        (Some(1), 123.5),
        (Some(0), 124.0),
        (Some(-1), 130.0),
        (Some(-2), 200.0),
        (Some(-3), 1000.0),
        (None, 124.0),
    ];
    for (precision, expected) in cases {
        assert_eq!(ceil(&n(123.456), precision), expected, "precision {precision:?}");
    }
    assert_eq!(ceil(&n(-123.456), None), -123.0);
}

#[test]
fn floor_and_round_precision() {
    assert_eq!(floor(&n(0.046), Some(2)), 0.04);
    assert_eq!(round(&n(4060.0), Some(-2)), 4100.0);
    assert_eq!(round(&Value::from("4.006"), Some(2)), 4.01);
}

#[test]
fn clamp_cases() {
    let cases = [
        (7.0, 10.0, 25.0, 10.0),
        (13.0, 10.0, 25.0, 13.0),
        (28.0, 10.0, 25.0, 25.0),
        (9.0, 10.0, 10.0, 10.0),
        (11.0, 10.0, 10.0, 10.0),
        (10.0, 10.0, 10.0, 10.0),
    ];
    for (value, lower, upper, expected) in cases {
        assert_eq!(clamp(&n(value), &n(lower), &n(upper)), expected, "clamp({value})");
    }
}
