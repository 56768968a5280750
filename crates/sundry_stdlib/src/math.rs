//! Arithmetic and rounding.

use sundry_foundation::{Value, format_number};

use crate::coerce::to_number;

// =============================================================================
// Arithmetic
// =============================================================================

/// Applies a binary operator with the undefined-defaulting rule: both
/// operands undefined gives `default`, one undefined gives the other operand
/// unchanged.
fn math_operation(a: &Value, b: &Value, default: f64, op: impl FnOnce(f64, f64) -> f64) -> Value {
    match (a.is_undefined(), b.is_undefined()) {
        (true, true) => Value::Number(default),
        (false, true) => a.clone(),
        (true, false) => b.clone(),
        (false, false) => Value::Number(op(to_number(a), to_number(b))),
    }
}

/// Math: add
#[must_use]
pub fn add(augend: &Value, addend: &Value) -> Value {
    math_operation(augend, addend, 0.0, |a, b| a + b)
}

/// Math: subtract
#[must_use]
pub fn subtract(minuend: &Value, subtrahend: &Value) -> Value {
    math_operation(minuend, subtrahend, 0.0, |a, b| a - b)
}

/// Math: multiply
#[must_use]
pub fn multiply(multiplier: &Value, multiplicand: &Value) -> Value {
    math_operation(multiplier, multiplicand, 1.0, |a, b| a * b)
}

/// Math: divide - IEEE-754 quotient, so `1 / 0` is infinity and `0 / 0` NaN
#[must_use]
pub fn divide(dividend: &Value, divisor: &Value) -> Value {
    math_operation(dividend, divisor, 1.0, |a, b| a / b)
}

// =============================================================================
// Rounding
// =============================================================================

/// Largest precision magnitude that keeps the decimal shift representable.
const MAX_PRECISION: i64 = 292;

/// Splits number text into mantissa and exponent (`"1.5e+300"` → `("1.5", 300)`).
fn split_exponent(text: &str) -> (&str, i64) {
    match text.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (text, 0),
    }
}

/// Moves the decimal point of `n` by `places` through its text form, which
/// keeps `123.456` from drifting to `12345.599999999999` on the way up.
fn shift(n: f64, places: i64) -> f64 {
    let text = format_number(n);
    let (mantissa, exponent) = split_exponent(&text);
    format!("{mantissa}e{}", exponent + places)
        .parse()
        .unwrap_or(f64::NAN)
}

/// Rounds `value` to `precision` decimal digits with `func`.
fn round_with(value: &Value, precision: Option<i64>, func: fn(f64) -> f64) -> f64 {
    let n = to_number(value);
    let precision = precision
        .unwrap_or(0)
        .clamp(-MAX_PRECISION, MAX_PRECISION);
    if precision == 0 || !n.is_finite() {
        return func(n);
    }
    let shifted = shift(n, precision);
    if !shifted.is_finite() {
        // Already coarser than the requested precision.
        return n;
    }
    shift(func(shifted), -precision)
}

/// Rounds half-way cases toward positive infinity.
fn round_half_up(n: f64) -> f64 {
    let floor = n.floor();
    if n - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Math: ceil - rounds up to `precision` decimal digits (default 0);
/// negative precision rounds to tens, hundreds, ...
#[must_use]
pub fn ceil(value: &Value, precision: Option<i64>) -> f64 {
    round_with(value, precision, f64::ceil)
}

/// Math: floor - rounds down to `precision` decimal digits
#[must_use]
pub fn floor(value: &Value, precision: Option<i64>) -> f64 {
    round_with(value, precision, f64::floor)
}

/// Math: round - rounds to `precision` decimal digits, half-way cases
/// toward positive infinity
#[must_use]
pub fn round(value: &Value, precision: Option<i64>) -> f64 {
    round_with(value, precision, round_half_up)
}

// =============================================================================
// Clamping
// =============================================================================

/// Math: clamp
///
/// NaN bounds count as 0 and a NaN value stays NaN. The lower bound applies
/// first, then the upper bound.
#[must_use]
pub fn clamp(value: &Value, lower: &Value, upper: &Value) -> f64 {
    let n = to_number(value);
    let lower = to_number(lower);
    let upper = to_number(upper);
    let lower = if lower.is_nan() { 0.0 } else { lower };
    let upper = if upper.is_nan() { 0.0 } else { upper };
    if n.is_nan() {
        return n;
    }
    let n = if n < lower { lower } else { n };
    if n > upper { upper } else { n }
}
