//! Coercion to numbers and strings.

use std::sync::Arc;

use sundry_foundation::{Tag, Value, parse_number};
use tracing::trace;

// =============================================================================
// Numbers
// =============================================================================

/// Coerces a value to a number.
///
/// Strings parse as numeric literals (malformed text is NaN), booleans
/// become 1 or 0, `null` is 0, dates give their timestamp in milliseconds.
/// `undefined` and every other kind are NaN.
#[must_use]
pub fn to_number(value: &Value) -> f64 {
    match value.tag() {
        Tag::Number => value.as_number().unwrap_or(f64::NAN),
        Tag::String => {
            let text = value.as_str().unwrap_or_default();
            parse_number(text).unwrap_or_else(|| {
                trace!(text, "malformed numeric literal coerced to NaN");
                f64::NAN
            })
        }
        Tag::Boolean => {
            if value.as_bool() == Some(true) {
                1.0
            } else {
                0.0
            }
        }
        Tag::Null => 0.0,
        Tag::Date => match value {
            Value::Date(date) => date.timestamp_millis(),
            _ => f64::NAN,
        },
        Tag::Undefined
        | Tag::Symbol
        | Tag::Array
        | Tag::Arguments
        | Tag::Object
        | Tag::Map
        | Tag::Set
        | Tag::Function
        | Tag::Buffer
        | Tag::TypedArray(_) => f64::NAN,
    }
}

/// Coerces a value to a finite number: infinities saturate to the largest
/// finite magnitude and NaN becomes 0.
#[must_use]
pub fn to_finite(value: &Value) -> f64 {
    let n = to_number(value);
    if n.is_nan() {
        0.0
    } else if n.is_infinite() {
        f64::MAX.copysign(n)
    } else {
        n
    }
}

/// Coerces a value to an integer, truncating [`to_finite`] toward zero.
#[must_use]
pub fn to_integer(value: &Value) -> f64 {
    to_finite(value).trunc()
}

// =============================================================================
// Strings
// =============================================================================

/// Coerces a value to a string.
///
/// `null` becomes the empty string; everything else renders through
/// `Value`'s `Display` form.
#[must_use]
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Key string a value is grouped under: `"null"` for null, otherwise
/// [`to_string`].
#[must_use]
pub fn property_key(value: &Value) -> Arc<str> {
    match value {
        Value::String(s) => Arc::clone(s),
        Value::Null => "null".into(),
        other => to_string(other).into(),
    }
}
