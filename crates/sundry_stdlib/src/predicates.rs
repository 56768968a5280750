//! Type predicates.
//!
//! Every predicate is total: any value, including `undefined`, symbols and
//! functions, gets a plain `true` or `false`.

use sundry_foundation::number::is_integer;
use sundry_foundation::{MAX_SAFE_INTEGER, Tag, Value};

// =============================================================================
// Kind Checks
// =============================================================================

/// Predicate: arguments pseudo-array
#[must_use]
pub fn is_arguments(value: &Value) -> bool {
    matches!(value, Value::Arguments(_))
}

/// Predicate: exactly `true` or `false`
#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Predicate: byte buffer
#[must_use]
pub fn is_buffer(value: &Value) -> bool {
    matches!(value, Value::Buffer(_))
}

/// Predicate: date, valid or not
#[must_use]
pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

/// Predicate: symbol
#[must_use]
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// Predicate: typed array of any element kind
#[must_use]
pub fn is_typed_array(value: &Value) -> bool {
    matches!(value, Value::TypedArray(_))
}

/// Predicate: reference kind (objects, arrays, functions, ...); false for
/// `null` and every primitive.
#[must_use]
pub fn is_object(value: &Value) -> bool {
    value.tag().is_reference()
}

/// Predicate: reference kind that cannot be called
#[must_use]
pub fn is_object_like(value: &Value) -> bool {
    let tag = value.tag();
    tag.is_reference() && !tag.is_callable()
}

// =============================================================================
// Length Checks
// =============================================================================

/// Predicate: valid array length, an integer number in `[0, 2^53 - 1]`
#[must_use]
pub fn is_length(value: &Value) -> bool {
    matches!(value, Value::Number(n) if is_length_number(*n))
}

fn is_length_number(n: f64) -> bool {
    is_integer(n) && (0.0..=MAX_SAFE_INTEGER).contains(&n)
}

/// Predicate: has a valid `length` and is neither nullish nor callable.
///
/// Plain objects qualify when they carry a valid `length` key.
#[must_use]
pub fn is_array_like(value: &Value) -> bool {
    let tag = value.tag();
    if tag.is_nullish() || tag.is_callable() {
        return false;
    }
    value
        .property("length")
        .is_some_and(|length| is_length(&length))
}

/// Predicate: array-like and object-like, which rules out strings
#[must_use]
pub fn is_array_like_object(value: &Value) -> bool {
    is_object_like(value) && is_array_like(value)
}

/// Predicate: empty value.
///
/// Nullish values are empty; sequences are empty at length zero, maps and
/// sets at size zero, plain objects without own keys. Every other kind has
/// nothing to enumerate and counts as empty.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value.tag() {
        Tag::Undefined | Tag::Null => true,
        Tag::String | Tag::Array | Tag::Arguments | Tag::Buffer | Tag::TypedArray(_) => {
            value.length() == Some(0)
        }
        Tag::Map | Tag::Set => match value {
            Value::Map(map) => map.is_empty(),
            Value::Set(set) => set.is_empty(),
            _ => true,
        },
        Tag::Object => value.as_object().is_none_or(|record| record.is_empty()),
        Tag::Boolean | Tag::Number | Tag::Symbol | Tag::Function | Tag::Date => true,
    }
}
