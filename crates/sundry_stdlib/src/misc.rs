//! Defaults, array casting, and identity comparison.

use sundry_foundation::Value;

/// Returns true for the values a default replaces: `null`, `undefined`, NaN.
fn needs_default(value: &Value) -> bool {
    value.is_nullish() || value.is_nan()
}

/// Misc: castArray - wraps a value in an array unless it already is one.
///
/// An array comes back as the same allocation. With no value at all the
/// result is an empty array.
#[must_use]
pub fn cast_array(value: Option<&Value>) -> Value {
    match value {
        None => Value::array([]),
        Some(array @ Value::Array(_)) => array.clone(),
        Some(other) => Value::array([other.clone()]),
    }
}

/// Misc: defaultTo
#[must_use]
pub fn default_to(value: &Value, default: &Value) -> Value {
    if needs_default(value) {
        default.clone()
    } else {
        value.clone()
    }
}

/// Misc: defaultToAny - the first of `value` and `defaults` that needs no
/// default, or the last one when all of them do.
#[must_use]
pub fn default_to_any(value: &Value, defaults: &[Value]) -> Value {
    std::iter::once(value)
        .chain(defaults)
        .find(|candidate| !needs_default(candidate))
        .or_else(|| defaults.last())
        .unwrap_or(value)
        .clone()
}

/// Misc: eq - `SameValueZero` comparison.
///
/// NaN equals itself, the two zeros are equal, and reference kinds are equal
/// only to themselves.
#[must_use]
pub fn eq(a: &Value, b: &Value) -> bool {
    a.same_value_zero(b)
}
