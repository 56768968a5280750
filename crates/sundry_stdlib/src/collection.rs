//! Collection transforms.
//!
//! Sequence arguments are array-like values: strings (one element per
//! character), arrays, arguments, buffers, typed arrays, and plain objects
//! with a valid `length` key. Anything else behaves as an empty sequence.
//! Array-like objects are read one index at a time, so a large `length`
//! costs only the positions a function actually returns.
//! Inputs are never modified; every function returns fresh containers.

use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::Arc;

use sundry_foundation::number::number_bits;
use sundry_foundation::{Error, LtMap, LtSet, Path, Result, Segment, Tag, Value};
use tracing::debug;

use crate::coerce::{property_key, to_string};
use crate::predicates::is_array_like;

// =============================================================================
// Element Access
// =============================================================================

/// Number of positions of an array-like value; 0 for anything else.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sequence_length(value: &Value) -> usize {
    if value.tag().has_intrinsic_length() {
        return value.length().unwrap_or(0);
    }
    if !is_array_like(value) {
        return 0;
    }
    value
        .property("length")
        .and_then(|len| len.as_number())
        .map_or(0, |len| len as usize)
}

/// Elements of an array-like value at the positions in `range`.
fn elements_in(value: &Value, range: Range<usize>) -> Vec<Value> {
    if value.tag().has_intrinsic_length() {
        return value
            .to_elements()
            .get(range)
            .map(<[Value]>::to_vec)
            .unwrap_or_default();
    }
    range
        .map(|i| value.index(i).unwrap_or(Value::Undefined))
        .collect()
}

/// Lazily yields the positional elements of an array-like value.
fn elements(value: &Value) -> Box<dyn Iterator<Item = Value> + '_> {
    if value.tag().has_intrinsic_length() {
        return Box::new(value.to_elements().into_iter());
    }
    Box::new(
        (0..sequence_length(value)).map(move |i| value.index(i).unwrap_or(Value::Undefined)),
    )
}

/// Values visited by grouping: the own values of a plain object, or the
/// elements of any other array-like value.
fn iteration_values(value: &Value) -> Box<dyn Iterator<Item = Value> + '_> {
    match value {
        Value::Object(record) => Box::new(record.values().cloned()),
        other => elements(other),
    }
}

/// Hashes and compares a value under [`Value::same_value_zero`].
#[derive(Clone)]
struct SameValueZeroKey(Value);

impl PartialEq for SameValueZeroKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_value_zero(&other.0)
    }
}

impl Eq for SameValueZeroKey {}

impl Hash for SameValueZeroKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            // -0 + 0 is +0, so both zeros share a bucket.
            Value::Number(n) => number_bits(n + 0.0).hash(state),
            primitive @ (Value::Undefined | Value::Null | Value::Bool(_) | Value::String(_)) => {
                primitive.hash(state);
            }
            reference => reference.tag().hash(state),
        }
    }
}

/// Collection: keys - own enumerable keys, as strings.
///
/// Array-like kinds list their indices; plain objects list their own keys
/// in insertion order. Every other kind has no keys.
#[must_use]
pub fn keys(value: &Value) -> Vec<String> {
    match value.tag() {
        Tag::String | Tag::Array | Tag::Arguments | Tag::Buffer | Tag::TypedArray(_) => {
            (0..value.length().unwrap_or(0)).map(|i| i.to_string()).collect()
        }
        Tag::Object => value
            .as_object()
            .map(|record| record.keys().map(ToString::to_string).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Collection: map - applies `f(element, index, collection)` to every
/// element of an array-like collection.
pub fn map<F>(collection: &Value, mut f: F) -> Vec<Value>
where
    F: FnMut(&Value, usize, &Value) -> Value,
{
    elements(collection)
        .enumerate()
        .map(|(i, element)| f(&element, i, collection))
        .collect()
}

/// Collection: map with a function value as the iteratee.
///
/// # Errors
///
/// Returns [`ErrorKind::NotCallable`](sundry_foundation::ErrorKind::NotCallable)
/// if `iteratee` is not a function.
pub fn map_with(collection: &Value, iteratee: &Value) -> Result<Vec<Value>> {
    let func = iteratee
        .as_function()
        .ok_or_else(|| Error::not_callable(iteratee.tag()))?;
    Ok(map(collection, |element, i, whole| {
        func.call(&[element.clone(), Value::from(i), whole.clone()])
    }))
}

// =============================================================================
// Slicing
// =============================================================================

/// Resolves a possibly negative offset against `len`, clamped to `[0, len]`.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn resolve_offset(offset: i64, len: usize) -> usize {
    let len_i = len as i64;
    let resolved = if offset < 0 {
        len_i.saturating_add(offset)
    } else {
        offset
    };
    resolved.clamp(0, len_i) as usize
}

/// Collection: slice - elements from `start` up to, not including, `end`.
///
/// Negative offsets count back from the end. `start` defaults to 0 and `end`
/// to the length.
#[must_use]
pub fn slice(array: &Value, start: Option<i64>, end: Option<i64>) -> Vec<Value> {
    let len = sequence_length(array);
    let start = resolve_offset(start.unwrap_or(0), len);
    let end = end.map_or(len, |end| resolve_offset(end, len));
    if start >= end {
        return Vec::new();
    }
    elements_in(array, start..end)
}

/// Collection: chunk - consecutive groups of `size` elements (default 1);
/// the last group holds the remainder.
#[must_use]
pub fn chunk(array: &Value, size: Option<i64>) -> Vec<Vec<Value>> {
    let size = size.unwrap_or(1);
    let Ok(size) = usize::try_from(size) else {
        return Vec::new();
    };
    if size == 0 {
        return Vec::new();
    }
    elements(array)
        .collect::<Vec<_>>()
        .chunks(size)
        .map(<[Value]>::to_vec)
        .collect()
}

/// Collection: drop - all but the first `n` elements (default 1).
#[must_use]
pub fn drop(array: &Value, n: Option<i64>) -> Vec<Value> {
    let n = n.unwrap_or(1).max(0);
    slice(array, Some(n), None)
}

// =============================================================================
// Filtering
// =============================================================================

/// Collection: compact - removes falsy elements.
#[must_use]
pub fn compact(array: &Value) -> Vec<Value> {
    elements(array).filter(Value::is_truthy).collect()
}

/// Collection: difference - elements of `array` found in none of the
/// `exclusions`, compared with [`Value::same_value_zero`].
///
/// The result keeps only the first occurrence of each element.
#[must_use]
pub fn difference(array: &Value, exclusions: &[Value]) -> Vec<Value> {
    let excluded: LtSet<SameValueZeroKey> = exclusions
        .iter()
        .flat_map(elements)
        .map(SameValueZeroKey)
        .collect();
    let mut seen: LtSet<SameValueZeroKey> = LtSet::new();
    let mut result = Vec::new();
    for item in elements(array) {
        let key = SameValueZeroKey(item);
        if !excluded.contains(&key) && !seen.contains(&key) {
            seen = seen.insert(key.clone());
            result.push(key.0);
        }
    }
    result
}

// =============================================================================
// Grouping
// =============================================================================

/// Collection: countBy - counts elements by the key `f` computes for them.
///
/// Plain objects are grouped by their own values, even when they carry a
/// `length` key. Elements whose key is `undefined` are not counted. Keys
/// appear in the order they were first produced.
pub fn count_by<F>(collection: &Value, mut f: F) -> LtMap<Arc<str>, usize>
where
    F: FnMut(&Value) -> Value,
{
    let mut counts: LtMap<Arc<str>, usize> = LtMap::new();
    for element in iteration_values(collection) {
        let key = f(&element);
        if key.is_undefined() {
            continue;
        }
        let key = property_key(&key);
        let count = counts.get(&key).copied().unwrap_or(0);
        counts = counts.insert(key, count + 1);
    }
    counts
}

/// Collection: countBy with a function value as the iteratee.
///
/// # Errors
///
/// Returns [`ErrorKind::NotCallable`](sundry_foundation::ErrorKind::NotCallable)
/// if `iteratee` is not a function.
pub fn count_by_with(collection: &Value, iteratee: &Value) -> Result<LtMap<Arc<str>, usize>> {
    let func = iteratee
        .as_function()
        .ok_or_else(|| Error::not_callable(iteratee.tag()))?;
    Ok(count_by(collection, |element| {
        func.call(std::slice::from_ref(element))
    }))
}

// =============================================================================
// Path Lookup
// =============================================================================

/// Converts a path argument into a [`Path`].
///
/// Strings naming an existing property are used as-is; otherwise they parse
/// as dot/bracket notation, falling back to a single key when they do not
/// parse. Arrays are literal segment lists.
fn to_path(object: &Value, path: &Value) -> Path {
    match path {
        Value::String(text) => {
            if object.property(text).is_some() {
                return Path::single_key(text);
            }
            Path::parse(text).unwrap_or_else(|err| {
                debug!(path = %text, %err, "unparsable path treated as a single key");
                Path::single_key(text)
            })
        }
        Value::Array(segments) => Path::from_segments(
            segments
                .iter()
                .map(|segment| Segment::Key(property_key(segment)))
                .collect(),
        ),
        other => Path::single_key(&to_string(other)),
    }
}

/// Collection: get - the value at `path`, or `default` when it resolves to
/// `undefined`.
#[must_use]
pub fn get(object: &Value, path: &Value, default: Value) -> Value {
    match to_path(object, path).resolve(object) {
        Some(Value::Undefined) | None => default,
        Some(found) => found,
    }
}

/// Collection: at - the values at each path, in order.
///
/// Array arguments are flattened one level, so `["a", ["b", "c"]]` asks for
/// `a` and for the literal segments `b` then `c`. Missing paths give
/// `undefined`.
#[must_use]
pub fn at(object: &Value, paths: &[Value]) -> Vec<Value> {
    paths
        .iter()
        .flat_map(|path| match path {
            Value::Array(inner) => inner.to_vec(),
            other => vec![other.clone()],
        })
        .map(|path| get(object, &path, Value::Undefined))
        .collect()
}
