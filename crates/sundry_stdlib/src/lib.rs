//! Utility functions over Sundry values.
//!
//! This crate provides the functions organized by category:
//! - Predicate functions (type checks, lengths, emptiness)
//! - Coercion functions (numbers, integers, strings)
//! - String functions (words, case transforms, affix checks)
//! - Collection functions (keys, map, slice, chunk, countBy, at, ...)
//! - Math functions (arithmetic, decimal rounding, clamping)
//! - Misc functions (defaults, array casting, `SameValueZero`)
//!
//! Every function is total over [`Value`](sundry_foundation::Value): out of
//! domain input yields a sentinel (`false`, NaN, an empty result) rather
//! than an error. Only the entry points that take a pattern or a function
//! value return [`Result`](sundry_foundation::Result).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod collection;
pub mod math;
pub mod misc;
pub mod predicates;
pub mod string;

pub use coerce::{property_key, to_finite, to_integer, to_number, to_string};
pub use collection::{
    at, chunk, compact, count_by, count_by_with, difference, drop, get, keys, map, map_with,
    slice,
};
pub use math::{add, ceil, clamp, divide, floor, multiply, round, subtract};
pub use misc::{cast_array, default_to, default_to_any, eq};
pub use predicates::{
    is_arguments, is_array_like, is_array_like_object, is_boolean, is_buffer, is_date, is_empty,
    is_length, is_object, is_object_like, is_symbol, is_typed_array,
};
pub use string::{
    camel_case, capitalize, ends_with, lower_first, starts_with, upper_first, words,
    words_matching, words_with_pattern,
};
