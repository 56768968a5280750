//! Core types, values, and persistent collections for Sundry.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value type every utility operates on
//! - [`Tag`] - Closed classification of values
//! - [`Path`] - Property paths in dot/bracket notation
//! - [`Error`] - Error types for the fallible edges
//! - Persistent insertion-ordered collections ([`LtMap`], [`LtSet`])
//! - Number text conversion ([`format_number`], [`parse_number`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod collections;
mod error;
pub mod number;
mod path;
mod types;
mod value;

pub use collections::{LtMap, LtSet};
pub use error::{Error, ErrorKind};
pub use number::{MAX_SAFE_INTEGER, format_number, parse_number};
pub use path::{Path, Segment};
pub use types::{Tag, TypedArrayKind};
pub use value::{Date, Function, NativeBody, Record, Symbol, TypedArray, Value};

/// Result type alias using the Sundry error type.
pub type Result<T> = std::result::Result<T, Error>;
