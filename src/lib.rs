//! Sundry - value predicates, coercions, and helpers over a dynamic value model
//!
//! This crate re-exports all layers of the Sundry system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: sundry_stdlib      — Predicates, coercion, strings, collections, math
//! Layer 0: sundry_foundation  — Core types (Value, Tag, Path, Error)
//! ```

pub use sundry_foundation as foundation;
pub use sundry_stdlib as stdlib;

/// Common names in one import.
pub mod prelude {
    pub use sundry_foundation::{
        Date, Error, ErrorKind, Function, LtMap, LtSet, Path, Segment, Symbol, Tag,
        TypedArray, TypedArrayKind, Value,
    };
    #[allow(clippy::wildcard_imports)]
    pub use sundry_stdlib::*;
}
