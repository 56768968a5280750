//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Tag, Path, Error, number text, and persistent
//! collections.

mod errors;
mod values;
