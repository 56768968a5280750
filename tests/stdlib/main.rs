//! Integration tests for Layer 1: Stdlib
//!
//! Tests every utility function through the public API with literal
//! input/output cases, compared by structural equality.

mod coerce;
mod collections;
mod math;
mod misc;
mod predicates;
