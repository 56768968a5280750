//! Integration tests for Error types
//!
//! Tests error construction, display, and the operations that produce them.

use sundry_foundation::{Error, ErrorKind, Path, Tag, Value};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(Tag::Number, Tag::String);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(
        format!("{err}"),
        "type mismatch: expected number, got string"
    );
}

#[test]
fn error_invalid_pattern() {
    let err = Error::invalid_pattern("unclosed group");
    assert!(matches!(err.kind, ErrorKind::InvalidPattern(_)));
    assert!(format!("{err}").contains("unclosed group"));
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::not_callable(Tag::Null));
}

// =============================================================================
// Errors From Operations
// =============================================================================

#[test]
fn typed_extraction_reports_kinds() {
    let err = f64::try_from(&Value::from("3")).unwrap_err();
    match err.kind {
        ErrorKind::TypeMismatch { expected, actual } => {
            assert_eq!(expected, Tag::Number);
            assert_eq!(actual, Tag::String);
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn calling_a_non_function() {
    let err = Value::array([]).call(&[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotCallable(Tag::Array)));
}

#[test]
fn path_errors_carry_position() {
    let err = Path::parse("a.b[0").unwrap_err();
    match err.kind {
        ErrorKind::InvalidPath { path, position, .. } => {
            assert_eq!(path, "a.b[0");
            assert_eq!(position, 3);
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}
