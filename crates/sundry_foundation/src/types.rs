//! Classification tags for values.
//!
//! Every [`Value`](crate::Value) belongs to exactly one [`Tag`]. Functions that
//! need to branch over many shapes classify once and then match on the tag.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed classification of a value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tag {
    /// The undefined value.
    Undefined,
    /// The null value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// IEEE-754 double.
    Number,
    /// Immutable text.
    String,
    /// Unique symbol.
    Symbol,
    /// Ordered sequence.
    Array,
    /// Pseudo-array of call arguments.
    Arguments,
    /// Plain key/value mapping.
    Object,
    /// Keyed collection.
    Map,
    /// Unique-member collection.
    Set,
    /// Callable value.
    Function,
    /// Date/time value.
    Date,
    /// Byte buffer.
    Buffer,
    /// Fixed-width numeric array view.
    TypedArray(TypedArrayKind),
}

/// Element type of a typed array.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypedArrayKind {
    /// Signed 8-bit integers.
    Int8,
    /// Unsigned 8-bit integers.
    Uint8,
    /// Unsigned 8-bit integers, clamped on store.
    Uint8Clamped,
    /// Signed 16-bit integers.
    Int16,
    /// Unsigned 16-bit integers.
    Uint16,
    /// Signed 32-bit integers.
    Int32,
    /// Unsigned 32-bit integers.
    Uint32,
    /// 32-bit floats.
    Float32,
    /// 64-bit floats.
    Float64,
}

impl TypedArrayKind {
    /// All typed array kinds.
    pub const ALL: [Self; 9] = [
        Self::Int8,
        Self::Uint8,
        Self::Uint8Clamped,
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Float32,
        Self::Float64,
    ];

    /// Constructor name of this kind, e.g. `Int16Array`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "Int8Array",
            Self::Uint8 => "Uint8Array",
            Self::Uint8Clamped => "Uint8ClampedArray",
            Self::Int16 => "Int16Array",
            Self::Uint16 => "Uint16Array",
            Self::Int32 => "Int32Array",
            Self::Uint32 => "Uint32Array",
            Self::Float32 => "Float32Array",
            Self::Float64 => "Float64Array",
        }
    }
}

impl Tag {
    /// Returns true for `Undefined` and `Null`.
    #[must_use]
    pub const fn is_nullish(self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns true for value-typed kinds (compared by value, never by identity).
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Undefined
                | Self::Null
                | Self::Boolean
                | Self::Number
                | Self::String
                | Self::Symbol
        )
    }

    /// Returns true for reference kinds (everything that is not a primitive).
    #[must_use]
    pub const fn is_reference(self) -> bool {
        !self.is_primitive()
    }

    /// Returns true if values of this kind can be called.
    #[must_use]
    pub const fn is_callable(self) -> bool {
        matches!(self, Self::Function)
    }

    /// Returns true for kinds that carry a built-in length and positional access.
    ///
    /// Plain objects can still be array-like through a `length` key; that is a
    /// property of the value, not of the kind.
    #[must_use]
    pub const fn has_intrinsic_length(self) -> bool {
        matches!(
            self,
            Self::String | Self::Array | Self::Arguments | Self::Buffer | Self::TypedArray(_)
        )
    }

    /// Returns true for kinds measured by `size` rather than `length`.
    #[must_use]
    pub const fn is_sized_collection(self) -> bool {
        matches!(self, Self::Map | Self::Set)
    }

    /// Lowercase kind name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Array => "array",
            Self::Arguments => "arguments",
            Self::Object => "object",
            Self::Map => "map",
            Self::Set => "set",
            Self::Function => "function",
            Self::Date => "date",
            Self::Buffer => "buffer",
            Self::TypedArray(_) => "typed-array",
        }
    }

    /// Bracketed type label, e.g. `[object Arguments]`.
    #[must_use]
    pub const fn object_label(self) -> &'static str {
        match self {
            Self::Undefined => "[object Undefined]",
            Self::Null => "[object Null]",
            Self::Boolean => "[object Boolean]",
            Self::Number => "[object Number]",
            Self::String => "[object String]",
            Self::Symbol => "[object Symbol]",
            Self::Array => "[object Array]",
            Self::Arguments => "[object Arguments]",
            Self::Object => "[object Object]",
            Self::Map => "[object Map]",
            Self::Set => "[object Set]",
            Self::Function => "[object Function]",
            Self::Date => "[object Date]",
            Self::Buffer => "[object Uint8Array]",
            Self::TypedArray(kind) => match kind {
                TypedArrayKind::Int8 => "[object Int8Array]",
                TypedArrayKind::Uint8 => "[object Uint8Array]",
                TypedArrayKind::Uint8Clamped => "[object Uint8ClampedArray]",
                TypedArrayKind::Int16 => "[object Int16Array]",
                TypedArrayKind::Uint16 => "[object Uint16Array]",
                TypedArrayKind::Int32 => "[object Int32Array]",
                TypedArrayKind::Uint32 => "[object Uint32Array]",
                TypedArrayKind::Float32 => "[object Float32Array]",
                TypedArrayKind::Float64 => "[object Float64Array]",
            },
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypedArray(kind) => write!(f, "typed-array<{kind:?}>"),
            other => f.write_str(other.name()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Debug for TypedArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TypedArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
