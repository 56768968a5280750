//! Core value type for all Sundry data.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::collections::{LtMap, LtSet};
use crate::number::{format_number, number_bits, same_number};
use crate::path::canonical_index;
use crate::types::{Tag, TypedArrayKind};
use crate::{Error, Result};

/// Own enumerable keys of a plain object, in insertion order.
pub type Record = LtMap<Arc<str>, Value>;

/// Core value type for all Sundry data.
///
/// Values are immutable and cheaply cloneable. Reference kinds (everything
/// past `Symbol`) live behind an `Arc`; cloning shares the allocation, and
/// that allocation is the value's identity for [`Value::same_value_zero`].
///
/// `PartialEq` is deep structural equality: numbers compare bitwise except
/// that every NaN equals every NaN, containers compare element-wise, and
/// functions and symbols compare by identity.
#[derive(Clone)]
pub enum Value {
    /// The undefined value (absence of any value).
    Undefined,
    /// The null value (intentional absence).
    Null,
    /// Boolean value.
    Bool(bool),
    /// IEEE-754 double; the only numeric kind.
    Number(f64),
    /// String value.
    String(Arc<str>),
    /// Unique symbol.
    Symbol(Symbol),
    /// Ordered sequence.
    Array(Arc<[Value]>),
    /// Pseudo-array holding the arguments of a call.
    Arguments(Arc<[Value]>),
    /// Plain object.
    Object(Arc<Record>),
    /// Keyed collection.
    Map(Arc<LtMap<Value, Value>>),
    /// Unique-member collection.
    Set(Arc<LtSet<Value>>),
    /// Callable value.
    Function(Function),
    /// Date/time value.
    Date(Arc<Date>),
    /// Byte buffer.
    Buffer(Arc<[u8]>),
    /// Fixed-width numeric array view.
    TypedArray(Arc<TypedArray>),
}

// =============================================================================
// Symbol
// =============================================================================

/// A unique symbol. Two symbols are equal only if they are the same symbol,
/// whatever their descriptions.
#[derive(Clone)]
pub struct Symbol(Arc<SymbolInner>);

struct SymbolInner {
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Creates a fresh symbol.
    #[must_use]
    pub fn new(description: Option<&str>) -> Self {
        Self(Arc::new(SymbolInner {
            description: description.map(Arc::from),
        }))
    }

    /// Returns the description given at creation.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// Returns true if both handles refer to the same symbol.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// =============================================================================
// Function
// =============================================================================

/// Native body of a function value.
pub type NativeBody = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable value: a name, its source text, and a native body.
#[derive(Clone)]
pub struct Function(Arc<FunctionInner>);

struct FunctionInner {
    name: Arc<str>,
    source: Arc<str>,
    body: Box<NativeBody>,
}

impl Function {
    /// Creates a function value.
    pub fn new<F>(name: &str, source: &str, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(FunctionInner {
            name: name.into(),
            source: source.into(),
            body: Box::new(body),
        }))
    }

    /// Returns the function's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the function's source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.0.source
    }

    /// Invokes the native body.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0.body)(args)
    }

    /// Returns true if both handles refer to the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Function {}

impl Hash for Function {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name().is_empty() {
            write!(f, "[Function (anonymous)]")
        } else {
            write!(f, "[Function: {}]", self.name())
        }
    }
}

// =============================================================================
// Date
// =============================================================================

/// A date/time value with millisecond precision, possibly invalid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date(Option<DateTime<Utc>>);

impl Date {
    /// Largest representable distance from the epoch, in milliseconds.
    pub const MAX_MILLIS: f64 = 8.64e15;

    /// Creates a date from milliseconds since the Unix epoch.
    ///
    /// Non-finite or out-of-range inputs produce an invalid date; fractions
    /// are truncated.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_millis(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() > Self::MAX_MILLIS {
            return Self::invalid();
        }
        Self(DateTime::from_timestamp_millis(millis.trunc() as i64))
    }

    /// Wraps a chrono timestamp.
    #[must_use]
    pub const fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(Some(datetime))
    }

    /// Creates an invalid date.
    #[must_use]
    pub const fn invalid() -> Self {
        Self(None)
    }

    /// Returns true unless this is an invalid date.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the underlying timestamp.
    #[must_use]
    pub const fn datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Milliseconds since the epoch, or NaN for an invalid date.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn timestamp_millis(&self) -> f64 {
        self.0
            .map_or(f64::NAN, |datetime| datetime.timestamp_millis() as f64)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(datetime) => write!(
                f,
                "{}",
                datetime.format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
            ),
            None => f.write_str("Invalid Date"),
        }
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => f.write_str("Invalid Date"),
        }
    }
}

// =============================================================================
// TypedArray
// =============================================================================

/// A fixed-width numeric array.
#[derive(Clone)]
pub enum TypedArray {
    /// Signed 8-bit integers.
    Int8(Vec<i8>),
    /// Unsigned 8-bit integers.
    Uint8(Vec<u8>),
    /// Unsigned 8-bit integers, clamped on store.
    Uint8Clamped(Vec<u8>),
    /// Signed 16-bit integers.
    Int16(Vec<i16>),
    /// Unsigned 16-bit integers.
    Uint16(Vec<u16>),
    /// Signed 32-bit integers.
    Int32(Vec<i32>),
    /// Unsigned 32-bit integers.
    Uint32(Vec<u32>),
    /// 32-bit floats.
    Float32(Vec<f32>),
    /// 64-bit floats.
    Float64(Vec<f64>),
}

impl TypedArray {
    /// Builds a typed array of `kind`, converting each number the way a store
    /// into that view would: integers wrap modulo their width, clamped bytes
    /// saturate and round half to even, floats narrow.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_numbers(kind: TypedArrayKind, numbers: &[f64]) -> Self {
        let wrapped = |bits, signed| {
            numbers
                .iter()
                .map(move |n| wrap_integer(*n, bits, signed))
        };
        match kind {
            TypedArrayKind::Int8 => Self::Int8(wrapped(8, true).map(|n| n as i8).collect()),
            TypedArrayKind::Uint8 => Self::Uint8(wrapped(8, false).map(|n| n as u8).collect()),
            TypedArrayKind::Uint8Clamped => Self::Uint8Clamped(
                numbers
                    .iter()
                    .map(|n| {
                        if n.is_nan() {
                            0
                        } else {
                            n.clamp(0.0, 255.0).round_ties_even() as u8
                        }
                    })
                    .collect(),
            ),
            TypedArrayKind::Int16 => Self::Int16(wrapped(16, true).map(|n| n as i16).collect()),
            TypedArrayKind::Uint16 => {
                Self::Uint16(wrapped(16, false).map(|n| n as u16).collect())
            }
            TypedArrayKind::Int32 => Self::Int32(wrapped(32, true).map(|n| n as i32).collect()),
            TypedArrayKind::Uint32 => {
                Self::Uint32(wrapped(32, false).map(|n| n as u32).collect())
            }
            TypedArrayKind::Float32 => Self::Float32(numbers.iter().map(|n| *n as f32).collect()),
            TypedArrayKind::Float64 => Self::Float64(numbers.to_vec()),
        }
    }

    /// Returns the element kind.
    #[must_use]
    pub const fn kind(&self) -> TypedArrayKind {
        match self {
            Self::Int8(_) => TypedArrayKind::Int8,
            Self::Uint8(_) => TypedArrayKind::Uint8,
            Self::Uint8Clamped(_) => TypedArrayKind::Uint8Clamped,
            Self::Int16(_) => TypedArrayKind::Int16,
            Self::Uint16(_) => TypedArrayKind::Uint16,
            Self::Int32(_) => TypedArrayKind::Int32,
            Self::Uint32(_) => TypedArrayKind::Uint32,
            Self::Float32(_) => TypedArrayKind::Float32,
            Self::Float64(_) => TypedArrayKind::Float64,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Int8(v) => v.len(),
            Self::Uint8(v) | Self::Uint8Clamped(v) => v.len(),
            Self::Int16(v) => v.len(),
            Self::Uint16(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Uint32(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
        }
    }

    /// Returns true if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads an element as a number.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            Self::Int8(v) => v.get(index).map(|n| f64::from(*n)),
            Self::Uint8(v) | Self::Uint8Clamped(v) => v.get(index).map(|n| f64::from(*n)),
            Self::Int16(v) => v.get(index).map(|n| f64::from(*n)),
            Self::Uint16(v) => v.get(index).map(|n| f64::from(*n)),
            Self::Int32(v) => v.get(index).map(|n| f64::from(*n)),
            Self::Uint32(v) => v.get(index).map(|n| f64::from(*n)),
            Self::Float32(v) => v.get(index).map(|n| f64::from(*n)),
            Self::Float64(v) => v.get(index).copied(),
        }
    }

    /// Iterates over the elements as numbers.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

/// Integer conversion modulo `2^bits`; signed results land in the two's
/// complement range.
fn wrap_integer(n: f64, bits: i32, signed: bool) -> f64 {
    if !n.is_finite() {
        return 0.0;
    }
    let modulus = 2f64.powi(bits);
    let wrapped = n.trunc().rem_euclid(modulus);
    if signed && wrapped >= modulus / 2.0 {
        wrapped - modulus
    } else {
        wrapped
    }
}

impl PartialEq for TypedArray {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| same_number(a, b))
    }
}

impl Eq for TypedArray {}

impl Hash for TypedArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.len().hash(state);
        for n in self.iter() {
            number_bits(n).hash(state);
        }
    }
}

impl fmt::Debug for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) [", self.kind().name(), self.len())?;
        for (i, n) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", format_number(n))?;
        }
        write!(f, "]")
    }
}

// =============================================================================
// Value
// =============================================================================

impl Value {
    /// Creates an array.
    pub fn array<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// Creates an arguments pseudo-array.
    pub fn arguments<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::Arguments(items.into_iter().collect())
    }

    /// Creates a plain object; later duplicates of a key replace its value.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<Arc<str>>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Object(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Creates a keyed collection.
    pub fn map_of<I: IntoIterator<Item = (Value, Value)>>(entries: I) -> Self {
        Self::Map(Arc::new(entries.into_iter().collect()))
    }

    /// Creates a unique-member collection.
    pub fn set_of<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::Set(Arc::new(items.into_iter().collect()))
    }

    /// Creates a byte buffer.
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Buffer(Arc::from(bytes.into()))
    }

    /// Wraps a typed array.
    #[must_use]
    pub fn typed_array(array: TypedArray) -> Self {
        Self::TypedArray(Arc::new(array))
    }

    /// Wraps a date.
    #[must_use]
    pub fn date(date: Date) -> Self {
        Self::Date(Arc::new(date))
    }

    /// Creates a date from milliseconds since the epoch.
    #[must_use]
    pub fn date_from_millis(millis: f64) -> Self {
        Self::date(Date::from_millis(millis))
    }

    /// Creates a fresh symbol.
    #[must_use]
    pub fn symbol(description: Option<&str>) -> Self {
        Self::Symbol(Symbol::new(description))
    }

    /// Creates a function value.
    pub fn function<F>(name: &str, source: &str, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Function(Function::new(name, source, body))
    }

    /// Returns the classification of this value.
    #[must_use]
    pub fn tag(&self) -> Tag {
        match self {
            Self::Undefined => Tag::Undefined,
            Self::Null => Tag::Null,
            Self::Bool(_) => Tag::Boolean,
            Self::Number(_) => Tag::Number,
            Self::String(_) => Tag::String,
            Self::Symbol(_) => Tag::Symbol,
            Self::Array(_) => Tag::Array,
            Self::Arguments(_) => Tag::Arguments,
            Self::Object(_) => Tag::Object,
            Self::Map(_) => Tag::Map,
            Self::Set(_) => Tag::Set,
            Self::Function(_) => Tag::Function,
            Self::Date(_) => Tag::Date,
            Self::Buffer(_) => Tag::Buffer,
            Self::TypedArray(array) => Tag::TypedArray(array.kind()),
        }
    }

    /// Returns true for `Undefined`.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true for `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for `Undefined` and `Null`.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns true for the NaN number.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_nan())
    }

    /// Returns true if this value is truthy.
    ///
    /// The falsy values are `false`, both zeros, NaN, the empty string,
    /// `null` and `undefined`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(&**s),
            _ => None,
        }
    }

    /// Attempts to extract the elements of an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(&**items),
            _ => None,
        }
    }

    /// Attempts to extract the own keys of a plain object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Self::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Attempts to extract a function.
    #[must_use]
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Built-in length of strings (in characters), arrays, arguments,
    /// buffers and typed arrays.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.chars().count()),
            Self::Array(items) | Self::Arguments(items) => Some(items.len()),
            Self::Buffer(bytes) => Some(bytes.len()),
            Self::TypedArray(array) => Some(array.len()),
            _ => None,
        }
    }

    /// Positional access on kinds with a built-in length.
    ///
    /// String elements are one-character strings; buffer and typed array
    /// elements are numbers.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<Value> {
        match self {
            Self::String(s) => s.chars().nth(index).map(|c| Self::from(c.to_string())),
            Self::Array(items) | Self::Arguments(items) => items.get(index).cloned(),
            Self::Buffer(bytes) => bytes.get(index).map(|b| Self::Number(f64::from(*b))),
            Self::TypedArray(array) => array.get(index).map(Self::Number),
            _ => None,
        }
    }

    /// All positional elements of a kind with a built-in length; empty for
    /// every other kind.
    #[must_use]
    pub fn to_elements(&self) -> Vec<Value> {
        match self {
            Self::String(s) => s.chars().map(|c| Self::from(c.to_string())).collect(),
            Self::Array(items) | Self::Arguments(items) => items.to_vec(),
            Self::Buffer(bytes) => bytes.iter().map(|b| Self::Number(f64::from(*b))).collect(),
            Self::TypedArray(array) => array.iter().map(Self::Number).collect(),
            _ => Vec::new(),
        }
    }

    /// Looks up a named property.
    ///
    /// Objects answer with their own keys; kinds with a built-in length answer
    /// `length` and canonical index keys; maps and sets answer `size`;
    /// functions answer `name`. Returns `None` for a missing property.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn property(&self, key: &str) -> Option<Value> {
        match self {
            Self::Object(record) => record.get(key).cloned(),
            Self::Map(map) if key == "size" => Some(Self::Number(map.len() as f64)),
            Self::Set(set) if key == "size" => Some(Self::Number(set.len() as f64)),
            Self::Function(func) if key == "name" => Some(Self::from(func.name())),
            _ if self.tag().has_intrinsic_length() => {
                if key == "length" {
                    self.length().map(|len| Self::Number(len as f64))
                } else {
                    canonical_index(key).and_then(|index| self.element(index))
                }
            }
            _ => None,
        }
    }

    /// Looks up a positional property.
    #[must_use]
    pub fn index(&self, index: usize) -> Option<Value> {
        if self.tag().has_intrinsic_length() {
            self.element(index)
        } else {
            self.property(&index.to_string())
        }
    }

    /// Identity-aware equality: NaN equals NaN, +0 equals -0, primitives
    /// compare by value, and reference kinds and symbols compare by identity.
    #[must_use]
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a.ptr_eq(b),
            (Self::Array(a), Self::Array(b)) | (Self::Arguments(a), Self::Arguments(b)) => {
                Arc::ptr_eq(a, b)
            }
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Map(a), Self::Map(b)) => Arc::ptr_eq(a, b),
            (Self::Set(a), Self::Set(b)) => Arc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            (Self::Date(a), Self::Date(b)) => Arc::ptr_eq(a, b),
            (Self::Buffer(a), Self::Buffer(b)) => Arc::ptr_eq(a, b),
            (Self::TypedArray(a), Self::TypedArray(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Calls a function value.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotCallable`](crate::ErrorKind::NotCallable) if
    /// this value is not a function.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match self {
            Self::Function(func) => Ok(func.call(args)),
            other => Err(Error::not_callable(other.tag())),
        }
    }
}

// Deep structural equality, the comparison used by tests.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => same_number(*a, *b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Array(a), Self::Array(b)) | (Self::Arguments(a), Self::Arguments(b)) => {
                Arc::ptr_eq(a, b) || a[..] == b[..]
            }
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b) || a == b,
            (Self::Map(a), Self::Map(b)) => Arc::ptr_eq(a, b) || a == b,
            (Self::Set(a), Self::Set(b)) => Arc::ptr_eq(a, b) || a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Buffer(a), Self::Buffer(b)) => a == b,
            (Self::TypedArray(a), Self::TypedArray(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Undefined | Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => number_bits(*n).hash(state),
            Self::String(s) => s.hash(state),
            Self::Symbol(sym) => sym.hash(state),
            Self::Array(items) | Self::Arguments(items) => items.hash(state),
            Self::Object(record) => record.hash(state),
            Self::Map(map) => map.hash(state),
            Self::Set(set) => set.hash(state),
            Self::Function(func) => func.hash(state),
            Self::Date(date) => date.hash(state),
            Self::Buffer(bytes) => bytes.hash(state),
            Self::TypedArray(array) => array.hash(state),
        }
    }
}

/// Number text with the sign of negative zero preserved.
fn signed_number_text(n: f64) -> String {
    if n == 0.0 && n.is_sign_negative() {
        "-0".to_string()
    } else {
        format_number(n)
    }
}

/// Writes a double-quoted string with the usual escapes.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// Structural text used for objects: quoted keys and strings, bracketed
/// sequences, no whitespace.
fn write_structural(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => write_quoted(f, s),
        Value::Array(items) | Value::Arguments(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_structural(f, item)?;
            }
            f.write_str("]")
        }
        Value::Object(record) => {
            f.write_str("{")?;
            for (i, (k, v)) in record.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_quoted(f, k)?;
                f.write_str(":")?;
                write_structural(f, v)?;
            }
            f.write_str("}")
        }
        Value::Buffer(bytes) => {
            f.write_str("[")?;
            for (i, b) in bytes.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{b}")?;
            }
            f.write_str("]")
        }
        Value::TypedArray(array) => {
            f.write_str("[")?;
            for (i, n) in array.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                f.write_str(&signed_number_text(n))?;
            }
            f.write_str("]")
        }
        Value::Date(date) => write_quoted(f, &date.to_string()),
        other => write!(f, "{other}"),
    }
}

/// String conversion.
///
/// Arrays and typed arrays join their elements with commas (nullish elements
/// render empty), plain objects render as structural text, functions render
/// their source, and negative zero keeps its sign.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&signed_number_text(*n)),
            Self::String(s) => f.write_str(s),
            Self::Symbol(sym) => write!(f, "{sym}"),
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::TypedArray(array) => {
                for (i, n) in array.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(&signed_number_text(n))?;
                }
                Ok(())
            }
            Self::Object(_) => write_structural(f, self),
            Self::Arguments(_) | Self::Map(_) | Self::Set(_) => {
                f.write_str(self.tag().object_label())
            }
            Self::Function(func) => f.write_str(func.source()),
            Self::Date(date) => write!(f, "{date}"),
            Self::Buffer(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&signed_number_text(*n)),
            Self::String(s) => write_quoted(f, s),
            Self::Symbol(sym) => write!(f, "{sym:?}"),
            Self::Array(items) => f.debug_list().entries(items.iter()).finish(),
            Self::Arguments(items) => {
                f.write_str("[Arguments] ")?;
                f.debug_list().entries(items.iter()).finish()
            }
            Self::Object(record) => f
                .debug_map()
                .entries(record.iter().map(|(k, v)| (DebugKey(k), v)))
                .finish(),
            Self::Map(map) => {
                write!(f, "Map({}) ", map.len())?;
                f.debug_map().entries(map.iter()).finish()
            }
            Self::Set(set) => {
                write!(f, "Set({}) ", set.len())?;
                f.debug_set().entries(set.iter()).finish()
            }
            Self::Function(func) => write!(f, "{func:?}"),
            Self::Date(date) => write!(f, "{date:?}"),
            Self::Buffer(bytes) => {
                f.write_str("<Buffer")?;
                for b in bytes.iter() {
                    write!(f, " {b:02x}")?;
                }
                f.write_str(">")
            }
            Self::TypedArray(array) => write!(f, "{array:?}"),
        }
    }
}

/// Renders object keys unquoted in debug output.
struct DebugKey<'a>(&'a str);

impl fmt::Debug for DebugKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: usize) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Self::Symbol(sym)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Self::Function(func)
    }
}

impl From<Date> for Value {
    fn from(date: Date) -> Self {
        Self::date(date)
    }
}

impl From<TypedArray> for Value {
    fn from(array: TypedArray) -> Self {
        Self::typed_array(array)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Object(Arc::new(record))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::array(v.into_iter().map(Into::into))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_number()
            .ok_or_else(|| Error::type_mismatch(Tag::Number, value.tag()))
    }
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| Error::type_mismatch(Tag::Boolean, value.tag()))
    }
}

impl TryFrom<&Value> for String {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::type_mismatch(Tag::String, value.tag()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        match self {
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Symbol(sym) => serializer.collect_str(sym),
            Self::Array(items) | Self::Arguments(items) => serializer.collect_seq(items.iter()),
            Self::Object(record) => {
                let mut map = serializer.serialize_map(Some(record.len()))?;
                for (k, v) in record.iter() {
                    map.serialize_entry(&**k, v)?;
                }
                map.end()
            }
            Self::Map(map) => serializer.collect_seq(map.iter()),
            Self::Set(set) => serializer.collect_seq(set.iter()),
            Self::Function(func) => serializer.serialize_str(func.source()),
            Self::Date(date) => match date.datetime() {
                Some(datetime) => serializer.serialize_str(
                    &datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                ),
                None => serializer.serialize_unit(),
            },
            Self::Buffer(bytes) => serializer.serialize_bytes(bytes),
            Self::TypedArray(array) => serializer.collect_seq(array.iter()),
        }
    }
}
