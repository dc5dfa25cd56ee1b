//! Immutable descriptors for a single expected environment variable.
//!
//! Responsibilities:
//! - Define the closed set of supported value types and their typed values.
//! - Tie each descriptor's default value to its declared type at compile time.
//! - Expose a type-erased `FieldSpec` for the loader to inspect.
//!
//! Does NOT handle:
//! - Reading environment variables (see `loader/env.rs`).
//! - Coercing raw strings into typed values (see `loader/validate.rs`).
//!
//! Invariants:
//! - Descriptors are never mutated; `optional()` and `with_default()` return new values.
//! - A descriptor's default always has the Rust type of its kind's value.

use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::loader::EnvError;

/// The value types a variable can be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Number,
    Boolean,
}

impl ValueType {
    /// Lowercase name used in diagnostics and runtime-declared schemas.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            other => Err(EnvError::InvalidValueType(other.to_string())),
        }
    }
}

/// A coerced environment value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl TypedValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::String(_) => ValueType::String,
            Self::Number(_) => ValueType::Number,
            Self::Boolean(_) => ValueType::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            // f64's Display already prints `8080` rather than `8080.0`.
            Self::Number(n) => write!(f, "{}", n),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Str {}
    impl Sealed for super::Num {}
    impl Sealed for super::Bool {}
}

/// Compile-time marker linking a declared type to its Rust value type.
///
/// Implemented only by [`Str`], [`Num`] and [`Bool`].
pub trait EnvKind: sealed::Sealed + Send + Sync + 'static {
    /// The Rust type a variable of this kind resolves to.
    type Value: Clone + fmt::Debug + PartialEq;

    const VALUE_TYPE: ValueType;

    fn into_typed(value: Self::Value) -> TypedValue;

    fn from_typed(value: &TypedValue) -> Option<Self::Value>;
}

/// Marker for string variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Str;

/// Marker for numeric variables, resolved as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Num;

/// Marker for boolean variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool;

impl EnvKind for Str {
    type Value = String;
    const VALUE_TYPE: ValueType = ValueType::String;

    fn into_typed(value: String) -> TypedValue {
        TypedValue::String(value)
    }

    fn from_typed(value: &TypedValue) -> Option<String> {
        value.as_str().map(str::to_string)
    }
}

impl EnvKind for Num {
    type Value = f64;
    const VALUE_TYPE: ValueType = ValueType::Number;

    fn into_typed(value: f64) -> TypedValue {
        TypedValue::Number(value)
    }

    fn from_typed(value: &TypedValue) -> Option<f64> {
        value.as_number()
    }
}

impl EnvKind for Bool {
    type Value = bool;
    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn into_typed(value: bool) -> TypedValue {
        TypedValue::Boolean(value)
    }

    fn from_typed(value: &TypedValue) -> Option<bool> {
        value.as_bool()
    }
}

/// The type a schema field was declared with.
///
/// `Unknown` only arises from runtime declarations by name
/// (see [`Schema::declare`](crate::Schema::declare)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    Known(ValueType),
    Unknown(String),
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(ty) => ty.fmt(f),
            Self::Unknown(name) => f.write_str(name),
        }
    }
}

/// Type-erased view of a descriptor, as consumed by the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub declared: DeclaredType,
    pub required: bool,
    pub default: Option<TypedValue>,
}

/// Describes one expected variable: its type, whether it is required, and its default.
pub struct ConfigDescriptor<K: EnvKind> {
    required: bool,
    default: Option<K::Value>,
    kind: PhantomData<K>,
}

impl<K: EnvKind> ConfigDescriptor<K> {
    /// A required descriptor with no default.
    pub fn new() -> Self {
        Self {
            required: true,
            default: None,
            kind: PhantomData,
        }
    }

    /// Returns a copy of this descriptor marked as not required.
    pub fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    /// Returns a copy of this descriptor with `value` as its default.
    pub fn with_default(self, value: impl Into<K::Value>) -> Self {
        Self {
            default: Some(value.into()),
            ..self
        }
    }

    pub fn value_type(&self) -> ValueType {
        K::VALUE_TYPE
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&K::Value> {
        self.default.as_ref()
    }

    /// Type-erased configuration for inspection by the loader.
    pub fn config(&self) -> FieldSpec {
        FieldSpec {
            declared: DeclaredType::Known(K::VALUE_TYPE),
            required: self.required,
            default: self.default.clone().map(K::into_typed),
        }
    }
}

impl<K: EnvKind> Default for ConfigDescriptor<K> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls: derives would demand `K: Clone`/`K: Debug` on the marker.
impl<K: EnvKind> Clone for ConfigDescriptor<K> {
    fn clone(&self) -> Self {
        Self {
            required: self.required,
            default: self.default.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: EnvKind> fmt::Debug for ConfigDescriptor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigDescriptor")
            .field("value_type", &K::VALUE_TYPE)
            .field("required", &self.required)
            .field("default", &self.default)
            .finish()
    }
}
