//! Error types for environment loading.
//!
//! Responsibilities:
//! - Define the per-field failure taxonomy (`FieldFailure`).
//! - Define `EnvError`, the error returned by loading and typed access.
//!
//! Invariants:
//! - `EnvError::ValidationFailed` always displays the same fixed message; the
//!   individual causes travel in `failures` and in the emitted diagnostics.
//! - `FieldFailure` messages match the error diagnostics emitted for the field.

use thiserror::Error;

use crate::descriptor::ValueType;

/// Why a single field failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldFailure {
    #[error("missing required variable `{key}`")]
    MissingRequired { key: String },

    #[error("invalid number for variable `{key}`: `{value}`")]
    InvalidNumber { key: String, value: String },

    #[error("invalid boolean for variable `{key}`: `{value}`")]
    InvalidBoolean { key: String, value: String },

    #[error("unknown type for variable `{key}`")]
    UnknownType { key: String },
}

impl FieldFailure {
    /// The variable this failure refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingRequired { key }
            | Self::InvalidNumber { key, .. }
            | Self::InvalidBoolean { key, .. }
            | Self::UnknownType { key } => key,
        }
    }
}

/// Errors produced while loading or reading a typed environment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    /// One or more fields failed validation.
    #[error("Environment variable validation failed")]
    ValidationFailed { failures: Vec<FieldFailure> },

    #[error("Variable `{0}` is not part of the loaded environment")]
    UnknownField(String),

    #[error("Variable `{0}` has no value")]
    MissingValue(String),

    #[error("Variable `{key}` holds a {found} value, not a {expected}")]
    TypeMismatch {
        key: String,
        expected: ValueType,
        found: ValueType,
    },

    #[error("Unknown value type name: {0}")]
    InvalidValueType(String),
}

impl EnvError {
    /// Per-field causes of a validation failure; empty for other variants.
    pub fn failures(&self) -> &[FieldFailure] {
        match self {
            Self::ValidationFailed { failures } => failures,
            _ => &[],
        }
    }
}
