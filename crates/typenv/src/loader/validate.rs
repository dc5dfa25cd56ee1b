//! The validation pass: classify every schema field, then decide the overall result.
//!
//! Responsibilities:
//! - Resolve each field to a `FieldOutcome` (value, status, message).
//! - Coerce raw strings into numbers and booleans.
//! - Emit warnings, errors and the final success notice to a `DiagnosticSink`.
//!
//! Does NOT handle:
//! - Choosing the environment source or sink (see `builder.rs`).
//! - Typed access to loaded values (see `loaded.rs`).
//!
//! Invariants:
//! - Every field is evaluated; an error on one field never stops the pass.
//! - An empty string is treated exactly like an unset variable.
//! - All warnings are emitted before any error.
//! - The result is all-or-nothing: a single error-status field fails the load.

use super::env::EnvSource;
use super::error::{EnvError, FieldFailure};
use crate::descriptor::{DeclaredType, FieldSpec, TypedValue, ValueType};
use crate::loaded::LoadedEnv;
use crate::schema::Schema;
use crate::sink::DiagnosticSink;

/// Info diagnostic emitted after a successful load.
pub const LOADED_MESSAGE: &str = "environment variables loaded successfully";

/// Overall classification of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Warning,
    Error,
}

/// What happened to a field, at a finer grain than [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Loaded,
    DefaultUsed,
    MissingOptional,
    MissingRequired,
    InvalidNumber,
    InvalidBoolean,
    UnknownType,
}

impl OutcomeKind {
    pub fn status(&self) -> Status {
        match self {
            Self::Loaded => Status::Success,
            Self::DefaultUsed | Self::MissingOptional => Status::Warning,
            Self::MissingRequired | Self::InvalidNumber | Self::InvalidBoolean | Self::UnknownType => {
                Status::Error
            }
        }
    }
}

/// The result of validating a single schema field.
///
/// For error outcomes caused by a bad value, `value` carries the raw string.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutcome {
    pub key: String,
    pub kind: OutcomeKind,
    pub value: Option<TypedValue>,
    pub message: String,
}

impl FieldOutcome {
    fn new(key: &str, kind: OutcomeKind, value: Option<TypedValue>, message: String) -> Self {
        Self {
            key: key.to_string(),
            kind,
            value,
            message,
        }
    }

    fn failed(key: &str, kind: OutcomeKind, raw: Option<String>, failure: FieldFailure) -> Self {
        Self::new(key, kind, raw.map(TypedValue::String), failure.to_string())
    }

    pub fn status(&self) -> Status {
        self.kind.status()
    }

    /// The failure this outcome represents, if it is an error.
    pub fn failure(&self) -> Option<FieldFailure> {
        let key = self.key.clone();
        let raw = || {
            self.value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default()
        };
        match self.kind {
            OutcomeKind::MissingRequired => Some(FieldFailure::MissingRequired { key }),
            OutcomeKind::InvalidNumber => Some(FieldFailure::InvalidNumber { key, value: raw() }),
            OutcomeKind::InvalidBoolean => {
                Some(FieldFailure::InvalidBoolean { key, value: raw() })
            }
            OutcomeKind::UnknownType => Some(FieldFailure::UnknownType { key }),
            OutcomeKind::Loaded | OutcomeKind::DefaultUsed | OutcomeKind::MissingOptional => None,
        }
    }
}

/// Parse a numeric literal.
///
/// Accepted forms, after trimming surrounding whitespace:
/// - nothing at all, which reads as `0`
/// - unsigned `0x`/`0o`/`0b` integers
/// - `Infinity` with an optional sign
/// - signed decimals with optional fraction and exponent (`-3.5`, `.5`, `1e3`)
///
/// Other spellings of infinity or NaN (`inf`, `NaN`) are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let prefixed = trimmed.get(..2).and_then(|prefix| match prefix {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    });
    if let Some(radix) = prefixed {
        return parse_radix_integer(&trimmed[2..], radix);
    }

    // Restricting the alphabet keeps f64's `inf`/`nan` spellings out.
    let decimal_chars = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E');
    if !trimmed.chars().all(decimal_chars) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn parse_radix_integer(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

/// Parse one of the four accepted boolean literals.
pub fn parse_boolean(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn resolve_field<E: EnvSource + ?Sized>(env: &E, key: &str, spec: &FieldSpec) -> FieldOutcome {
    let raw = env.get(key).filter(|value| !value.is_empty());

    let Some(raw) = raw else {
        return match &spec.default {
            Some(default) => FieldOutcome::new(
                key,
                OutcomeKind::DefaultUsed,
                Some(default.clone()),
                format!("variable `{}` not set, using default `{}`", key, default),
            ),
            None if spec.required => FieldOutcome::failed(
                key,
                OutcomeKind::MissingRequired,
                None,
                FieldFailure::MissingRequired {
                    key: key.to_string(),
                },
            ),
            None => FieldOutcome::new(
                key,
                OutcomeKind::MissingOptional,
                None,
                format!("optional variable `{}` not set and has no default", key),
            ),
        };
    };

    let loaded = |value: TypedValue| {
        FieldOutcome::new(
            key,
            OutcomeKind::Loaded,
            Some(value),
            format!("loaded variable `{}`", key),
        )
    };

    match &spec.declared {
        DeclaredType::Known(ValueType::String) => loaded(TypedValue::String(raw)),
        DeclaredType::Known(ValueType::Number) => match parse_number(&raw) {
            Some(n) => loaded(TypedValue::Number(n)),
            None => FieldOutcome::failed(
                key,
                OutcomeKind::InvalidNumber,
                Some(raw.clone()),
                FieldFailure::InvalidNumber {
                    key: key.to_string(),
                    value: raw,
                },
            ),
        },
        DeclaredType::Known(ValueType::Boolean) => match parse_boolean(&raw) {
            Some(b) => loaded(TypedValue::Boolean(b)),
            None => FieldOutcome::failed(
                key,
                OutcomeKind::InvalidBoolean,
                Some(raw.clone()),
                FieldFailure::InvalidBoolean {
                    key: key.to_string(),
                    value: raw,
                },
            ),
        },
        DeclaredType::Unknown(_) => FieldOutcome::failed(
            key,
            OutcomeKind::UnknownType,
            Some(raw),
            FieldFailure::UnknownType {
                key: key.to_string(),
            },
        ),
    }
}

/// Classify every schema field against `env`, in schema order, without emitting diagnostics.
pub fn validate<E: EnvSource + ?Sized>(env: &E, schema: &Schema) -> Vec<FieldOutcome> {
    schema
        .iter()
        .map(|(key, spec)| {
            let outcome = resolve_field(env, key, spec);
            if outcome.status() == Status::Success {
                tracing::debug!(target: crate::sink::LOG_TARGET, key, "variable loaded");
            }
            outcome
        })
        .collect()
}

/// Validate `schema` against `env`, report diagnostics to `sink`, and build the typed result.
///
/// # Errors
///
/// Returns [`EnvError::ValidationFailed`] if any field is missing, invalid, or of an
/// unknown type. Every failing field is reported to `sink` first.
pub fn load_env<E, S>(env: &E, schema: &Schema, sink: &S) -> Result<LoadedEnv, EnvError>
where
    E: EnvSource + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let outcomes = validate(env, schema);

    let (errors, warnings): (Vec<&FieldOutcome>, Vec<&FieldOutcome>) = outcomes
        .iter()
        .filter(|o| o.status() != Status::Success)
        .partition(|o| o.status() == Status::Error);

    tracing::debug!(
        target: crate::sink::LOG_TARGET,
        fields = outcomes.len(),
        warnings = warnings.len(),
        errors = errors.len(),
        "environment validation pass complete"
    );

    for warning in &warnings {
        sink.warn(&warning.message);
    }

    if !errors.is_empty() {
        for error in &errors {
            sink.error(&error.message);
        }
        let failures = errors.iter().filter_map(|o| o.failure()).collect();
        return Err(EnvError::ValidationFailed { failures });
    }

    let loaded = LoadedEnv::from_outcomes(outcomes);
    sink.info(LOADED_MESSAGE);
    Ok(loaded)
}
