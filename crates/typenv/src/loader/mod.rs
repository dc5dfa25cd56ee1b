//! Environment loading: sources, the validation pass, and the loader builder.
//!
//! Responsibilities:
//! - Read raw values from an `EnvSource` (process environment or in-memory map).
//! - Validate and coerce them against a `Schema`, reporting to a `DiagnosticSink`.
//! - Provide the builder-pattern `EnvLoader` used by applications at startup.
//!
//! Does NOT handle:
//! - `.env` files, nested schemas, or reloading.
//!
//! Invariants / Assumptions:
//! - Loading is synchronous and runs to completion over the whole schema.
//! - Only error-status fields can fail a load; warnings never do.

mod builder;
mod env;
mod error;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::{EnvLoader, load_process_env};
pub use env::{EnvSource, ProcessEnv};
pub use error::{EnvError, FieldFailure};
pub use validate::{
    FieldOutcome, LOADED_MESSAGE, OutcomeKind, Status, load_env, parse_boolean, parse_number,
    validate,
};
