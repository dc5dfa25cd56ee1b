//! Typed, schema-driven environment variable loading.
//!
//! This crate validates a process environment against a declarative schema of
//! string, number, and boolean variables, and returns the coerced values or an
//! aggregate failure after reporting every problem to a diagnostic sink.
//!
//! ```
//! use typenv::{MemorySink, Schema, e, load_env};
//!
//! let mut schema = Schema::new();
//! let port = schema.add("PORT", e::number().with_default(8080));
//! let debug = schema.add("DEBUG", e::boolean().optional());
//! let name = schema.add("NAME", e::string());
//!
//! let sink = MemorySink::new();
//! let env = load_env(&[("NAME", "svc")], &schema, &sink).unwrap();
//!
//! assert_eq!(env.get(&port), Some(8080.0));
//! assert_eq!(env.get(&debug), None);
//! assert_eq!(env.get(&name).as_deref(), Some("svc"));
//! assert_eq!(sink.warnings().len(), 2);
//! ```

pub mod descriptor;
pub mod factory;
mod loaded;
mod loader;
pub mod schema;
pub mod sink;

pub use factory as e;

pub use descriptor::{
    Bool, ConfigDescriptor, DeclaredType, EnvKind, FieldSpec, Num, Str, TypedValue, ValueType,
};
pub use loaded::{FromEnv, LoadedEnv};
pub use loader::{
    EnvError, EnvLoader, EnvSource, FieldFailure, FieldOutcome, LOADED_MESSAGE, OutcomeKind,
    ProcessEnv, Status, load_env, load_process_env, parse_boolean, parse_number, validate,
};
pub use schema::{Field, Schema};
pub use sink::{Diagnostic, DiagnosticSink, MemorySink, Severity, TracingSink};
