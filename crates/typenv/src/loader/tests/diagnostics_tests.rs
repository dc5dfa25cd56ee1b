//! Diagnostic ordering and aggregate failure behaviour.

use crate::e;
use crate::loader::{EnvError, FieldFailure, load_env, validate};
use crate::schema::Schema;
use crate::sink::{MemorySink, Severity};

use super::env_of;

fn mixed_schema() -> Schema {
    Schema::new()
        .with("A_MISSING", e::string())
        .with("B_DEFAULT", e::number().with_default(5))
        .with("C_BAD_BOOL", e::boolean())
        .with("D_OPTIONAL", e::string().optional())
        .with("E_BAD_NUM", e::number())
}

#[test]
fn test_warnings_precede_errors_in_field_order() {
    let sink = MemorySink::new();
    let env = env_of(&[("C_BAD_BOOL", "yes"), ("E_BAD_NUM", "x1")]);

    let _ = load_env(&env, &mixed_schema(), &sink);

    let diagnostics = sink.diagnostics();
    let severities: Vec<Severity> = diagnostics.iter().map(|d| d.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Warning,
            Severity::Warning,
            Severity::Error,
            Severity::Error,
            Severity::Error,
        ]
    );
    assert_eq!(
        sink.warnings(),
        vec![
            "variable `B_DEFAULT` not set, using default `5`".to_string(),
            "optional variable `D_OPTIONAL` not set and has no default".to_string(),
        ]
    );
    assert_eq!(
        sink.errors(),
        vec![
            "missing required variable `A_MISSING`".to_string(),
            "invalid boolean for variable `C_BAD_BOOL`: `yes`".to_string(),
            "invalid number for variable `E_BAD_NUM`: `x1`".to_string(),
        ]
    );
}

#[test]
fn test_every_error_field_is_reported_without_fail_fast() {
    let sink = MemorySink::new();
    let env = env_of(&[("C_BAD_BOOL", "yes"), ("E_BAD_NUM", "x1")]);

    let err = load_env(&env, &mixed_schema(), &sink).unwrap_err();

    let keys: Vec<&str> = err.failures().iter().map(FieldFailure::key).collect();
    assert_eq!(keys, vec!["A_MISSING", "C_BAD_BOOL", "E_BAD_NUM"]);
}

#[test]
fn test_failure_messages_match_error_diagnostics() {
    let sink = MemorySink::new();
    let env = env_of(&[("C_BAD_BOOL", "yes"), ("E_BAD_NUM", "x1")]);

    let err = load_env(&env, &mixed_schema(), &sink).unwrap_err();

    let messages: Vec<String> = err.failures().iter().map(ToString::to_string).collect();
    assert_eq!(messages, sink.errors());
}

#[test]
fn test_aggregate_error_message_is_fixed() {
    let sink = MemorySink::new();
    let err = load_env(&env_of(&[]), &Schema::new().with("X", e::number()), &sink).unwrap_err();

    assert!(matches!(err, EnvError::ValidationFailed { .. }));
    assert_eq!(err.to_string(), "Environment variable validation failed");
}

#[test]
fn test_validate_emits_nothing() {
    // validate() has no sink parameter; the outcome messages mirror what load_env would emit.
    let outcomes = validate(&env_of(&[]), &mixed_schema());

    assert_eq!(outcomes.len(), 5);
    assert_eq!(outcomes[0].message, "missing required variable `A_MISSING`");
    assert_eq!(outcomes[0].value, None);
}
