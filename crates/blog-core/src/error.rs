//! Domain-level error types.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Field-level validation messages, keyed by field name.
///
/// Serializes as a plain `{"field": ["message", ...]}` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_serialize_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.add("title", "This field is required.");
        errors.add("title", "Second message.");
        errors.add("description", "This field may not be blank.");

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "description": ["This field may not be blank."],
                "title": ["This field is required.", "Second message."],
            })
        );
    }

    #[test]
    fn test_empty_field_errors_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.add("topic", "This field is required.");
        assert!(matches!(
            errors.into_result(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_repo_error_becomes_internal() {
        let err: DomainError = RepoError::Query("boom".to_string()).into();
        assert!(matches!(err, DomainError::Internal(msg) if msg.contains("boom")));
    }
}
