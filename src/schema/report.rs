//! Whole-schema validation results.

use crate::foundation::ValidationError;
use serde::Serialize;
use std::fmt;

// ============================================================================
// FIELD FAILURE
// ============================================================================

/// One field's recorded failure: the stable field name plus the first
/// rule error that fired for it.
#[derive(Debug, Clone, Serialize)]
pub struct FieldFailure {
    /// Stable field name (the descriptor's `name`, not its value path).
    pub name: String,
    /// The first failing rule's error.
    pub error: ValidationError,
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// The result of [`Schema::validate_all`](crate::schema::Schema::validate_all).
///
/// Failures are kept in schema order, at most one per field. A report
/// with no failures is valid.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    failures: Vec<FieldFailure>,
}

impl ValidationReport {
    /// Creates an empty (valid) report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Records a field's failure. Engine-internal; callers read reports.
    pub(crate) fn record(&mut self, name: String, error: ValidationError) {
        self.failures.push(FieldFailure { name, error });
    }

    /// Returns true when no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns true when there are no failures (same as [`is_valid`](Self::is_valid)).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns the failures in schema order.
    #[must_use]
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// Returns the messages in schema order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures
            .iter()
            .map(|failure| failure.error.message.as_ref())
    }

    /// Looks up a field's error by name.
    #[must_use]
    pub fn error_for(&self, name: &str) -> Option<&ValidationError> {
        self.failures
            .iter()
            .find(|failure| failure.name == name)
            .map(|failure| &failure.error)
    }

    /// Looks up a field's message by name.
    #[must_use]
    pub fn message_for(&self, name: &str) -> Option<&str> {
        self.error_for(name).map(|error| error.message.as_ref())
    }

    /// Converts the report to a JSON value (for debug surfaces).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "Validation passed");
        }
        writeln!(f, "Validation failed with {} error(s):", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure.error)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
