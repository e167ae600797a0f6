//! Touch-tracking validation session.
//!
//! UI-facing state holder pairing two independent axes: which fields the
//! user has interacted with (touched), and each field's last computed
//! error. Render code asks [`TouchSession::field_error`] and shows a
//! message only for touched fields, so errors never appear prematurely.
//!
//! One session per logical form instance: create it on mount, reset it
//! with [`TouchSession::clear_all`] when a different record is loaded,
//! discard it on unmount.

use crate::foundation::{RuleResult, ValidationError};
use crate::schema::Schema;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

// ============================================================================
// FIELD CHECK
// ============================================================================

/// One named validation closure for a [`TouchSession::validate_many`]
/// batch. Callers pre-bind the closure to schema validation of a single
/// field.
pub struct FieldCheck<'a> {
    name: String,
    run: Box<dyn FnOnce() -> RuleResult + 'a>,
}

impl<'a> FieldCheck<'a> {
    /// Creates a named check.
    pub fn new(name: impl Into<String>, run: impl FnOnce() -> RuleResult + 'a) -> Self {
        Self {
            name: name.into(),
            run: Box::new(run),
        }
    }

    /// Returns the field name this check validates.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for FieldCheck<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldCheck")
            .field("name", &self.name)
            .field("run", &"<closure>")
            .finish()
    }
}

// ============================================================================
// TOUCH SESSION
// ============================================================================

/// Tracks touched fields and their last computed errors.
///
/// A field not in the touched set never surfaces its message, even when
/// it is objectively invalid.
///
/// # Examples
///
/// ```
/// use formcheck::session::TouchSession;
/// use formcheck::schema::{FieldDescriptor, Schema};
/// use formcheck::rules::required;
/// use serde_json::json;
///
/// let schema = Schema::new()
///     .field(FieldDescriptor::new("title").rule(required("Title is required")));
/// let form = json!({"title": ""});
///
/// let mut session = TouchSession::new();
/// // Nothing shows before the field is touched.
/// assert_eq!(session.message_for("title"), None);
///
/// // On blur:
/// session.validate_field("title", || schema.validate_field(&form, "title"));
/// assert_eq!(session.message_for("title"), Some("Title is required"));
/// ```
#[derive(Debug, Default)]
pub struct TouchSession {
    touched: HashSet<String>,
    errors: HashMap<String, ValidationError>,
}

impl TouchSession {
    /// Creates a fresh session with nothing touched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates one field, marking it touched (idempotent).
    ///
    /// Stores the failure for later [`field_error`](Self::field_error)
    /// lookups — removing the entry entirely when valid rather than
    /// storing an empty message. Returns whether the field was valid.
    pub fn validate_field(
        &mut self,
        name: &str,
        validate: impl FnOnce() -> RuleResult,
    ) -> bool {
        self.touched.insert(name.to_string());
        match validate() {
            Ok(()) => {
                self.errors.remove(name);
                trace!(field = name, "field validated clean");
                true
            }
            Err(error) => {
                trace!(field = name, code = %error.code, "field validated with error");
                self.errors.insert(name.to_string(), error);
                false
            }
        }
    }

    /// Validates a batch of fields, replacing the whole error map.
    ///
    /// All named fields are marked touched (additive — previously touched
    /// fields stay touched), their checks run in the given order, and the
    /// error map is **replaced** with exactly this batch's failures.
    ///
    /// Replace-not-merge is the compatibility-critical subtlety: a field
    /// touched and invalid before this call, but absent from the batch,
    /// keeps its touched flag yet loses its stored error, so
    /// [`field_error`](Self::field_error) reports nothing for it until it
    /// is validated again. Callers that pass the full field set at submit
    /// time never observe the difference.
    ///
    /// Returns whether every check in the batch passed.
    pub fn validate_many<'a>(
        &mut self,
        checks: impl IntoIterator<Item = FieldCheck<'a>>,
    ) -> bool {
        let mut next = HashMap::new();
        let mut checked = 0usize;
        for check in checks {
            checked += 1;
            self.touched.insert(check.name.clone());
            if let Err(error) = (check.run)() {
                next.insert(check.name, error);
            }
        }
        debug!(
            checked,
            failed = next.len(),
            "batch validation replaced error map"
        );
        self.errors = next;
        self.errors.is_empty()
    }

    /// Validates every field of a schema against a form snapshot.
    ///
    /// Convenience for the submit-time case: equivalent to a
    /// [`validate_many`](Self::validate_many) batch containing one check
    /// per schema field, with the same replace-not-merge semantics.
    pub fn validate_schema(&mut self, schema: &Schema, form: &Value) -> bool {
        self.validate_many(schema.fields().iter().map(|field| {
            FieldCheck::new(field.name(), move || field.check(form))
        }))
    }

    /// Resets both the touched set and the error map — for loading a
    /// different record into the form.
    pub fn clear_all(&mut self) {
        self.touched.clear();
        self.errors.clear();
    }

    /// Returns true when the field has been touched.
    #[must_use]
    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Returns the field's stored error, gated on touch state.
    ///
    /// `None` unless the field is touched and currently invalid.
    #[must_use]
    pub fn field_error(&self, name: &str) -> Option<&ValidationError> {
        if self.touched.contains(name) {
            self.errors.get(name)
        } else {
            None
        }
    }

    /// Returns the field's message, gated on touch state.
    #[must_use]
    pub fn message_for(&self, name: &str) -> Option<&str> {
        self.field_error(name).map(|error| error.message.as_ref())
    }
}

// ============================================================================
// TESTS
// ============================================================================
