//! Schema engine
//!
//! A [`Schema`] is an ordered list of [`FieldDescriptor`]s — what to
//! validate and how. A schema instance is ephemeral: page builders
//! regenerate it whenever the form's shape changes (items added, removed,
//! or reordered; active locale or tab changed), so indices inside value
//! paths stay correct while field names stay stable.
//!
//! # Examples
//!
//! ```
//! use formcheck::schema::{FieldDescriptor, Schema};
//! use formcheck::rules::{email, required};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field(
//!         FieldDescriptor::new("contact.email")
//!             .rule(required("Email is required"))
//!             .rule(email("Invalid email address")),
//!     );
//!
//! let form = json!({"contact": {"email": "nope"}});
//! let report = schema.validate_all(&form);
//! assert!(!report.is_valid());
//! assert_eq!(report.message_for("contact.email"), Some("Invalid email address"));
//! ```

pub mod dynamic;
pub mod report;

pub use report::{FieldFailure, ValidationReport};

use crate::foundation::{BoxedRule, Rule, ValidationError};
use crate::path::resolve;
use serde_json::Value;
use tracing::trace;

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// One schema entry: a stable name, an optional value path, and an
/// ordered rule list.
///
/// `name` is the identity used for error lookup and touch tracking; it
/// must stay stable across schema rebuilds even when the underlying list
/// index changes, which is why dynamic builders key list-item names by
/// item id and use the array index only inside the value path.
pub struct FieldDescriptor {
    name: String,
    value_path: Option<String>,
    rules: Vec<BoxedRule>,
}

impl FieldDescriptor {
    /// Creates a descriptor whose value path defaults to its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_path: None,
            rules: Vec::new(),
        }
    }

    /// Sets an explicit dotted value path into the form tree.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.value_path = Some(path.into());
        self
    }

    /// Appends a rule. Order matters: the first failing rule wins.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the stable field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dotted path used to resolve this field's value,
    /// falling back to the name when none was set.
    #[must_use]
    pub fn value_path(&self) -> &str {
        self.value_path.as_deref().unwrap_or(&self.name)
    }

    /// Returns the ordered rule list.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Resolves this field's value and runs its rules in order,
    /// short-circuiting at the first failure.
    ///
    /// The returned error is tagged with the field name unless a rule
    /// already attributed it elsewhere.
    pub fn check(&self, form: &Value) -> Result<(), ValidationError> {
        let value = resolve(form, self.value_path());
        for rule in &self.rules {
            if let Err(error) = rule.check(value, form, self) {
                let error = if error.field.is_none() {
                    error.with_field(self.name.clone())
                } else {
                    error
                };
                return Err(error);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("value_path", &self.value_path)
            .field("rules", &self.rules.iter().map(|r| r.key()).collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// An ordered list of field descriptors.
///
/// Descriptor names must be unique within one schema instance; the engine
/// does not defend against duplicates (construction-site contract).
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field, fluent style.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a field in place — for loop-driven dynamic builders.
    pub fn push(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Looks up a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the descriptors in schema order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates one named field.
    ///
    /// A name absent from the schema is vacuously valid. Otherwise the
    /// field's value is resolved via its value path and its rules run in
    /// order; the first failure is returned.
    pub fn validate_field(&self, form: &Value, name: &str) -> Result<(), ValidationError> {
        match self.get(name) {
            None => Ok(()),
            Some(field) => field.check(form),
        }
    }

    /// Validates every field in schema order.
    ///
    /// At most one failure is recorded per field (the first failing
    /// rule); the report is produced as a single atomic result.
    #[must_use = "validation result must be checked"]
    pub fn validate_all(&self, form: &Value) -> ValidationReport {
        trace!(fields = self.fields.len(), "validating full schema");
        let mut report = ValidationReport::new();
        for field in &self.fields {
            if let Err(error) = field.check(form) {
                report.record(field.name.clone(), error);
            }
        }
        report
    }
}

impl FromIterator<FieldDescriptor> for Schema {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
