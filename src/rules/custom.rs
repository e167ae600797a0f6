//! Caller-supplied predicate rule.

use crate::foundation::{Rule, ValidationError};
use crate::schema::FieldDescriptor;
use serde_json::Value;
use std::borrow::Cow;

// ============================================================================
// CUSTOM RULE
// ============================================================================

/// Wraps a caller-supplied predicate as a rule.
///
/// The escape hatch for cross-field and aggregate checks: the predicate
/// receives the resolved value, the whole form snapshot, and the owning
/// descriptor, and returns `Ok(())` or the failure to record.
///
/// # Examples
///
/// ```
/// use formcheck::rules::custom;
/// use formcheck::foundation::{Rule, ValidationError};
/// use formcheck::schema::FieldDescriptor;
/// use formcheck::{path, value};
/// use serde_json::json;
///
/// // Require an end date once a start date is set.
/// let rule = custom("end_after_start", |value, form, _field| {
///     let start = path::resolve(form, "startDate");
///     if value::is_present(start) && !value::is_present(value) {
///         Err(ValidationError::new("end_after_start", "End date is required"))
///     } else {
///         Ok(())
///     }
/// });
///
/// let form = json!({"startDate": "2024-01-01", "endDate": ""});
/// let field = FieldDescriptor::new("endDate");
/// assert!(rule.check(Some(&json!("")), &form, &field).is_err());
/// ```
pub struct Custom<F> {
    key: Cow<'static, str>,
    predicate: F,
}

impl<F> Custom<F> {
    /// Creates a new `Custom` rule with a stable key and a predicate.
    pub fn new(key: impl Into<Cow<'static, str>>, predicate: F) -> Self {
        Self {
            key: key.into(),
            predicate,
        }
    }
}

impl<F> std::fmt::Debug for Custom<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Custom")
            .field("key", &self.key)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<F> Rule for Custom<F>
where
    F: Fn(Option<&Value>, &Value, &FieldDescriptor) -> Result<(), ValidationError> + Send + Sync,
{
    fn key(&self) -> &str {
        &self.key
    }

    fn check(
        &self,
        value: Option<&Value>,
        form: &Value,
        field: &FieldDescriptor,
    ) -> Result<(), ValidationError> {
        (self.predicate)(value, form, field)
    }
}

/// Creates a [`Custom`] rule from a stable key and a predicate.
pub fn custom<F>(key: impl Into<Cow<'static, str>>, predicate: F) -> Custom<F>
where
    F: Fn(Option<&Value>, &Value, &FieldDescriptor) -> Result<(), ValidationError> + Send + Sync,
{
    Custom::new(key, predicate)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::is_present;
    use serde_json::json;

    #[test]
    fn predicate_sees_value_and_form() {
        let rule = custom("peer_check", |value, form, _field| {
            let peer = crate::path::resolve(form, "peer");
            if is_present(value) || is_present(peer) {
                Ok(())
            } else {
                Err(ValidationError::new("peer_check", "both empty"))
            }
        });

        let field = FieldDescriptor::new("own");
        let both_empty = json!({"own": "", "peer": ""});
        assert!(
            rule.check(Some(&json!("")), &both_empty, &field)
                .is_err()
        );

        let peer_set = json!({"own": "", "peer": "x"});
        assert!(rule.check(Some(&json!("")), &peer_set, &field).is_ok());
    }

    #[test]
    fn predicate_sees_descriptor_name() {
        let rule = custom("named", |_value, _form, field| {
            Err(ValidationError::new("named", format!("field {}", field.name())))
        });
        let field = FieldDescriptor::new("title");
        let err = rule
            .check(None, &json!({}), &field)
            .unwrap_err();
        assert_eq!(err.message, "field title");
    }

    #[test]
    fn key_is_caller_supplied() {
        let rule = custom("my_key", |_, _, _| Ok(()));
        assert_eq!(rule.key(), "my_key");
    }
}
