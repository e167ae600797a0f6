//! Enum-membership rule.

use crate::foundation::{Rule, ValidationError};
use crate::schema::FieldDescriptor;
use crate::value::text_of;
use serde_json::Value;
use std::borrow::Cow;

// ============================================================================
// ONE OF RULE
// ============================================================================

/// Fails unless the value's raw text form is a member of a fixed set.
///
/// Membership is a case-sensitive exact match with no trimming: `"Active"`
/// and `"active "` both fail against `["active"]`. There is no empty-pass
/// gate either — an empty string fails unless the set contains it.
///
/// # Examples
///
/// ```
/// use formcheck::rules::one_of;
/// use formcheck::foundation::Rule;
/// use formcheck::schema::FieldDescriptor;
/// use serde_json::json;
///
/// let rule = one_of("Unknown status", ["active", "archived"]);
/// let form = json!({});
/// let field = FieldDescriptor::new("status");
/// assert!(rule.check(Some(&json!("active")), &form, &field).is_ok());
/// assert!(rule.check(Some(&json!("Active")), &form, &field).is_err());
/// assert!(rule.check(Some(&json!("active ")), &form, &field).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OneOf {
    message: Cow<'static, str>,
    allowed: Vec<String>,
}

impl OneOf {
    /// Creates a new `OneOf` rule with the given message and allowed set.
    pub fn new(
        message: impl Into<Cow<'static, str>>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            message: message.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the allowed values.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

impl Rule for OneOf {
    fn key(&self) -> &str {
        "one_of"
    }

    fn check(
        &self,
        value: Option<&Value>,
        _form: &Value,
        _field: &FieldDescriptor,
    ) -> Result<(), ValidationError> {
        let text = text_of(value);
        if self.allowed.iter().any(|allowed| allowed == text.as_ref()) {
            Ok(())
        } else {
            Err(
                ValidationError::new("one_of", self.message.clone())
                    .with_param("allowed", self.allowed.join(", ")),
            )
        }
    }
}

/// Creates a [`OneOf`] rule with the given message and allowed set.
pub fn one_of(
    message: impl Into<Cow<'static, str>>,
    allowed: impl IntoIterator<Item = impl Into<String>>,
) -> OneOf {
    OneOf::new(message, allowed)
}

// ============================================================================
// TESTS
// ============================================================================
