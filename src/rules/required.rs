//! Required-value rule.

use crate::foundation::{Rule, ValidationError};
use crate::schema::FieldDescriptor;
use crate::value::is_present;
use serde_json::Value;
use std::borrow::Cow;

// ============================================================================
// REQUIRED RULE
// ============================================================================

/// Fails when the value's trimmed text form is empty.
///
/// Applies to any value via text coercion: `null`, a missing path,
/// `""`, and whitespace-only strings all fail; numbers and booleans
/// always pass (their display form is non-empty).
///
/// # Examples
///
/// ```
/// use formcheck::rules::required;
/// use formcheck::foundation::Rule;
/// use formcheck::schema::FieldDescriptor;
/// use serde_json::json;
///
/// let rule = required("Title is required");
/// let form = json!({});
/// let field = FieldDescriptor::new("title");
/// assert!(rule.check(Some(&json!("Hello")), &form, &field).is_ok());
/// assert!(rule.check(Some(&json!("   ")), &form, &field).is_err());
/// assert!(rule.check(None, &form, &field).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Required {
    message: Cow<'static, str>,
}

impl Required {
    /// Creates a new `Required` rule with the given message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Rule for Required {
    fn key(&self) -> &str {
        "required"
    }

    fn check(
        &self,
        value: Option<&Value>,
        _form: &Value,
        _field: &FieldDescriptor,
    ) -> Result<(), ValidationError> {
        if is_present(value) {
            Ok(())
        } else {
            Err(ValidationError::new("required", self.message.clone()))
        }
    }
}

/// Creates a [`Required`] rule with the given message.
pub fn required(message: impl Into<Cow<'static, str>>) -> Required {
    Required::new(message)
}

// ============================================================================
// TESTS
// ============================================================================
