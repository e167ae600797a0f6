//! Core trait for validation rules
//!
//! This module defines the contract every rule must implement.

use crate::foundation::ValidationError;
use crate::schema::FieldDescriptor;
use serde_json::Value;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The core trait that all validation rules implement.
///
/// A rule is a pure predicate over one resolved field value. It also
/// receives the whole form snapshot so cross-field rules never need to
/// close over external mutable state, and the owning [`FieldDescriptor`]
/// for name-aware diagnostics.
///
/// The trait is object-safe: schemas store rules as [`BoxedRule`] so a
/// field can carry an ordered, heterogeneous rule list.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::foundation::{Rule, ValidationError};
/// use formcheck::schema::FieldDescriptor;
/// use serde_json::Value;
///
/// struct NonNegative {
///     message: &'static str,
/// }
///
/// impl Rule for NonNegative {
///     fn key(&self) -> &str {
///         "non_negative"
///     }
///
///     fn check(
///         &self,
///         value: Option<&Value>,
///         _form: &Value,
///         _field: &FieldDescriptor,
///     ) -> Result<(), ValidationError> {
///         match value.and_then(Value::as_f64) {
///             Some(n) if n < 0.0 => Err(ValidationError::new("non_negative", self.message)),
///             _ => Ok(()),
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Stable identifier for diagnostics and tests.
    ///
    /// Not used for ordering; ordering is the position in the field's
    /// rule list.
    fn key(&self) -> &str;

    /// Checks the resolved value.
    ///
    /// # Arguments
    ///
    /// * `value` - The field's value resolved from the form tree, `None`
    ///   when any intermediate node was missing or `null`
    /// * `form` - The whole form snapshot, for cross-field rules
    /// * `field` - The descriptor this rule is attached to
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value is valid
    /// * `Err(ValidationError)` carrying the message to show the user
    fn check(
        &self,
        value: Option<&Value>,
        form: &Value,
        field: &FieldDescriptor,
    ) -> Result<(), ValidationError>;
}

/// A heap-allocated rule, as stored in a [`FieldDescriptor`]'s rule list.
pub type BoxedRule = Box<dyn Rule>;

impl Rule for BoxedRule {
    fn key(&self) -> &str {
        self.as_ref().key()
    }

    fn check(
        &self,
        value: Option<&Value>,
        form: &Value,
        field: &FieldDescriptor,
    ) -> Result<(), ValidationError> {
        self.as_ref().check(value, form, field)
    }
}

// ============================================================================
// TESTS
// ============================================================================
