//! Error types for validation failures
//!
//! A validation failure is data, not an exception: every rule reports at
//! most one [`ValidationError`] carrying a stable code (the rule key), a
//! human-readable message, and optional diagnostics.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static rule keys and messages.

use serde::Serialize;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Uses `Cow<'static, str>` for zero-allocation when codes and messages are
/// known at compile time (the common case).
///
/// # Examples
///
/// ## Simple error
///
/// ```rust,ignore
/// use formcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("required", "Title is required");
/// ```
///
/// ## Error with diagnostics
///
/// ```rust,ignore
/// use formcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("one_of", "Unknown status")
///     .with_field("status")
///     .with_param("allowed", "active, archived");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Stable rule key for programmatic handling and tests.
    ///
    /// Examples: "required", "email", "one_of"
    pub code: Cow<'static, str>,

    /// Human-readable error message, supplied by the schema author.
    pub message: Cow<'static, str>,

    /// Name of the field the error is attributed to, once the engine has
    /// tagged it. `None` while the error is still inside a rule.
    pub field: Option<Cow<'static, str>>,

    /// Diagnostic parameters as ordered key-value pairs (typically 0-3).
    ///
    /// Example: `[("allowed", "active, archived"), ("actual", "Active")]`
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new validation error with a rule key and message.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use formcheck::foundation::ValidationError;
    ///
    /// // Static strings — zero allocation:
    /// let error = ValidationError::new("required", "This field is required");
    ///
    /// // Dynamic strings — allocates only when needed:
    /// let error = ValidationError::new("one_of", format!("Must be one of {allowed}"));
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field name this error is attributed to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a diagnostic parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value (for debug surfaces).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
