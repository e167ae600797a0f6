//! Canonical text coercion for resolved form values.
//!
//! Text rules all see the same string form of a value: strings pass
//! through unchanged, numbers and booleans use their display form, and
//! everything a form cannot render as text (`null`, missing values,
//! arrays, objects) coerces to the empty string so the `required` gate
//! treats it as absent.

use serde_json::Value;
use std::borrow::Cow;

/// Returns the canonical text form of a resolved value.
///
/// Borrows when the value already is a string; allocates only for the
/// number case.
///
/// # Examples
///
/// ```
/// use formcheck::value::text_of;
/// use serde_json::json;
///
/// assert_eq!(text_of(Some(&json!("hi"))), "hi");
/// assert_eq!(text_of(Some(&json!(7))), "7");
/// assert_eq!(text_of(Some(&json!(null))), "");
/// assert_eq!(text_of(None), "");
/// ```
#[must_use]
pub fn text_of(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Number(n)) => Cow::Owned(n.to_string()),
        Some(Value::Bool(b)) => Cow::Borrowed(if *b { "true" } else { "false" }),
        // Aggregates are not textual; text rules treat them as absent.
        Some(Value::Array(_)) | Some(Value::Object(_)) => Cow::Borrowed(""),
    }
}

/// Returns true when the value has a non-empty text form after trimming.
///
/// This is the emptiness test shared by the `required` rule and every
/// cross-field presence check.
#[must_use]
pub fn is_present(value: Option<&Value>) -> bool {
    !text_of(value).trim().is_empty()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_borrow() {
        let v = json!("hello");
        assert!(matches!(text_of(Some(&v)), Cow::Borrowed("hello")));
    }

    #[test]
    fn numbers_display() {
        assert_eq!(text_of(Some(&json!(42))), "42");
        assert_eq!(text_of(Some(&json!(1.5))), "1.5");
    }

    #[test]
    fn booleans_display() {
        assert_eq!(text_of(Some(&json!(true))), "true");
        assert_eq!(text_of(Some(&json!(false))), "false");
    }

    #[test]
    fn absent_and_null_are_empty() {
        assert_eq!(text_of(None), "");
        assert_eq!(text_of(Some(&Value::Null)), "");
    }

    #[test]
    fn aggregates_are_empty() {
        assert_eq!(text_of(Some(&json!([1, 2]))), "");
        assert_eq!(text_of(Some(&json!({"a": 1}))), "");
    }

    #[test]
    fn presence_trims_whitespace() {
        assert!(is_present(Some(&json!("x"))));
        assert!(is_present(Some(&json!(0))));
        assert!(!is_present(Some(&json!("   "))));
        assert!(!is_present(Some(&json!(""))));
        assert!(!is_present(None));
    }
}
