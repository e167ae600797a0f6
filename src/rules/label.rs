//! Label-safe character rule.

use std::sync::LazyLock;

// Unicode letters and digits, whitespace, and the punctuation a display
// label legitimately carries. Everything else (control characters, most
// symbols) is rejected.
static LABEL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[\p{L}\p{N}\s&/(),.'-]+$").unwrap());

crate::text_rule! {
    /// Passes when a non-empty value contains only Unicode letters,
    /// digits, whitespace, and the punctuation set `& / ( ) , . ' -`.
    /// Empty values pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::rules::safe_label;
    /// use formcheck::foundation::Rule;
    /// use formcheck::schema::FieldDescriptor;
    /// use serde_json::json;
    ///
    /// let rule = safe_label("Label contains invalid characters");
    /// let form = json!({});
    /// let field = FieldDescriptor::new("name");
    /// assert!(rule.check(Some(&json!("Food & Drink (24/7)")), &form, &field).is_ok());
    /// assert!(rule.check(Some(&json!("<script>")), &form, &field).is_err());
    /// ```
    pub SafeLabel;
    key "safe_label";
    rule(self, text) { LABEL_REGEX.is_match(text) }
    fn safe_label();
}

// ============================================================================
// TESTS
// ============================================================================
