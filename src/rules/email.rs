//! Email shape rule.

use std::sync::LazyLock;

// Local part, @, domain with at least one dot — the `local@domain.tld`
// shape, nothing stricter. Emptiness is handled by the required gate.
static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

crate::text_rule! {
    /// Passes when a non-empty value matches a standard `local@domain.tld`
    /// shape. Empty values pass; pair with [`required`](crate::rules::required)
    /// when the field is mandatory.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::rules::email;
    /// use formcheck::foundation::Rule;
    /// use formcheck::schema::FieldDescriptor;
    /// use serde_json::json;
    ///
    /// let rule = email("Invalid email address");
    /// let form = json!({});
    /// let field = FieldDescriptor::new("contact");
    /// assert!(rule.check(Some(&json!("user@example.com")), &form, &field).is_ok());
    /// assert!(rule.check(Some(&json!("")), &form, &field).is_ok());
    /// assert!(rule.check(Some(&json!("user@example")), &form, &field).is_err());
    /// ```
    pub Email;
    key "email";
    rule(self, text) { EMAIL_REGEX.is_match(text) }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
