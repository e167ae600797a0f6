//! Loose phone-number rule.

use std::sync::LazyLock;

// Optional leading +, then 6-30 characters of digits and common
// separators. The digit-count floor guards against punctuation-only
// strings that the character class alone would accept.
static PHONE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+?[-.()\s\d]{6,30}$").unwrap());

const MIN_DIGITS: usize = 6;

crate::text_rule! {
    /// Passes when a non-empty value matches a loose international phone
    /// format: an optional `+`, 6-30 characters drawn from digits and the
    /// separators `- . ( )` and whitespace, with at least 6 actual digits.
    /// Empty values pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::rules::phone_loose;
    /// use formcheck::foundation::Rule;
    /// use formcheck::schema::FieldDescriptor;
    /// use serde_json::json;
    ///
    /// let rule = phone_loose("Invalid phone number");
    /// let form = json!({});
    /// let field = FieldDescriptor::new("phone");
    /// assert!(rule.check(Some(&json!("+1 (415) 555-1234")), &form, &field).is_ok());
    /// assert!(rule.check(Some(&json!("---...---")), &form, &field).is_err());
    /// ```
    pub PhoneLoose;
    key "phone_loose";
    rule(self, text) {
        PHONE_REGEX.is_match(text)
            && text.chars().filter(char::is_ascii_digit).count() >= MIN_DIGITS
    }
    fn phone_loose();
}

// ============================================================================
// TESTS
// ============================================================================
