//! Asset-reference (URL-or-path) rule.

// Absolute http(s) URLs plus the relative forms an asset field may hold.
const ALLOWED_PREFIXES: [&str; 5] = ["http://", "https://", "/", "./", "../"];

crate::text_rule! {
    /// Passes when a non-empty value starts with `http://`, `https://`,
    /// `/`, `./`, or `../` — an image or asset reference that may be
    /// absolute or relative. Empty values pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::rules::url_like;
    /// use formcheck::foundation::Rule;
    /// use formcheck::schema::FieldDescriptor;
    /// use serde_json::json;
    ///
    /// let rule = url_like("Invalid image reference");
    /// let form = json!({});
    /// let field = FieldDescriptor::new("imageUrl");
    /// assert!(rule.check(Some(&json!("https://example.com/a.png")), &form, &field).is_ok());
    /// assert!(rule.check(Some(&json!("/images/a.png")), &form, &field).is_ok());
    /// assert!(rule.check(Some(&json!("example.com/a.png")), &form, &field).is_err());
    /// ```
    pub UrlLike;
    key "url_like";
    rule(self, text) {
        ALLOWED_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
    }
    fn url_like();
}

// ============================================================================
// TESTS
// ============================================================================
