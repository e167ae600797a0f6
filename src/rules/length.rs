//! Text length rules.

crate::text_rule! {
    /// Passes when a non-empty value has at least `min` characters.
    /// Empty values pass; pair with [`required`](crate::rules::required)
    /// when the field is mandatory.
    pub MinLength { min: usize };
    key "min_length";
    rule(self, text) { text.chars().count() >= self.min }
    fn min_length(min: usize);
}

crate::text_rule! {
    /// Passes when the value has at most `max` characters.
    pub MaxLength { max: usize };
    key "max_length";
    rule(self, text) { text.chars().count() <= self.max }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use crate::schema::FieldDescriptor;
    use serde_json::{Value, json};

    fn field() -> FieldDescriptor {
        FieldDescriptor::new("x")
    }

    #[test]
    fn min_length_counts_chars() {
        let form = json!({});
        let rule = min_length("too short", 3);
        assert!(rule.check(Some(&json!("abc")), &form, &field()).is_ok());
        assert!(rule.check(Some(&json!("héé")), &form, &field()).is_ok());
        assert!(rule.check(Some(&json!("ab")), &form, &field()).is_err());
    }

    #[test]
    fn max_length_counts_chars() {
        let form = json!({});
        let rule = max_length("too long", 3);
        assert!(rule.check(Some(&json!("abc")), &form, &field()).is_ok());
        assert!(rule.check(Some(&json!("abcd")), &form, &field()).is_err());
    }

    #[test]
    fn empty_passes_both() {
        let form = json!({});
        assert!(
            min_length("too short", 3)
                .check(Some(&json!("")), &form, &field())
                .is_ok()
        );
        assert!(
            max_length("too long", 3)
                .check(None, &form, &field())
                .is_ok()
        );
    }

    #[test]
    fn keys_are_stable() {
        assert_eq!(min_length("m", 1).key(), "min_length");
        assert_eq!(max_length("m", 1).key(), "max_length");
    }
}
