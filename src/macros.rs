//! Macros for creating rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`text_rule!`](crate::text_rule) — Create a required-gated text rule
//!   (struct + `Rule` impl + factory fn)
//!
//! A required-gated text rule coerces the resolved value to its canonical
//! text form and passes automatically when that text is empty after
//! trimming — emptiness is the `required` rule's concern, not the format
//! rule's. Only non-empty text reaches the predicate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck::text_rule;
//!
//! // Message-only rule
//! text_rule! {
//!     /// Passes when the value looks like an asset reference.
//!     pub UrlLike;
//!     key "url_like";
//!     rule(self, text) { text.starts_with('/') || text.starts_with("http") }
//!     fn url_like();
//! }
//!
//! // Rule with parameters
//! text_rule! {
//!     pub MinLength { min: usize };
//!     key "min_length";
//!     rule(self, text) { text.chars().count() >= self.min }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// TEXT RULE MACRO
// ============================================================================

/// Creates a complete required-gated text rule: struct definition, `Rule`
/// implementation, constructor, and factory function.
///
/// The generated struct always carries the caller-supplied `message`
/// (`Cow<'static, str>`); extra parameters become additional fields and
/// trailing factory arguments. `#[derive(Debug, Clone)]` is always applied.
///
/// # Variants
///
/// **Message-only rule**:
/// ```rust,ignore
/// text_rule! {
///     pub Email;
///     key "email";
///     rule(self, text) { EMAIL.is_match(text) }
///     fn email();
/// }
/// ```
///
/// **Rule with parameter fields** (factory takes message first, then the
/// fields in declaration order):
/// ```rust,ignore
/// text_rule! {
///     pub MaxLength { max: usize };
///     key "max_length";
///     rule(self, text) { text.chars().count() <= self.max }
///     fn max_length(max: usize);
/// }
/// ```
#[macro_export]
macro_rules! text_rule {
    // ── Variant 1: message-only rule + factory fn ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        key $key:literal;
        rule($self:ident, $text:ident) $rule:block
        fn $factory:ident();
    ) => {
        $crate::text_rule! {
            $(#[$meta])*
            $vis $name { };
            key $key;
            rule($self, $text) $rule
            fn $factory();
        }
    };

    // ── Variant 2: rule with parameter fields + factory fn ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($fname:ident: $fty:ty),* $(,)? };
        key $key:literal;
        rule($self:ident, $text:ident) $rule:block
        fn $factory:ident($($aname:ident: $aty:ty),*);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            message: ::std::borrow::Cow<'static, str>,
            $($fname: $fty,)*
        }

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "` rule with the given message.")]
            pub fn new(
                message: impl Into<::std::borrow::Cow<'static, str>>,
                $($fname: $fty,)*
            ) -> Self {
                Self {
                    message: message.into(),
                    $($fname,)*
                }
            }
        }

        impl $crate::foundation::Rule for $name {
            fn key(&self) -> &str {
                $key
            }

            fn check(
                &$self,
                value: ::std::option::Option<&::serde_json::Value>,
                _form: &::serde_json::Value,
                _field: &$crate::schema::FieldDescriptor,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                let coerced = $crate::value::text_of(value);
                let $text: &str = coerced.as_ref();
                // Emptiness is the `required` rule's concern.
                if $text.trim().is_empty() {
                    return Ok(());
                }
                if $rule {
                    Ok(())
                } else {
                    Err($crate::foundation::ValidationError::new(
                        $key,
                        $self.message.clone(),
                    ))
                }
            }
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] rule with the given message.")]
        $vis fn $factory(
            message: impl Into<::std::borrow::Cow<'static, str>>,
            $($aname: $aty,)*
        ) -> $name {
            $name::new(message, $($aname,)*)
        }
    };
}
