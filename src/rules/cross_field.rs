//! Cross-field rules.
//!
//! These rules decide a field's validity from its peers: conditional
//! requiredness, at-least-one-of-a-pair, and duplicate detection across a
//! list. They are the reusable halves of dynamic schema builders (see
//! [`crate::schema::dynamic`]); every peer lookup goes through the whole
//! form snapshot, never through captured state.

use crate::foundation::{Rule, ValidationError};
use crate::path::resolve;
use crate::schema::FieldDescriptor;
use crate::value::is_present;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// REQUIRE IF ANY
// ============================================================================

/// Makes a field required only while at least one peer is non-empty.
///
/// Fails iff the own value is empty and any of the peer paths resolves to
/// a non-empty value. A field with all-empty peers passes regardless of
/// its own value.
///
/// # Examples
///
/// ```
/// use formcheck::rules::require_if_any;
/// use formcheck::foundation::Rule;
/// use formcheck::schema::FieldDescriptor;
/// use serde_json::json;
///
/// // A link label is mandatory once a link URL is set.
/// let rule = require_if_any("Label is required when a URL is set", ["link.url"]);
/// let field = FieldDescriptor::new("link.label");
///
/// let url_set = json!({"link": {"url": "/about", "label": ""}});
/// assert!(rule.check(Some(&json!("")), &url_set, &field).is_err());
///
/// let url_empty = json!({"link": {"url": "", "label": ""}});
/// assert!(rule.check(Some(&json!("")), &url_empty, &field).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RequireIfAny {
    message: Cow<'static, str>,
    peers: Vec<String>,
}

impl RequireIfAny {
    /// Creates the rule from a message and the peer value paths to watch.
    pub fn new(
        message: impl Into<Cow<'static, str>>,
        peers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            message: message.into(),
            peers: peers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Rule for RequireIfAny {
    fn key(&self) -> &str {
        "required_if"
    }

    fn check(
        &self,
        value: Option<&Value>,
        form: &Value,
        _field: &FieldDescriptor,
    ) -> Result<(), ValidationError> {
        if is_present(value) {
            return Ok(());
        }
        let any_peer_present = self
            .peers
            .iter()
            .any(|peer| is_present(resolve(form, peer)));
        if any_peer_present {
            Err(ValidationError::new("required_if", self.message.clone()))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`RequireIfAny`] rule.
pub fn require_if_any(
    message: impl Into<Cow<'static, str>>,
    peers: impl IntoIterator<Item = impl Into<String>>,
) -> RequireIfAny {
    RequireIfAny::new(message, peers)
}

// ============================================================================
// EITHER PRESENT
// ============================================================================

/// Passes when the own value or its named peer is non-empty.
///
/// Fails only when both are empty. Attach symmetrically to both fields of
/// a pair (each naming the other as peer) so either one can carry the
/// visible error — the "at least one locale" pattern.
///
/// # Examples
///
/// ```
/// use formcheck::rules::either_present;
/// use formcheck::foundation::Rule;
/// use formcheck::schema::FieldDescriptor;
/// use serde_json::json;
///
/// let rule = either_present("Enter the title in at least one language", "title.zh");
/// let field = FieldDescriptor::new("title.en");
///
/// let both_empty = json!({"title": {"en": "", "zh": ""}});
/// assert!(rule.check(Some(&json!("")), &both_empty, &field).is_err());
///
/// let peer_set = json!({"title": {"en": "", "zh": "你好"}});
/// assert!(rule.check(Some(&json!("")), &peer_set, &field).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct EitherPresent {
    message: Cow<'static, str>,
    peer: String,
}

impl EitherPresent {
    /// Creates the rule from a message and the peer's value path.
    pub fn new(message: impl Into<Cow<'static, str>>, peer: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            peer: peer.into(),
        }
    }
}

impl Rule for EitherPresent {
    fn key(&self) -> &str {
        "either_present"
    }

    fn check(
        &self,
        value: Option<&Value>,
        form: &Value,
        _field: &FieldDescriptor,
    ) -> Result<(), ValidationError> {
        if is_present(value) || is_present(resolve(form, &self.peer)) {
            Ok(())
        } else {
            Err(ValidationError::new("either_present", self.message.clone()))
        }
    }
}

/// Creates an [`EitherPresent`] rule.
pub fn either_present(
    message: impl Into<Cow<'static, str>>,
    peer: impl Into<String>,
) -> EitherPresent {
    EitherPresent::new(message, peer)
}

// ============================================================================
// NOT DUPLICATED
// ============================================================================

/// Fails when the own normalized value collides with another list item.
///
/// The builder computes a frequency map of normalized values across the
/// whole list first (see [`crate::schema::dynamic::duplicate_counts`]),
/// then attaches one `NotDuplicated` per item sharing that map. A value
/// whose normalized form occurs more than once fails — on every member of
/// the colliding group simultaneously. Empty values never fail.
///
/// # Examples
///
/// ```
/// use formcheck::rules::not_duplicated;
/// use formcheck::schema::dynamic::duplicate_counts;
/// use formcheck::foundation::Rule;
/// use formcheck::schema::FieldDescriptor;
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let form = json!({"tags": [{"name": "A"}, {"name": "a"}, {"name": "B"}]});
/// let counts = Arc::new(duplicate_counts(
///     (0..3).map(|i| formcheck::path::resolve(&form, &format!("tags.{i}.name"))),
/// ));
///
/// let rule = not_duplicated("Duplicate tag name", Arc::clone(&counts));
/// let field = FieldDescriptor::new("tags.0.name");
/// assert!(rule.check(Some(&json!("A")), &form, &field).is_err());
/// assert!(rule.check(Some(&json!("B")), &form, &field).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct NotDuplicated {
    message: Cow<'static, str>,
    counts: Arc<HashMap<String, usize>>,
}

impl NotDuplicated {
    /// Creates the rule from a message and a shared frequency map of
    /// normalized values.
    pub fn new(
        message: impl Into<Cow<'static, str>>,
        counts: Arc<HashMap<String, usize>>,
    ) -> Self {
        Self {
            message: message.into(),
            counts,
        }
    }
}

impl Rule for NotDuplicated {
    fn key(&self) -> &str {
        "duplicate"
    }

    fn check(
        &self,
        value: Option<&Value>,
        _form: &Value,
        _field: &FieldDescriptor,
    ) -> Result<(), ValidationError> {
        let normalized = crate::schema::dynamic::normalized(&crate::value::text_of(value));
        if normalized.is_empty() {
            return Ok(());
        }
        match self.counts.get(&normalized) {
            Some(&count) if count > 1 => {
                Err(ValidationError::new("duplicate", self.message.clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Creates a [`NotDuplicated`] rule over a shared frequency map.
pub fn not_duplicated(
    message: impl Into<Cow<'static, str>>,
    counts: Arc<HashMap<String, usize>>,
) -> NotDuplicated {
    NotDuplicated::new(message, counts)
}

// ============================================================================
// TESTS
// ============================================================================
