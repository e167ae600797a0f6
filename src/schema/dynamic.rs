//! Dynamic schema builder support.
//!
//! A schema is a pure function of the form's current shape: page builders
//! take the live snapshot (or a shape parameter such as "which tabs
//! exist") and return a fresh [`Schema`](crate::schema::Schema). Rebuild
//! on every shape change, memoized on the list's contents — indices in
//! value paths stay correct after reordering while field names, keyed by
//! persistent item id, keep error and touch identity stable.
//!
//! This module holds the reusable halves: list-item naming helpers and
//! the normalized frequency map feeding
//! [`not_duplicated`](crate::rules::not_duplicated).
//!
//! # Building a list schema
//!
//! ```
//! use formcheck::schema::{FieldDescriptor, Schema, dynamic};
//! use formcheck::rules::{not_duplicated, required, url_like};
//! use serde_json::{Value, json};
//! use std::sync::Arc;
//!
//! fn highlights_schema(form: &Value) -> Schema {
//!     let items = form["highlights"].as_array().cloned().unwrap_or_default();
//!
//!     // Frequency map over the whole list first, shared by every item.
//!     let counts = Arc::new(dynamic::duplicate_counts(
//!         items.iter().map(|item| item.get("title")),
//!     ));
//!
//!     let mut schema = Schema::new();
//!     for (index, item) in items.iter().enumerate() {
//!         // Persistent id keeps identity stable across reorders.
//!         let id = item["id"].as_str().unwrap_or_default().to_string();
//!
//!         schema.push(
//!             FieldDescriptor::new(dynamic::item_name("highlights", &id, "title"))
//!                 .with_path(dynamic::item_path("highlights", index, "title"))
//!                 .rule(required("Highlight title is required"))
//!                 .rule(not_duplicated("Duplicate highlight title", Arc::clone(&counts))),
//!         );
//!         schema.push(
//!             FieldDescriptor::new(dynamic::item_name("highlights", &id, "imageUrl"))
//!                 .with_path(dynamic::item_path("highlights", index, "imageUrl"))
//!                 .rule(url_like("Invalid image reference")),
//!         );
//!     }
//!     schema
//! }
//!
//! let form = json!({"highlights": [
//!     {"id": "h1", "title": "Lobby", "imageUrl": "/img/lobby.png"},
//!     {"id": "h2", "title": "lobby", "imageUrl": ""},
//! ]});
//! let report = highlights_schema(&form).validate_all(&form);
//! assert_eq!(report.len(), 2); // both titles collide
//! assert!(report.message_for("highlights.h1.title").is_some());
//! ```

use crate::value::text_of;
use serde_json::Value;
use std::collections::HashMap;

// ============================================================================
// LIST-ITEM IDENTITY
// ============================================================================

/// Builds a stable field name from a list item's persistent id.
///
/// `item_name("highlights", "h1", "title")` is `"highlights.h1.title"` —
/// the name survives reordering because the id does.
#[must_use]
pub fn item_name(prefix: &str, id: &str, attr: &str) -> String {
    format!("{prefix}.{id}.{attr}")
}

/// Builds a positional value path from a list item's current index.
///
/// `item_path("highlights", 2, "title")` is `"highlights.2.title"` — only
/// valid for the schema instance built against the current ordering.
#[must_use]
pub fn item_path(prefix: &str, index: usize, attr: &str) -> String {
    format!("{prefix}.{index}.{attr}")
}

// ============================================================================
// DUPLICATE DETECTION
// ============================================================================

/// Normalizes a value for duplicate comparison: trimmed and case-folded.
#[must_use]
pub fn normalized(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Computes the frequency map of normalized values across a list.
///
/// Empty values (after normalization) are never counted, so blank items
/// cannot collide with each other. Share the result via `Arc` with one
/// [`not_duplicated`](crate::rules::not_duplicated) rule per item.
#[must_use]
pub fn duplicate_counts<'a, I>(values: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    let mut counts = HashMap::new();
    for value in values {
        let key = normalized(&text_of(value));
        if key.is_empty() {
            continue;
        }
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

// ============================================================================
// TESTS
// ============================================================================
