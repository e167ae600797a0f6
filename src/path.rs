//! Dotted-path resolution into a JSON form-state tree.
//!
//! A path like `"highlights.2.imageUrl"` walks objects by key and arrays
//! by numeric index. Resolution is tolerant: any missing key, out-of-range
//! index, or non-container intermediate yields `None` instead of an error.

use serde_json::Value;

/// Resolves a dotted path against a JSON tree.
///
/// Splits `path` on `.`, discarding empty segments, then walks the tree
/// one segment at a time. Objects are indexed by key; arrays by numeric
/// string segments (`"2"` is index 2, exactly like an object key lookup —
/// no other special-casing). A `null` or scalar encountered before the
/// last segment stops the walk.
///
/// Returns `None` rather than panicking for every unresolvable path. A
/// path that resolves to an explicit `null` leaf returns `Some(&Null)`;
/// rules coerce both cases to "absent".
///
/// # Examples
///
/// ```
/// use formcheck::path::resolve;
/// use serde_json::json;
///
/// let form = json!({"a": {"b": [{"c": 1}]}});
/// assert_eq!(resolve(&form, "a.b.0.c"), Some(&json!(1)));
/// assert_eq!(resolve(&form, "a.b.5.c"), None);
/// assert_eq!(resolve(&json!({"a": null}), "a.b.c"), None);
/// ```
#[must_use]
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

// ============================================================================
// TESTS
// ============================================================================
