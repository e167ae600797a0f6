//! Dynamic schema builder scenarios: schemas regenerated from the live
//! form shape.

use formcheck::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;

// ============================================================================
// AT LEAST ONE LOCALE
// ============================================================================

/// Both locale fields carry the symmetric either-present rule so either
/// one can show the error.
fn localized_title_schema() -> Schema {
    let message = "Enter the title in at least one language";
    Schema::new()
        .field(FieldDescriptor::new("title.en").rule(either_present(message, "title.zh")))
        .field(FieldDescriptor::new("title.zh").rule(either_present(message, "title.en")))
}

#[test]
fn both_locales_empty_fails_on_both_fields() {
    let form = json!({"title": {"en": "", "zh": ""}});
    let report = localized_title_schema().validate_all(&form);
    assert_eq!(report.len(), 2);
    assert!(report.message_for("title.en").is_some());
    assert!(report.message_for("title.zh").is_some());
}

#[test]
fn one_locale_filled_passes_both_fields() {
    let form = json!({"title": {"en": "Hello", "zh": ""}});
    let report = localized_title_schema().validate_all(&form);
    assert!(report.is_valid());
}

// ============================================================================
// CONDITIONAL REQUIREDNESS
// ============================================================================

/// The link label becomes required only while any link attribute is set.
fn link_schema() -> Schema {
    Schema::new().field(
        FieldDescriptor::new("link.label").rule(require_if_any(
            "Label is required when a link is set",
            ["link.url", "link.target"],
        )),
    )
}

#[test]
fn label_optional_while_link_unset() {
    let form = json!({"link": {"url": "", "target": "", "label": ""}});
    assert!(link_schema().validate_all(&form).is_valid());
}

#[test]
fn label_required_once_any_sibling_is_set() {
    let form = json!({"link": {"url": "/about", "target": "", "label": ""}});
    let report = link_schema().validate_all(&form);
    assert_eq!(
        report.message_for("link.label"),
        Some("Label is required when a link is set")
    );
}

// ============================================================================
// LIST ITEMS: STABLE NAMES, POSITIONAL PATHS, DUPLICATES
// ============================================================================

/// One descriptor per validated attribute per item: names keyed by the
/// item's persistent id, value paths by its current index.
fn highlights_schema(form: &Value) -> Schema {
    let items = form["highlights"].as_array().cloned().unwrap_or_default();

    let counts = Arc::new(dynamic::duplicate_counts(
        items.iter().map(|item| item.get("title")),
    ));

    let mut schema = Schema::new();
    for (index, item) in items.iter().enumerate() {
        let id = item["id"].as_str().unwrap_or_default().to_string();

        schema.push(
            FieldDescriptor::new(dynamic::item_name("highlights", &id, "title"))
                .with_path(dynamic::item_path("highlights", index, "title"))
                .rule(required("Highlight title is required"))
                .rule(not_duplicated(
                    "Duplicate highlight title",
                    Arc::clone(&counts),
                )),
        );
        schema.push(
            FieldDescriptor::new(dynamic::item_name("highlights", &id, "imageUrl"))
                .with_path(dynamic::item_path("highlights", index, "imageUrl"))
                .rule(url_like("Invalid image reference")),
        );
    }
    schema
}

#[test]
fn duplicate_titles_fail_on_every_colliding_item() {
    let form = json!({"highlights": [
        {"id": "h1", "title": "A", "imageUrl": ""},
        {"id": "h2", "title": "a", "imageUrl": ""},
        {"id": "h3", "title": "B", "imageUrl": ""},
    ]});
    let report = highlights_schema(&form).validate_all(&form);

    assert_eq!(
        report.message_for("highlights.h1.title"),
        Some("Duplicate highlight title")
    );
    assert_eq!(
        report.message_for("highlights.h2.title"),
        Some("Duplicate highlight title")
    );
    assert_eq!(report.message_for("highlights.h3.title"), None);
}

#[test]
fn names_stay_stable_across_reorder_while_paths_track_position() {
    let before = json!({"highlights": [
        {"id": "h1", "title": "Pool", "imageUrl": "/img/pool.png"},
        {"id": "h2", "title": "", "imageUrl": "/img/gym.png"},
    ]});
    let report = highlights_schema(&before).validate_all(&before);
    assert_eq!(
        report.message_for("highlights.h2.title"),
        Some("Highlight title is required")
    );

    // Drag h2 to the front; the schema is rebuilt and the same stable
    // name still carries the error even though the index changed.
    let after = json!({"highlights": [
        {"id": "h2", "title": "", "imageUrl": "/img/gym.png"},
        {"id": "h1", "title": "Pool", "imageUrl": "/img/pool.png"},
    ]});
    let report = highlights_schema(&after).validate_all(&after);
    assert_eq!(
        report.message_for("highlights.h2.title"),
        Some("Highlight title is required")
    );
    assert_eq!(report.message_for("highlights.h1.title"), None);
}

#[test]
fn empty_list_builds_an_empty_schema() {
    let form = json!({"highlights": []});
    let schema = highlights_schema(&form);
    assert!(schema.is_empty());
    assert!(schema.validate_all(&form).is_valid());
}

#[test]
fn blank_titles_do_not_collide_with_each_other() {
    let form = json!({"highlights": [
        {"id": "h1", "title": "", "imageUrl": ""},
        {"id": "h2", "title": "", "imageUrl": ""},
    ]});
    let report = highlights_schema(&form).validate_all(&form);
    // Both fail `required`, neither fails `duplicate`.
    assert_eq!(report.error_for("highlights.h1.title").unwrap().code, "required");
    assert_eq!(report.error_for("highlights.h2.title").unwrap().code, "required");
}
