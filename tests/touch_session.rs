//! Touch-tracking session lifecycle tests.

use formcheck::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn schema() -> Schema {
    Schema::new()
        .field(FieldDescriptor::new("title").rule(required("Title is required")))
        .field(
            FieldDescriptor::new("contact.email")
                .rule(required("Email is required"))
                .rule(email("Invalid email address")),
        )
}

// ============================================================================
// TOUCH GATING
// ============================================================================

#[test]
fn untouched_invalid_field_shows_no_error() {
    let schema = schema();
    let form = json!({"title": ""});
    let session = TouchSession::new();

    // The field is objectively invalid...
    assert!(schema.validate_field(&form, "title").is_err());
    // ...but nothing surfaces until it is touched.
    assert_eq!(session.message_for("title"), None);
}

#[test]
fn blur_then_fix_then_revalidate() {
    let schema = schema();
    let mut session = TouchSession::new();

    let form = json!({"title": ""});
    let valid = session.validate_field("title", || schema.validate_field(&form, "title"));
    assert!(!valid);
    assert_eq!(session.message_for("title"), Some("Title is required"));

    // The user types a title; the next validation clears the message.
    let form = json!({"title": "Lobby Bar"});
    let valid = session.validate_field("title", || schema.validate_field(&form, "title"));
    assert!(valid);
    assert!(session.is_touched("title"));
    assert_eq!(session.message_for("title"), None);
}

#[test]
fn clear_all_resets_for_a_fresh_record() {
    let schema = schema();
    let form = json!({"title": ""});
    let mut session = TouchSession::new();

    session.validate_field("title", || schema.validate_field(&form, "title"));
    assert_eq!(session.message_for("title"), Some("Title is required"));

    session.clear_all();
    assert!(!session.is_touched("title"));
    assert_eq!(session.message_for("title"), None);
}

// ============================================================================
// SUBMIT-TIME BATCHES
// ============================================================================

#[test]
fn validate_schema_touches_every_field_and_reports() {
    let schema = schema();
    let form = json!({"title": "Lobby", "contact": {"email": "nope"}});
    let mut session = TouchSession::new();

    let all_valid = session.validate_schema(&schema, &form);
    assert!(!all_valid);
    assert!(session.is_touched("title"));
    assert!(session.is_touched("contact.email"));
    assert_eq!(session.message_for("title"), None);
    assert_eq!(
        session.message_for("contact.email"),
        Some("Invalid email address")
    );
}

#[test]
fn replace_not_merge_drops_errors_outside_the_batch() {
    let schema = schema();
    let form = json!({"title": "", "contact": {"email": "ok@example.com"}});
    let mut session = TouchSession::new();

    // Blur marks the title invalid.
    session.validate_field("title", || schema.validate_field(&form, "title"));
    assert_eq!(session.message_for("title"), Some("Title is required"));

    // A later batch that omits the title replaces the whole error map:
    // the title stays touched but its stored error is gone, even though
    // the field is still objectively invalid.
    let batch_valid = session.validate_many([FieldCheck::new("contact.email", || {
        schema.validate_field(&form, "contact.email")
    })]);
    assert!(batch_valid);
    assert!(session.is_touched("title"));
    assert_eq!(session.message_for("title"), None);
}

#[test]
fn batch_keeps_previously_touched_fields_touched() {
    let schema = schema();
    let form = json!({"title": "x", "contact": {"email": "ok@example.com"}});
    let mut session = TouchSession::new();

    session.validate_field("title", || schema.validate_field(&form, "title"));
    session.validate_many([FieldCheck::new("contact.email", || {
        schema.validate_field(&form, "contact.email")
    })]);

    assert!(session.is_touched("title"));
    assert!(session.is_touched("contact.email"));
}

#[test]
fn full_submit_then_field_fix_keeps_other_errors() {
    let schema = schema();
    let form = json!({"title": "", "contact": {"email": ""}});
    let mut session = TouchSession::new();

    session.validate_schema(&schema, &form);
    assert_eq!(session.message_for("title"), Some("Title is required"));
    assert_eq!(session.message_for("contact.email"), Some("Email is required"));

    // Fixing one field via blur only touches that field's entry.
    let form = json!({"title": "Lobby", "contact": {"email": ""}});
    session.validate_field("title", || schema.validate_field(&form, "title"));
    assert_eq!(session.message_for("title"), None);
    assert_eq!(session.message_for("contact.email"), Some("Email is required"));
}
