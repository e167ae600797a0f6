//! # formcheck
//!
//! A declarative, schema-driven validation engine for JSON form state.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field(
//!         FieldDescriptor::new("title")
//!             .rule(required("Title is required"))
//!             .rule(safe_label("Title contains invalid characters")),
//!     )
//!     .field(FieldDescriptor::new("contact.email").rule(email("Invalid email address")));
//!
//! let form = json!({"title": "Lobby Bar", "contact": {"email": "host@example.com"}});
//! assert!(schema.validate_all(&form).is_valid());
//! ```
//!
//! ## How it fits together
//!
//! - A [`Schema`](schema::Schema) is an ordered list of field
//!   descriptors; each descriptor resolves its value out of the form tree
//!   via a dotted [`path`] and runs its rules in order, stopping at the
//!   first failure.
//! - [`rules`] supplies the built-in primitives plus the cross-field
//!   rules that look at sibling fields through the whole form snapshot.
//! - Schemas for variable-length lists or per-locale fields are rebuilt
//!   from the live form shape — see [`schema::dynamic`].
//! - A [`TouchSession`](session::TouchSession) gates error display on
//!   user interaction so messages never show prematurely.
//!
//! ## Creating Rules
//!
//! Use the [`text_rule!`] macro for zero-boilerplate text rules, the
//! [`custom`](rules::custom) factory for one-off predicates, or implement
//! [`Rule`](foundation::Rule) manually for complex cases.

// ValidationError (~200 bytes with its inline params) is the fundamental
// error type for all rules — boxing it would add indirection to every
// validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod foundation;
mod macros;
pub mod path;
pub mod prelude;
pub mod rules;
pub mod schema;
pub mod session;
pub mod value;
