//! Built-in rule primitives
//!
//! One file per rule, each exposing a struct plus a snake_case factory
//! function taking the user-facing message first.
//!
//! # Categories
//!
//! - **Presence**: [`required`]
//! - **Text shape**: [`email`], [`phone_loose`], [`url_like`],
//!   [`safe_label`], [`min_length`], [`max_length`]
//! - **Membership**: [`one_of`]
//! - **Cross-field**: [`require_if_any`], [`either_present`],
//!   [`not_duplicated`]
//! - **Escape hatch**: [`custom`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//!
//! let schema = Schema::new()
//!     .field(
//!         FieldDescriptor::new("contact.email")
//!             .rule(required("Email is required"))
//!             .rule(email("Invalid email address")),
//!     )
//!     .field(
//!         FieldDescriptor::new("status")
//!             .rule(one_of("Unknown status", ["active", "archived"])),
//!     );
//! ```
//!
//! Rules compose by position in a field's rule list: the first failing
//! rule wins and later rules are not evaluated, so put the fundamental
//! check first (`required` before `email`).

pub mod cross_field;
pub mod custom;
pub mod email;
pub mod label;
pub mod length;
pub mod one_of;
pub mod phone;
pub mod required;
pub mod url;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use cross_field::{
    EitherPresent, NotDuplicated, RequireIfAny, either_present, not_duplicated, require_if_any,
};
pub use custom::{Custom, custom};
pub use email::{Email, email};
pub use label::{SafeLabel, safe_label};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use one_of::{OneOf, one_of};
pub use phone::{PhoneLoose, phone_loose};
pub use required::{Required, required};
pub use url::{UrlLike, url_like};
