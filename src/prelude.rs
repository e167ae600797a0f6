//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck::prelude::*;` import that brings in
//! all commonly needed traits, types, and rule factories.
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
//!     );
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{BoxedRule, Rule, RuleResult, ValidationError};

// ============================================================================
// RULES: All built-in rule factories
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

// ============================================================================
// SCHEMA: Engine types and dynamic-builder helpers
// ============================================================================

pub use crate::schema::{FieldDescriptor, FieldFailure, Schema, ValidationReport, dynamic};

// ============================================================================
// SESSION: Touch tracking
// ============================================================================

pub use crate::session::{FieldCheck, TouchSession};

// ============================================================================
// VALUE ACCESS
// ============================================================================

pub use crate::path::resolve;
pub use crate::value::{is_present, text_of};
