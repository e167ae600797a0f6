//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Traits**: [`Rule`], [`BoxedRule`]
//! - **Errors**: [`ValidationError`]
//!
//! # Architecture
//!
//! The engine is built around a few key principles:
//!
//! ## 1. Invalidity is data
//!
//! Rules return `Result<(), ValidationError>`; there is no separate error
//! channel distinct from an invalid result, and nothing in the engine
//! panics on bad input.
//!
//! ## 2. Composition by ordering
//!
//! A field's rules are an ordered list; evaluation short-circuits at the
//! first failure, so earlier rules should be the more fundamental ones
//! (`required` before `email`).
//!
//! ## 3. Cross-field checks without shared state
//!
//! Every rule receives the whole form snapshot alongside its own resolved
//! value, so peer lookups never close over external mutable state.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{BoxedRule, Rule};

/// The outcome of checking one rule or one field.
pub type RuleResult = Result<(), ValidationError>;
