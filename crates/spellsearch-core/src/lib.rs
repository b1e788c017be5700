//! Shared types for the spellsearch suggestion engine.
//!
//! # Architecture
//!
//! - [`suggestion`] -- Suggestion results, edit costs and compounding modes
//! - [`case`] -- Letter case helpers used for case-only edits and dedup
//! - [`error`] -- Error type shared by the collector and entry points

pub mod case;
pub mod error;
pub mod suggestion;

pub use error::{BoxError, SuggestError};
pub use suggestion::{BASE_COST, CompoundMethod, Cost, Suggestion};
