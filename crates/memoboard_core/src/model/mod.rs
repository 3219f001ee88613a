//! Memo board domain model.
//!
//! # Responsibility
//! - Define the memo record, capture drafts, editor draft and preferences.
//! - Keep JSON shapes compatible with the persisted storage payloads.
//!
//! # Invariants
//! - Every memo is identified by an id unique within its collection.
//! - Categories, accents and languages are closed sets.

pub mod draft;
pub mod memo;
pub mod preferences;
pub mod template;
