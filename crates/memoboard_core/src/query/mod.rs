//! In-memory list queries over the memo collection.
//!
//! # Responsibility
//! - Filter, search and order memos for display.
//! - Derive the counters and tag cloud shown next to the list.

pub mod filter;
pub mod stats;
