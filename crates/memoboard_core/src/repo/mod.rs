//! Persistence layer: local key/value storage and typed board payloads.
//!
//! # Responsibility
//! - Define the storage contract the services depend on.
//! - Isolate SQLite and JSON encoding details from board logic.
//!
//! # Invariants
//! - Decoding failures surface as `RepoError::InvalidData` naming the key.

pub mod kv_repo;
pub mod memo_repo;
