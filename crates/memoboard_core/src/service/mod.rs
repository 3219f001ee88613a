//! Board use-case services.
//!
//! # Responsibility
//! - Turn capture, edit, reset, preference and draft flows into typed APIs.
//! - Keep CLI and other front ends decoupled from storage details.

pub mod board_service;
pub mod draft_service;
pub mod preference_service;
