//! # Telehealth Core
//!
//! Shared types for the telehealth provider client: the wire models of the
//! provider and schedule resources, the error taxonomy surfaced to the user,
//! the form draft and the [`state::AppState`] that every client operation
//! transitions. Nothing in this crate performs I/O.

/// Error slot messages and the operations they belong to
pub mod errors;
/// Add/edit form buffer and its validation
pub mod form;
/// Wire models for the providers and schedule endpoints
pub mod models;
/// Application state and its transitions
pub mod state;
