//! # Telehealth Client
//!
//! Keeps a local copy of the provider collection and the computed schedule in
//! sync with the provider service.
//!
//! ## Architecture
//!
//! - **Api**: the [`api::ProviderApi`] seam describing the REST contract
//! - **Http**: the reqwest implementation of that seam
//! - **Client**: [`client::ProviderScheduleClient`], which runs each operation and
//!   applies its outcome to the shared state
//! - **Config**: environment-driven settings
//!
//! The `mock` module exposes a mockall double of the seam for tests.

pub mod api;
pub mod client;
/// Configuration module for client settings
pub mod config;
pub mod error;
pub mod http;

pub mod mock;

pub use api::ProviderApi;
pub use client::ProviderScheduleClient;
pub use http::HttpProviderApi;
