//! # Configuration
//!
//! Client-side settings shared by the CLI and the web front end.

pub mod client;

pub use client::{ClientConfig, ConfigError, DEFAULT_API_BASE_URL};
