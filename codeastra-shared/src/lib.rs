#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

//! Shared building blocks for the CodeAstra clients: models, configuration,
//! and the HTTP client used to create projects.

pub mod client;
pub mod config;
pub mod models;
