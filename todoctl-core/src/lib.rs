//! todoctl-core: shared configuration and helpers for the todoctl workspace.
//!
//! Keeps the pieces that both the server and the CLI need: TOML
//! configuration with env overrides, and small pure utilities (statement
//! normalization, random-string generation, id/timestamp helpers).

pub mod config;
pub mod util;

pub use config::{AppConfig, ConfigError, DatabaseSection, ServerSection};
