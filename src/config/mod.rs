//! Configuration management for the client
//!
//! This module handles loading client settings from defaults, a TOML file
//! and environment variables.

pub mod loader;
pub mod settings;

pub use loader::{ConfigLoader, default_config_path};
pub use settings::Settings;
