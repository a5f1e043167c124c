//! Configuration management module
//!
//! This module handles loading and validation of the policy-core
//! configuration from TOML files and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{LoggingConfig, PolicyConfig, Settings};
