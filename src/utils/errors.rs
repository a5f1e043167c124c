//! Error handling for soireo-core
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for soireo-core operations.
///
/// The engine never partially fails: either every capability flag is computed
/// from valid input, or a `MissingField` is returned before any flag. Policy
/// denials are not errors — the engine reports booleans and leaves enforcement
/// to callers.
#[derive(Error, Debug)]
pub enum SoireoError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for soireo-core operations
pub type Result<T> = std::result::Result<T, SoireoError>;

impl SoireoError {
    /// Whether the error stems from malformed or incomplete input
    pub fn is_validation(&self) -> bool {
        match self {
            SoireoError::MissingField { .. } => true,
            SoireoError::Document(_) => true,
            SoireoError::Config(_) => false,
        }
    }
}
