//! Error types for Diptych operations.
//!
//! This module provides the main error type [`DiptychError`]. Malformed
//! diagram text is never an error: parsers skip what they cannot read. Only
//! an unknown engine tag or a snapshot that breaks its contract reach the
//! caller.

use std::io;

use thiserror::Error;

use diptych_core::{GraphError, UnsupportedEngine};

/// The main error type for Diptych operations.
#[derive(Debug, Error)]
pub enum DiptychError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    UnsupportedEngine(#[from] UnsupportedEngine),

    /// A snapshot could not be accepted. The session was left untouched.
    #[error("Invalid snapshot format: {0}")]
    InvalidFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

impl DiptychError {
    /// Create a new `InvalidFormat` error.
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat(reason.into())
    }
}
