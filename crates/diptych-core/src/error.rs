//! Error types raised by the graph model and engine resolution.

use thiserror::Error;

/// A string tag that does not name any supported [`Engine`](crate::Engine).
///
/// This is distinct from malformed diagram text, which is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported engine: {tag}")]
pub struct UnsupportedEngine {
    tag: String,
}

impl UnsupportedEngine {
    /// Creates the error for the rejected tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Returns the rejected tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Errors reported by editing operations on a [`GraphModel`](crate::GraphModel).
///
/// Every operation that returns one of these leaves the model unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node `{0}` does not exist")]
    UnknownNode(String),

    #[error("node id `{0}` is used more than once")]
    DuplicateNode(String),

    #[error("edge `{edge}` references missing node `{node}`")]
    DanglingEdge { edge: String, node: String },
}
