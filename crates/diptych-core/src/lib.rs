//! Diptych Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Diptych parsers,
//! generator and sync controller. It includes:
//!
//! - **Engines**: The supported diagram language tags ([`engine::Engine`])
//! - **Geometry**: Node placement and size types ([`geometry`] module)
//! - **Graph**: The canonical node/edge model and its editing operations ([`graph`] module)
//! - **Errors**: Errors raised by graph editing and engine resolution ([`error`] module)

pub mod engine;
pub mod error;
pub mod geometry;
pub mod graph;

pub use engine::Engine;
pub use error::{GraphError, UnsupportedEngine};
pub use graph::{
    ChangeOutcome, ChangeSet, Edge, EdgeChange, EdgeKind, GraphModel, Node, NodeChange, Removed,
};
