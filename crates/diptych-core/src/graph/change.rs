//! Change sets coming from the interactive editor.
//!
//! The editor surface is treated as an untrusted input stream: it never holds
//! a reference into the [`GraphModel`](super::GraphModel) and instead reports
//! what the user did as a batch of changes. The JSON shape matches what the
//! editor emits, e.g. `{"type": "position", "id": "a", "position": {"x": 1, "y": 2}}`.
//! Unknown keys such as `dragging` or `resizing` are ignored.

use serde::{Deserialize, Serialize};

use super::Removed;
use crate::geometry::{Position, Size};

/// A single change to one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeChange {
    /// The node was dragged. A missing position leaves the node in place.
    Position {
        id: String,
        #[serde(default)]
        position: Option<Position>,
    },
    /// The node was resized; the new size is clamped to [`Size::MIN`].
    Dimensions {
        id: String,
        #[serde(default)]
        dimensions: Option<Size>,
    },
    Select {
        id: String,
        selected: bool,
    },
    Remove {
        id: String,
    },
}

impl NodeChange {
    /// Returns the id of the node this change applies to.
    pub fn id(&self) -> &str {
        match self {
            Self::Position { id, .. }
            | Self::Dimensions { id, .. }
            | Self::Select { id, .. }
            | Self::Remove { id } => id,
        }
    }
}

/// A single change to one edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EdgeChange {
    Select { id: String, selected: bool },
    Remove { id: String },
}

impl EdgeChange {
    /// Returns the id of the edge this change applies to.
    pub fn id(&self) -> &str {
        match self {
            Self::Select { id, .. } | Self::Remove { id } => id,
        }
    }
}

/// A batch of node and edge changes applied together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeSet {
    #[serde(default)]
    pub nodes: Vec<NodeChange>,
    #[serde(default)]
    pub edges: Vec<EdgeChange>,
}

impl ChangeSet {
    /// Returns `true` if the batch holds no changes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// What applying a [`ChangeSet`] did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeOutcome {
    /// Changes whose target existed.
    pub applied: usize,
    /// Changes naming an id that is not in the model.
    pub skipped: usize,
    /// Elements removed, including edges dropped because an endpoint went away.
    pub removed: Removed,
}
