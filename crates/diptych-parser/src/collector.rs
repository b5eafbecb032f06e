//! Accumulates nodes and edges in first-discovery order.

use indexmap::IndexMap;
use log::trace;

use diptych_core::{Edge, GraphModel, Node, geometry::Position};

use crate::syntax::NodeRef;

/// Builds a [`GraphModel`] from recognised statements.
///
/// Nodes are keyed by identifier and placed on the grid slot matching their
/// discovery index. A node's label is fixed the first time it is seen.
/// Edges are keyed by `source-target`; a repeated pair replaces the earlier
/// edge's content while keeping its position in the list.
#[derive(Debug, Default)]
pub(crate) struct GraphCollector {
    nodes: IndexMap<String, Node>,
    edges: IndexMap<String, Edge>,
}

impl GraphCollector {
    /// Registers a node unless it is already known.
    pub fn register(&mut self, node: NodeRef<'_>) {
        let index = self.nodes.len();
        self.nodes.entry(node.id.to_owned()).or_insert_with(|| {
            let position = Position::grid_slot(index);
            trace!(id = node.id, index; "Discovered node");
            Node::new(node.id, node.label.unwrap_or(node.id), position)
        });
    }

    /// Registers both endpoints, then records the edge between them.
    pub fn connect(&mut self, source: NodeRef<'_>, target: NodeRef<'_>, label: Option<&str>) {
        self.register(source);
        self.register(target);

        let edge = Edge::between(source.id, target.id).with_label(label.map(str::to_owned));
        let id = edge.id.clone();
        if self.edges.insert(id, edge).is_some() {
            trace!(source = source.id, target = target.id; "Replaced repeated connection");
        }
    }

    /// Sets the label of an already-discovered node. Returns `false` if the node is unknown.
    pub fn relabel(&mut self, id: &str, label: &str) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.label = label.to_owned();
                true
            }
            None => false,
        }
    }

    pub fn finish(self) -> GraphModel {
        GraphModel::from_parts_unchecked(
            self.nodes.into_values().collect(),
            self.edges.into_values().collect(),
        )
    }
}
