//! The canonical directed-graph model.
//!
//! [`GraphModel`] is the single authoritative copy of a diagram's nodes and
//! edges. It is produced in bulk by a parser run or changed one step at a time
//! by the interactive editor, and is what the generator turns back into text.
//!
//! # Invariants
//!
//! - Node ids are unique within one model.
//! - Every edge's `source` and `target` name a node in the same model.
//!
//! Editing operations check their preconditions before touching anything, so
//! a rejected operation leaves both arrays exactly as they were. Removing a
//! node always removes the edges attached to it.

mod change;

pub use change::{ChangeOutcome, ChangeSet, EdgeChange, NodeChange};

use std::{
    collections::HashSet,
    time::{SystemTime, UNIX_EPOCH},
};

use log::{debug, trace};
use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::{
    error::GraphError,
    geometry::{Position, Size},
};

/// Horizontal band in which interactively added nodes are dropped.
const ADD_NODE_X: std::ops::Range<f64> = 100.0..500.0;
/// Vertical band in which interactively added nodes are dropped.
const ADD_NODE_Y: std::ops::Range<f64> = 100.0..400.0;

/// A diagram node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identity within one diagram, taken from the source token or synthesized.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Top-left corner in editor coordinates.
    pub position: Position,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub selected: bool,
}

impl Node {
    /// Creates an unselected node with the default size.
    pub fn new(id: impl Into<String>, label: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position,
            size: Size::DEFAULT,
            selected: false,
        }
    }
}

/// How the editor routes an edge. Only one routing style exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    #[default]
    #[serde(rename = "smoothstep")]
    SmoothStep,
}

/// A directed edge between two nodes of the same diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// `<source>-<target>` when parsed, `edge-<millis>` when connected interactively.
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, alias = "type")]
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

impl Edge {
    /// Creates an unlabelled edge with the parser's `<source>-<target>` id.
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{source}-{target}"),
            source,
            target,
            label: None,
            kind: EdgeKind::SmoothStep,
            selected: false,
        }
    }

    /// Returns the edge with its label replaced.
    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }
}

/// Nodes and edges taken out of a model by a delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Removed {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Removed {
    /// Returns `true` if nothing was removed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// The node and edge arrays of one diagram.
///
/// # Examples
///
/// ```
/// # use diptych_core::GraphModel;
/// let mut graph = GraphModel::new();
/// let a = graph.add_node("Client").id.clone();
/// let b = graph.add_node("Server").id.clone();
///
/// graph.connect(&a, &b).expect("both endpoints exist");
/// assert!(graph.connect(&a, "missing").is_err());
///
/// assert_eq!(graph.nodes().len(), 2);
/// assert_eq!(graph.edges().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a model from untrusted arrays, checking the invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] or [`GraphError::DanglingEdge`]
    /// when the arrays do not describe a valid graph.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let graph = Self { nodes, edges };
        graph.validate()?;
        Ok(graph)
    }

    /// Builds a model from arrays the caller has already kept consistent.
    ///
    /// Parsers use this after registering every endpoint before its edge.
    pub fn from_parts_unchecked(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let graph = Self { nodes, edges };
        debug_assert!(graph.validate().is_ok(), "inconsistent graph: {graph:?}");
        graph
    }

    /// Splits the model into its node and edge arrays.
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns `true` if the model has no nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Checks that node ids are unique and every edge endpoint exists.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, nodes before edges.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(GraphError::DanglingEdge {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Adds a node with a fresh `node-<millis>` id at a random position.
    pub fn add_node(&mut self, label: impl Into<String>) -> &Node {
        self.add_node_with(label, unix_millis(), &mut rand::rng())
    }

    /// Adds a node using an explicit timestamp and random source.
    ///
    /// The id is `node-<stamp>`, suffixed with `-<n>` when that id is taken.
    /// The position is drawn from `x ∈ [100, 500)`, `y ∈ [100, 400)`.
    pub fn add_node_with<R>(&mut self, label: impl Into<String>, stamp: u128, rng: &mut R) -> &Node
    where
        R: RngExt,
    {
        let id = unique_id("node", stamp, |candidate| self.contains_node(candidate));
        let position = Position::new(
            rng.random_range(ADD_NODE_X),
            rng.random_range(ADD_NODE_Y),
        );

        debug!(id = id.as_str(); "Adding node");
        let index = self.nodes.len();
        self.nodes.push(Node::new(id, label, position));
        &self.nodes[index]
    }

    /// Appends an edge `source → target` with a fresh `edge-<millis>` id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] without changing the model when
    /// either endpoint is absent.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<&Edge, GraphError> {
        self.connect_with(source, target, unix_millis())
    }

    /// Appends an edge using an explicit timestamp for its id.
    ///
    /// # Errors
    ///
    /// See [`GraphModel::connect`].
    pub fn connect_with(
        &mut self,
        source: &str,
        target: &str,
        stamp: u128,
    ) -> Result<&Edge, GraphError> {
        for endpoint in [source, target] {
            if !self.contains_node(endpoint) {
                debug!(endpoint; "Rejecting connection to unknown node");
                return Err(GraphError::UnknownNode(endpoint.to_owned()));
            }
        }

        let id = unique_id("edge", stamp, |candidate| self.edge(candidate).is_some());
        let mut edge = Edge::between(source, target);
        edge.id = id;

        let index = self.edges.len();
        self.edges.push(edge);
        Ok(&self.edges[index])
    }

    /// Replaces the label of one node.
    ///
    /// Returns `false`, changing nothing, when no node has the given id.
    pub fn relabel(&mut self, id: &str, label: impl Into<String>) -> bool {
        match self.nodes.iter_mut().find(|node| node.id == id) {
            Some(node) => {
                node.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Removes every selected node and edge, plus any edge left without an endpoint.
    pub fn delete_selected(&mut self) -> Removed {
        let (removed_nodes, kept_nodes): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.nodes).into_iter().partition(|node| node.selected);
        self.nodes = kept_nodes;

        let (mut removed_edges, kept_edges): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.edges).into_iter().partition(|edge| edge.selected);
        self.edges = kept_edges;
        removed_edges.extend(self.remove_dangling_edges());

        debug!(
            nodes = removed_nodes.len(),
            edges = removed_edges.len();
            "Deleted selection"
        );

        Removed {
            nodes: removed_nodes,
            edges: removed_edges,
        }
    }

    /// Folds a batch of editor changes into the model.
    ///
    /// Node changes are applied first, then edge changes, each in order.
    /// Changes naming unknown ids are skipped. Untouched elements keep their
    /// relative order.
    pub fn apply_changes(&mut self, changes: &ChangeSet) -> ChangeOutcome {
        let mut outcome = ChangeOutcome::default();

        for change in &changes.nodes {
            if self.apply_node_change(change, &mut outcome.removed) {
                outcome.applied += 1;
            } else {
                trace!(change:?; "Skipping node change");
                outcome.skipped += 1;
            }
        }

        for change in &changes.edges {
            if self.apply_edge_change(change, &mut outcome.removed) {
                outcome.applied += 1;
            } else {
                trace!(change:?; "Skipping edge change");
                outcome.skipped += 1;
            }
        }

        let dangling = self.remove_dangling_edges();
        outcome.removed.edges.extend(dangling);
        outcome
    }

    fn apply_node_change(&mut self, change: &NodeChange, removed: &mut Removed) -> bool {
        let id = change.id();
        let Some(index) = self.nodes.iter().position(|node| node.id == id) else {
            return false;
        };

        match change {
            NodeChange::Position { position, .. } => {
                if let Some(position) = position {
                    self.nodes[index].position = *position;
                }
            }
            NodeChange::Dimensions { dimensions, .. } => {
                if let Some(size) = dimensions {
                    self.nodes[index].size = size.clamp_to_min();
                }
            }
            NodeChange::Select { selected, .. } => self.nodes[index].selected = *selected,
            NodeChange::Remove { .. } => removed.nodes.push(self.nodes.remove(index)),
        }
        true
    }

    fn apply_edge_change(&mut self, change: &EdgeChange, removed: &mut Removed) -> bool {
        let id = change.id();
        let Some(index) = self.edges.iter().position(|edge| edge.id == id) else {
            return false;
        };

        match change {
            EdgeChange::Select { selected, .. } => self.edges[index].selected = *selected,
            EdgeChange::Remove { .. } => removed.edges.push(self.edges.remove(index)),
        }
        true
    }

    fn remove_dangling_edges(&mut self) -> Vec<Edge> {
        let ids: HashSet<&str> = self.nodes.iter().map(|node| node.id.as_str()).collect();
        let (kept, dangling): (Vec<_>, Vec<_>) = std::mem::take(&mut self.edges)
            .into_iter()
            .partition(|edge| {
                ids.contains(edge.source.as_str()) && ids.contains(edge.target.as_str())
            });
        self.edges = kept;
        dangling
    }
}

/// Returns `<prefix>-<stamp>`, or the first free `<prefix>-<stamp>-<n>`.
fn unique_id(prefix: &str, stamp: u128, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{prefix}-{stamp}");
    if !taken(&base) {
        return base;
    }
    let mut n = 1usize;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
