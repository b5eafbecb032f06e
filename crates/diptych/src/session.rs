//! The sync controller tying a text buffer to a graph.
//!
//! A [`DiagramSession`] holds two views of one diagram: the source text and
//! the [`GraphModel`]. Each can be edited on its own at any time. They only
//! meet through two explicit transforms:
//!
//! - [`import`](DiagramSession::import) parses the text and replaces the graph.
//! - [`generate`](DiagramSession::generate) renders the graph and replaces the text.
//!
//! Neither runs automatically when the other view changes.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde_json::Value;
use uuid::Uuid;

use diptych_core::{ChangeOutcome, ChangeSet, Edge, Engine, GraphModel, Node, Removed};

use crate::{
    DiptychError,
    config::{AppConfig, SourcesConfig},
    export,
    snapshot::{self, DiagramRecord, Snapshot},
};

/// What [`DiagramSession::import`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The graph was replaced by the parse result.
    Imported { nodes: usize, edges: usize },
    /// The text buffer was blank; the graph was left as it was.
    Skipped,
}

/// One diagram being authored.
#[derive(Debug, Clone)]
pub struct DiagramSession {
    id: String,
    engine: Engine,
    code: String,
    graph: GraphModel,
    created_at: DateTime<Utc>,
    revision: u64,
    sources: SourcesConfig,
}

impl DiagramSession {
    /// Starts a session on the configured engine with its default source and an empty graph.
    pub fn new(config: &AppConfig) -> Self {
        let engine = config.default_engine();
        let sources = config.sources().clone();
        let id = Uuid::new_v4().to_string();
        info!(id = id.as_str(), engine:% = engine; "Starting diagram session");

        Self {
            id,
            engine,
            code: sources.get(engine).to_owned(),
            graph: GraphModel::new(),
            created_at: Utc::now(),
            revision: 0,
            sources,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of times the text buffer has been replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Switches engine and loads that engine's default source into the text buffer.
    ///
    /// The graph is not touched.
    pub fn set_engine(&mut self, engine: Engine) {
        info!(from:% = self.engine, to:% = engine; "Switching engine");
        self.engine = engine;
        let source = self.sources.get(engine).to_owned();
        self.replace_code(source);
    }

    /// Switches to the engine named by `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`DiptychError::UnsupportedEngine`] and changes nothing when
    /// `tag` is not a known engine.
    pub fn set_engine_tag(&mut self, tag: &str) -> Result<(), DiptychError> {
        let engine = tag.parse::<Engine>()?;
        self.set_engine(engine);
        Ok(())
    }

    /// Replaces the text view. The graph is not touched.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.replace_code(code.into());
    }

    /// Parses the text buffer with the active engine and replaces the graph.
    ///
    /// A blank buffer leaves the graph as it was.
    pub fn import(&mut self) -> ImportOutcome {
        if self.code.trim().is_empty() {
            debug!("Text buffer is blank, keeping current graph");
            return ImportOutcome::Skipped;
        }

        info!(engine:% = self.engine; "Importing text into graph");
        self.graph = diptych_parser::parse(self.engine, &self.code);
        ImportOutcome::Imported {
            nodes: self.graph.nodes().len(),
            edges: self.graph.edges().len(),
        }
    }

    /// Renders the graph for the active engine and replaces the text buffer.
    pub fn generate(&mut self) -> &str {
        info!(engine:% = self.engine; "Generating text from graph");
        let code = export::generate(&self.graph, self.engine);
        self.replace_code(code);
        &self.code
    }

    /// Adds a node, labelled `Node <n>` when no label is given.
    pub fn add_node(&mut self, label: Option<&str>) -> &Node {
        let label = match label {
            Some(label) => label.to_owned(),
            None => format!("Node {}", self.graph.nodes().len() + 1),
        };
        self.graph.add_node(label)
    }

    /// Connects two existing nodes.
    ///
    /// # Errors
    ///
    /// Returns [`DiptychError::Graph`] wrapping [`GraphError::UnknownNode`]
    /// and leaves the graph unchanged when either endpoint is absent.
    ///
    /// [`GraphError::UnknownNode`]: diptych_core::GraphError::UnknownNode
    pub fn connect(&mut self, source: &str, target: &str) -> Result<&Edge, DiptychError> {
        Ok(self.graph.connect(source, target)?)
    }

    /// Relabels one node. Returns `false` when the node does not exist.
    pub fn relabel(&mut self, id: &str, label: impl Into<String>) -> bool {
        self.graph.relabel(id, label)
    }

    /// Removes the selected nodes and edges, with any edges they leave dangling.
    pub fn delete_selected(&mut self) -> Removed {
        self.graph.delete_selected()
    }

    /// Applies a batch of changes reported by the graph editor.
    pub fn apply_changes(&mut self, changes: &ChangeSet) -> ChangeOutcome {
        self.graph.apply_changes(changes)
    }

    /// Captures the session as a snapshot stamped with `now`.
    pub fn export_snapshot(&self, now: DateTime<Utc>) -> Snapshot {
        Snapshot::new(DiagramRecord {
            id: Some(self.id.clone()),
            engine: self.engine,
            code: self.code.clone(),
            nodes: Some(self.graph.nodes().to_vec()),
            edges: Some(self.graph.edges().to_vec()),
            created_at: Some(self.created_at),
            updated_at: Some(now),
        })
    }

    /// Serializes the session as pretty-printed snapshot JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DiptychError::Json`] if serialization fails.
    pub fn export_json(&self) -> Result<String, DiptychError> {
        self.export_snapshot(Utc::now()).to_json()
    }

    /// Returns the file name a snapshot exported at `now` should be saved under.
    pub fn suggested_file_name(&self, now: DateTime<Utc>) -> String {
        snapshot::file_name(now)
    }

    /// Replaces the session state with a snapshot read from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DiptychError::InvalidFormat`] and leaves the session
    /// untouched when the text is not a valid snapshot.
    pub fn import_snapshot(&mut self, json: &str) -> Result<(), DiptychError> {
        let snapshot = Snapshot::from_json(json)?;
        self.adopt(snapshot)
    }

    /// Replaces the session state with a snapshot held as a JSON value.
    ///
    /// # Errors
    ///
    /// See [`import_snapshot`](Self::import_snapshot).
    pub fn import_snapshot_value(&mut self, value: Value) -> Result<(), DiptychError> {
        let snapshot = Snapshot::from_value(value)?;
        self.adopt(snapshot)
    }

    /// Commits a snapshot after checking the graph it would produce.
    fn adopt(&mut self, snapshot: Snapshot) -> Result<(), DiptychError> {
        let record = snapshot.diagram;

        let nodes = record
            .nodes
            .unwrap_or_else(|| self.graph.nodes().to_vec());
        let edges = record
            .edges
            .unwrap_or_else(|| self.graph.edges().to_vec());
        let graph = GraphModel::from_parts(nodes, edges)
            .map_err(|err| DiptychError::invalid_format(err.to_string()))?;

        info!(
            engine:% = record.engine,
            nodes = graph.nodes().len(),
            edges = graph.edges().len();
            "Importing snapshot"
        );

        if let Some(id) = record.id {
            self.id = id;
        }
        if let Some(created_at) = record.created_at {
            self.created_at = created_at;
        }
        self.engine = record.engine;
        self.graph = graph;
        self.replace_code(record.code);
        Ok(())
    }

    fn replace_code(&mut self, code: String) {
        self.code = code;
        self.revision += 1;
        debug!(revision = self.revision, bytes = self.code.len(); "Text buffer replaced");
    }
}

impl Default for DiagramSession {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
