use std::fmt;

use diptych_core::GraphModel;

use super::labelled;

/// Writes bare `id: label` and `source -> target` lines.
#[derive(Debug, Clone, Copy)]
pub struct D2Writer<'a> {
    graph: &'a GraphModel,
}

impl<'a> D2Writer<'a> {
    pub fn new(graph: &'a GraphModel) -> Self {
        Self { graph }
    }
}

impl fmt::Display for D2Writer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.graph.nodes() {
            writeln!(f, "{}: {}", node.id, node.label)?;
        }
        for edge in self.graph.edges() {
            let label = labelled(edge.label.as_deref(), ": ", "");
            writeln!(f, "{} -> {}{label}", edge.source, edge.target)?;
        }
        Ok(())
    }
}
