use std::fmt;

use diptych_core::GraphModel;

use super::labelled;

/// Writes a `flowchart LR` block with one bracket-labelled line per node.
///
/// ```text
/// flowchart LR
///   a[Alpha]
///   b[Beta]
///   a --> b
///   a -->|calls| b
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MermaidWriter<'a> {
    graph: &'a GraphModel,
}

impl<'a> MermaidWriter<'a> {
    pub fn new(graph: &'a GraphModel) -> Self {
        Self { graph }
    }
}

impl fmt::Display for MermaidWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "flowchart LR")?;
        for node in self.graph.nodes() {
            writeln!(f, "  {}[{}]", node.id, node.label)?;
        }
        for edge in self.graph.edges() {
            let label = labelled(edge.label.as_deref(), "|", "|");
            writeln!(f, "  {} -->{label} {}", edge.source, edge.target)?;
        }
        Ok(())
    }
}
