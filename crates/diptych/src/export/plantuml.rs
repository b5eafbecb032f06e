use std::fmt;

use diptych_core::GraphModel;

use super::labelled;

/// Writes an `@startuml` block of `sourceLabel -> targetLabel` lines.
///
/// Node labels stand in for ids, so parsing the output again derives ids
/// from labels. Two nodes sharing a label merge, and a label containing
/// non-word characters makes its lines unreadable. Neither is corrected
/// here. An endpoint with no matching node is written by id.
#[derive(Debug, Clone, Copy)]
pub struct PlantUmlWriter<'a> {
    graph: &'a GraphModel,
}

impl<'a> PlantUmlWriter<'a> {
    pub fn new(graph: &'a GraphModel) -> Self {
        Self { graph }
    }

    fn display_name<'n>(&'n self, id: &'n str) -> &'n str {
        self.graph
            .node(id)
            .map_or(id, |node| node.label.as_str())
    }
}

impl fmt::Display for PlantUmlWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@startuml")?;
        for edge in self.graph.edges() {
            let label = labelled(edge.label.as_deref(), ": ", "");
            writeln!(
                f,
                "{} -> {}{label}",
                self.display_name(&edge.source),
                self.display_name(&edge.target)
            )?;
        }
        write!(f, "@enduml")
    }
}
