use std::fmt;

use diptych_core::GraphModel;

use super::labelled;

/// Writes a `digraph G` block: node label lines, then edge lines.
///
/// The closing brace is not followed by a newline.
#[derive(Debug, Clone, Copy)]
pub struct GraphvizWriter<'a> {
    graph: &'a GraphModel,
}

impl<'a> GraphvizWriter<'a> {
    pub fn new(graph: &'a GraphModel) -> Self {
        Self { graph }
    }
}

impl fmt::Display for GraphvizWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;
        for node in self.graph.nodes() {
            writeln!(f, "  {} [label=\"{}\"];", node.id, node.label)?;
        }
        for edge in self.graph.edges() {
            let label = labelled(edge.label.as_deref(), " [label=\"", "\"]");
            writeln!(f, "  {} -> {}{label};", edge.source, edge.target)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures;

    #[test]
    fn test_chain() {
        let text = GraphvizWriter::new(&fixtures::chain()).to_string();
        assert_eq!(
            text,
            "digraph G {\n  a [label=\"Alpha\"];\n  b [label=\"Beta\"];\n  c [label=\"Gamma\"];\n  a -> b;\n  b -> c [label=\"calls\"];\n}"
        );
    }

    #[test]
    fn test_reparse_restores_node_labels() {
        let graph = fixtures::chain();
        let reparsed = diptych_parser::parse_graphviz(&GraphvizWriter::new(&graph).to_string());

        let labels: Vec<_> = reparsed.nodes().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(reparsed.edges().len(), 2);
    }
}
