//! Graph to text generation.
//!
//! Each engine has a writer that implements [`fmt::Display`] over a borrowed
//! [`GraphModel`]. Writers iterate nodes, then edges, in array order and are
//! deterministic: the same graph always produces the same text.

mod d2;
mod graphviz;
mod mermaid;
mod plantuml;

use std::fmt;

use log::debug;

use diptych_core::{Engine, GraphModel, UnsupportedEngine};

pub use d2::D2Writer;
pub use graphviz::GraphvizWriter;
pub use mermaid::MermaidWriter;
pub use plantuml::PlantUmlWriter;

/// Renders `graph` as diagram text for `engine`.
///
/// An empty graph yields only the language's framing lines, or an empty
/// string for languages without framing.
///
/// # Examples
///
/// ```
/// use diptych::{Engine, GraphModel, Node, export::generate, geometry::Position};
///
/// let graph = GraphModel::from_parts(
///     vec![Node::new("a", "Alpha", Position::grid_slot(0))],
///     vec![],
/// )
/// .unwrap();
/// assert_eq!(generate(&graph, Engine::D2), "a: Alpha\n");
/// ```
pub fn generate(graph: &GraphModel, engine: Engine) -> String {
    let text = match engine {
        Engine::Mermaid => MermaidWriter::new(graph).to_string(),
        Engine::PlantUml => PlantUmlWriter::new(graph).to_string(),
        Engine::Graphviz => GraphvizWriter::new(graph).to_string(),
        Engine::D2 => D2Writer::new(graph).to_string(),
    };
    debug!(
        engine:% = engine,
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        bytes = text.len();
        "Generated diagram text"
    );
    text
}

/// Renders `graph` for the engine named by `tag`.
///
/// # Errors
///
/// Returns [`UnsupportedEngine`] when `tag` does not name a known engine.
pub fn generate_tagged(graph: &GraphModel, tag: &str) -> Result<String, UnsupportedEngine> {
    let engine = tag.parse::<Engine>()?;
    Ok(generate(graph, engine))
}

/// Writes an optional label with the given prefix and suffix.
struct Labelled<'a> {
    label: Option<&'a str>,
    prefix: &'static str,
    suffix: &'static str,
}

impl fmt::Display for Labelled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "{}{label}{}", self.prefix, self.suffix),
            None => Ok(()),
        }
    }
}

fn labelled<'a>(label: Option<&'a str>, prefix: &'static str, suffix: &'static str) -> Labelled<'a> {
    Labelled {
        label,
        prefix,
        suffix,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use diptych_core::{Edge, GraphModel, Node, geometry::Position};

    /// `a[Alpha] -> b[Beta] -> c[Gamma]` with the second edge labelled `calls`.
    pub fn chain() -> GraphModel {
        GraphModel::from_parts(
            vec![
                Node::new("a", "Alpha", Position::grid_slot(0)),
                Node::new("b", "Beta", Position::grid_slot(1)),
                Node::new("c", "Gamma", Position::grid_slot(2)),
            ],
            vec![
                Edge::between("a", "b"),
                Edge::between("b", "c").with_label(Some("calls".to_owned())),
            ],
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_emits_framing_only() {
        let graph = GraphModel::new();

        assert_eq!(generate(&graph, Engine::Mermaid), "flowchart LR\n");
        assert_eq!(generate(&graph, Engine::Graphviz), "digraph G {\n}");
        assert_eq!(generate(&graph, Engine::D2), "");
        assert_eq!(generate(&graph, Engine::PlantUml), "@startuml\n@enduml");
    }

    #[test]
    fn test_generate_tagged() {
        let graph = fixtures::chain();
        assert_eq!(
            generate_tagged(&graph, "d2").unwrap(),
            generate(&graph, Engine::D2)
        );

        let error = generate_tagged(&graph, "ascii").unwrap_err();
        assert_eq!(error.tag(), "ascii");
    }

    #[test]
    fn test_labelled() {
        assert_eq!(labelled(Some("x"), " [", "]").to_string(), " [x]");
        assert_eq!(labelled(None, " [", "]").to_string(), "");
    }
}
