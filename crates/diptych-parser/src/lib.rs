//! Best-effort parsers for diagram text.
//!
//! Each supported [`Engine`] has a line-oriented parser that extracts the
//! nodes and directed edges it can recognise and silently skips everything
//! else. Parsing never fails: text with no recognisable connections yields
//! an empty [`GraphModel`].
//!
//! Parsed nodes are laid out on a three-column grid in the order they are
//! first mentioned, and parsed edges are identified by `source-target`.
//!
//! # Examples
//!
//! ```
//! use diptych_core::Engine;
//!
//! let graph = diptych_parser::parse(Engine::D2, "User -> App: Request");
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(graph.edges()[0].id, "User-App");
//! assert_eq!(graph.edges()[0].label.as_deref(), Some("Request"));
//! ```

mod collector;
mod d2;
mod dialect;
mod graphviz;
mod mermaid;
mod plantuml;
mod syntax;

use diptych_core::{Engine, GraphModel, UnsupportedEngine};

use dialect::parse_with;

/// Parses `source` as diagram text written for `engine`.
pub fn parse(engine: Engine, source: &str) -> GraphModel {
    match engine {
        Engine::Mermaid => parse_with::<mermaid::Mermaid>(source),
        Engine::PlantUml => parse_with::<plantuml::PlantUml>(source),
        Engine::Graphviz => parse_with::<graphviz::Graphviz>(source),
        Engine::D2 => parse_with::<d2::D2>(source),
    }
}

/// Parses `source` for the engine named by `tag`.
///
/// # Errors
///
/// Returns [`UnsupportedEngine`] when `tag` does not name a known engine.
pub fn parse_tagged(tag: &str, source: &str) -> Result<GraphModel, UnsupportedEngine> {
    let engine = tag.parse::<Engine>()?;
    Ok(parse(engine, source))
}

/// Parses Mermaid flowchart text.
pub fn parse_mermaid(source: &str) -> GraphModel {
    parse(Engine::Mermaid, source)
}

/// Parses PlantUML text.
pub fn parse_plantuml(source: &str) -> GraphModel {
    parse(Engine::PlantUml, source)
}

/// Parses Graphviz DOT text.
pub fn parse_graphviz(source: &str) -> GraphModel {
    parse(Engine::Graphviz, source)
}

/// Parses D2 text.
pub fn parse_d2(source: &str) -> GraphModel {
    parse(Engine::D2, source)
}
