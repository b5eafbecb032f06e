//! Error adapter for converting DiptychError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's report formatting used in the CLI. Each error variant gets a
//! stable diagnostic code, and the variants a user can fix get a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use diptych::{DiptychError, Engine};

/// Adapter wrapping a [`DiptychError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a DiptychError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DiptychError::Io(_) => "diptych::io",
            DiptychError::UnsupportedEngine(_) => "diptych::engine",
            DiptychError::InvalidFormat(_) => "diptych::format",
            DiptychError::Json(_) => "diptych::json",
            DiptychError::Config(_) => "diptych::config",
            DiptychError::Graph(_) => "diptych::graph",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            DiptychError::UnsupportedEngine(_) => {
                let tags: Vec<_> = Engine::ALL.iter().map(|engine| engine.tag()).collect();
                let help = format!("supported engines: {}", tags.join(", "));
                Some(Box::new(help) as Box<dyn fmt::Display>)
            }
            DiptychError::InvalidFormat(_) => Some(Box::new(
                "expected a JSON object with `version` and `diagram` keys",
            ) as Box<dyn fmt::Display>),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use diptych::{GraphError, UnsupportedEngine};

    use super::*;

    #[test]
    fn test_codes() {
        let err = DiptychError::invalid_format("missing `diagram` object");
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "diptych::format");
        assert_eq!(
            adapter.to_string(),
            "Invalid snapshot format: missing `diagram` object"
        );
    }

    #[test]
    fn test_unsupported_engine_help_lists_tags() {
        let err = DiptychError::from(UnsupportedEngine::new("visio"));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "diptych::engine");
        assert_eq!(
            adapter.help().unwrap().to_string(),
            "supported engines: mermaid, plantuml, graphviz, d2"
        );
        assert_eq!(adapter.to_string(), "unsupported engine: visio");
    }

    #[test]
    fn test_graph_error_code() {
        let err = DiptychError::from(GraphError::UnknownNode("ghost".to_owned()));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "diptych::graph");
        assert!(adapter.to_string().contains("ghost"));
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = DiptychError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "diptych::io");
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = DiptychError::Config("Missing configuration file: x.toml".to_owned());
        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();

        assert!(out.contains("diptych::config"));
        assert!(out.contains("Missing configuration file"));
    }
}
