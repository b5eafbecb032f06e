//! Configuration types for Diptych sessions.
//!
//! All types implement [`serde::Deserialize`] and every section falls back to
//! its defaults, so an empty document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration: starting engine, default sources and render pacing.
//! - [`SourcesConfig`] - The source text a session loads when it switches to an engine.
//! - [`RenderConfig`] - Quiescence window for coalescing render requests.
//!
//! # Example
//!
//! ```
//! # use diptych::config::AppConfig;
//! # use diptych_core::Engine;
//! let config = AppConfig::default();
//! assert_eq!(config.default_engine(), Engine::Mermaid);
//! assert!(config.sources().get(Engine::D2).starts_with("User -> App"));
//! ```

use std::time::Duration;

use serde::Deserialize;

use diptych_core::Engine;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine a new session starts on.
    #[serde(default)]
    default_engine: Engine,

    /// Default source text per engine.
    #[serde(default)]
    sources: SourcesConfig,

    /// Render request pacing.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(default_engine: Engine, sources: SourcesConfig, render: RenderConfig) -> Self {
        Self {
            default_engine,
            sources,
            render,
        }
    }

    /// Returns the engine a new session starts on.
    pub fn default_engine(&self) -> Engine {
        self.default_engine
    }

    /// Returns the default source table.
    pub fn sources(&self) -> &SourcesConfig {
        &self.sources
    }

    /// Returns the render pacing configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Source text loaded into the code buffer when a session switches engine.
///
/// Each entry defaults to a small sample diagram of a user, an application
/// and a generated PDF.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    mermaid: String,
    plantuml: String,
    graphviz: String,
    d2: String,
}

impl SourcesConfig {
    /// Returns the default source for `engine`.
    pub fn get(&self, engine: Engine) -> &str {
        match engine {
            Engine::Mermaid => &self.mermaid,
            Engine::PlantUml => &self.plantuml,
            Engine::Graphviz => &self.graphviz,
            Engine::D2 => &self.d2,
        }
    }

    /// Returns the table with the source for `engine` replaced.
    pub fn with(mut self, engine: Engine, source: impl Into<String>) -> Self {
        let slot = match engine {
            Engine::Mermaid => &mut self.mermaid,
            Engine::PlantUml => &mut self.plantuml,
            Engine::Graphviz => &mut self.graphviz,
            Engine::D2 => &mut self.d2,
        };
        *slot = source.into();
        self
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            mermaid: "flowchart LR\n  U[User] --> A[App]\n  A --> P[(PDF)]".to_owned(),
            plantuml: "@startuml\nUser -> App: Request\nApp -> PDF: Generate\nPDF --> App: Document\nApp --> User: Response\n@enduml".to_owned(),
            graphviz: "digraph G {\n  User -> App;\n  App -> PDF;\n}".to_owned(),
            d2: "User -> App: Request\nApp -> PDF: Generate".to_owned(),
        }
    }
}

/// Pacing for render requests issued while text is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Quiescence window in milliseconds.
    debounce_ms: u64,
}

impl RenderConfig {
    /// Shortest accepted quiescence window.
    pub const MIN_DEBOUNCE: Duration = Duration::from_millis(300);
    /// Longest accepted quiescence window.
    pub const MAX_DEBOUNCE: Duration = Duration::from_millis(500);

    /// Creates a new [`RenderConfig`] with the given window in milliseconds.
    pub fn new(debounce_ms: u64) -> Self {
        Self { debounce_ms }
    }

    /// Returns the quiescence window, clamped to
    /// [`MIN_DEBOUNCE`](Self::MIN_DEBOUNCE)..=[`MAX_DEBOUNCE`](Self::MAX_DEBOUNCE).
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms).clamp(Self::MIN_DEBOUNCE, Self::MAX_DEBOUNCE)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { debounce_ms: 400 }
    }
}
