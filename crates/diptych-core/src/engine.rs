//! Diagram language tags.
//!
//! An [`Engine`] selects which parser/generator pair is active. The set is
//! closed: every engine-specific operation in the workspace matches on this
//! enum instead of looking implementations up by string.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedEngine;

/// A supported diagram description language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Mermaid flowcharts (`A[Label] --> B`).
    #[default]
    Mermaid,
    /// PlantUML sequence diagrams (`A -> B: text`).
    #[serde(rename = "plantuml")]
    PlantUml,
    /// Graphviz DOT digraphs (`A -> B;`).
    Graphviz,
    /// D2 connections (`A -> B: text`).
    D2,
}

impl Engine {
    /// All engines, in the order they are presented to users.
    pub const ALL: [Engine; 4] = [
        Engine::Mermaid,
        Engine::PlantUml,
        Engine::Graphviz,
        Engine::D2,
    ];

    /// Returns the lowercase tag used in files and on the command line.
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Guesses the engine from a file extension (without the leading dot).
    ///
    /// # Examples
    ///
    /// ```
    /// # use diptych_core::Engine;
    /// assert_eq!(Engine::from_extension("mmd"), Some(Engine::Mermaid));
    /// assert_eq!(Engine::from_extension("GV"), Some(Engine::Graphviz));
    /// assert_eq!(Engine::from_extension("txt"), None);
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "mmd" | "mermaid" => Some(Self::Mermaid),
            "puml" | "plantuml" | "pu" => Some(Self::PlantUml),
            "dot" | "gv" => Some(Self::Graphviz),
            "d2" => Some(Self::D2),
            _ => None,
        }
    }
}

impl FromStr for Engine {
    type Err = UnsupportedEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mermaid" => Ok(Self::Mermaid),
            "plantuml" => Ok(Self::PlantUml),
            "graphviz" => Ok(Self::Graphviz),
            "d2" => Ok(Self::D2),
            _ => Err(UnsupportedEngine::new(s)),
        }
    }
}

impl From<Engine> for &'static str {
    fn from(val: Engine) -> Self {
        match val {
            Engine::Mermaid => "mermaid",
            Engine::PlantUml => "plantuml",
            Engine::Graphviz => "graphviz",
            Engine::D2 => "d2",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
