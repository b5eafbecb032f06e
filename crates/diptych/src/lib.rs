//! Diptych - diagram text and an editable graph, kept convertible.
//!
//! A diagram is authored in one of four small text languages (Mermaid,
//! PlantUML, Graphviz DOT, D2) and edited as a node/edge graph. This crate
//! converts between the two on request:
//!
//! - [`parse`] reads diagram text into a [`GraphModel`], skipping what it cannot read.
//! - [`export::generate`] writes a [`GraphModel`] back out as diagram text.
//! - [`DiagramSession`] owns both views and the snapshot file format.
//!
//! # Examples
//!
//! ```
//! use diptych::{DiagramSession, Engine, config::AppConfig};
//!
//! let mut session = DiagramSession::new(&AppConfig::default());
//! session.set_engine(Engine::D2);
//! session.import();
//!
//! let user = session.graph().node("User").expect("parsed").id.clone();
//! let pdf = session.graph().node("PDF").expect("parsed").id.clone();
//! session.connect(&pdf, &user).expect("both nodes exist");
//!
//! let code = session.generate();
//! assert!(code.starts_with("User: User\n"));
//! ```

pub mod config;
pub mod export;
pub mod render;
pub mod snapshot;

mod error;
mod session;

pub use diptych_core::{
    ChangeOutcome, ChangeSet, Edge, EdgeChange, EdgeKind, Engine, GraphError, GraphModel, Node,
    NodeChange, Removed, UnsupportedEngine, geometry,
};
pub use diptych_parser::{parse, parse_tagged};

pub use error::DiptychError;
pub use session::{DiagramSession, ImportOutcome};
