//! The versioned JSON envelope used to save and load a diagram.
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "diagram": {
//!     "id": "…", "engine": "mermaid", "code": "…",
//!     "nodes": [], "edges": [],
//!     "createdAt": "2026-01-01T00:00:00Z", "updatedAt": "2026-01-01T00:00:00Z"
//!   }
//! }
//! ```
//!
//! Reading a snapshot is all-or-nothing: [`Snapshot::from_json`] either
//! returns a complete envelope or [`DiptychError::InvalidFormat`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use diptych_core::{Edge, Engine, Node};

use crate::DiptychError;

/// Version written into every exported snapshot.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Major version accepted on import.
const SUPPORTED_MAJOR: u64 = 1;

/// The top-level envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: String,
    pub diagram: DiagramRecord,
}

/// One diagram as stored in a snapshot.
///
/// `nodes` and `edges` may be absent in files written by other tools; a
/// session importing such a file keeps its current arrays for the missing
/// part. The id and timestamps are always written but tolerated as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub engine: Engine,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Edge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Wraps `diagram` in an envelope carrying [`SNAPSHOT_VERSION`].
    pub fn new(diagram: DiagramRecord) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_owned(),
            diagram,
        }
    }

    /// Reads an envelope from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DiptychError::InvalidFormat`] if the text is not JSON or
    /// the document is not a supported snapshot.
    pub fn from_json(json: &str) -> Result<Self, DiptychError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| DiptychError::invalid_format(format!("not valid JSON: {err}")))?;
        Self::from_value(value)
    }

    /// Reads an envelope from an already parsed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DiptychError::InvalidFormat`] if the `diagram` key is
    /// missing, a field has the wrong shape, the engine is unknown or the
    /// major version is not supported.
    pub fn from_value(value: Value) -> Result<Self, DiptychError> {
        if value.get("diagram").is_none() {
            return Err(DiptychError::invalid_format("missing `diagram` object"));
        }

        let snapshot: Self = serde_json::from_value(value)
            .map_err(|err| DiptychError::invalid_format(err.to_string()))?;
        check_version(&snapshot.version)?;
        Ok(snapshot)
    }

    /// Writes the envelope as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DiptychError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, DiptychError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Returns the download name for a snapshot taken at `now`.
///
/// # Examples
///
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use diptych::snapshot::file_name;
/// let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
/// assert_eq!(file_name(now), "diagram-1700000000123.json");
/// ```
pub fn file_name(now: DateTime<Utc>) -> String {
    format!("diagram-{}.json", now.timestamp_millis())
}

fn check_version(version: &str) -> Result<(), DiptychError> {
    let major = version
        .split('.')
        .next()
        .and_then(|major| major.trim().parse::<u64>().ok());
    match major {
        Some(SUPPORTED_MAJOR) => Ok(()),
        _ => Err(DiptychError::invalid_format(format!(
            "unsupported snapshot version `{version}`"
        ))),
    }
}
