//! Geometric primitives for node placement.
//!
//! None of the supported diagram languages encode layout, so positions and
//! sizes only come from two places: the deterministic discovery grid used by
//! the parsers, and interactive moves/resizes in the graph editor.
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Coordinates are `f64` to match the editor surface they are exchanged with.

use serde::{Deserialize, Serialize};

/// Number of columns in the discovery grid.
const GRID_COLUMNS: usize = 3;
/// Distance from the origin to the first grid slot, on both axes.
const GRID_ORIGIN: f64 = 100.0;
/// Horizontal distance between grid columns.
const GRID_COLUMN_SPACING: f64 = 250.0;
/// Vertical distance between grid rows.
const GRID_ROW_SPACING: f64 = 150.0;

/// The top-left position of a node.
///
/// # Examples
///
/// ```
/// # use diptych_core::geometry::Position;
/// let slot = Position::grid_slot(4);
/// assert_eq!(slot, Position::new(350.0, 250.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new position with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the slot assigned to the `index`-th node discovered by a parser.
    ///
    /// Slots fill rows of three from left to right:
    /// `x = 100 + 250 * (index mod 3)`, `y = 100 + 150 * floor(index / 3)`.
    pub fn grid_slot(index: usize) -> Self {
        let column = (index % GRID_COLUMNS) as f64;
        let row = (index / GRID_COLUMNS) as f64;
        Self {
            x: GRID_ORIGIN + GRID_COLUMN_SPACING * column,
            y: GRID_ORIGIN + GRID_ROW_SPACING * row,
        }
    }
}

/// Width and height of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Size given to every newly created node.
    pub const DEFAULT: Size = Size {
        width: 120.0,
        height: 60.0,
    };

    /// Smallest size an interactive resize can produce.
    pub const MIN: Size = Size {
        width: 80.0,
        height: 40.0,
    };

    /// Creates a new size with the specified dimensions
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns this size grown, per axis, to at least [`Size::MIN`].
    ///
    /// Non-finite dimensions are treated as the minimum.
    pub fn clamp_to_min(self) -> Self {
        let clamp = |value: f64, min: f64| {
            if value.is_finite() { value.max(min) } else { min }
        };
        Self {
            width: clamp(self.width, Self::MIN.width),
            height: clamp(self.height, Self::MIN.height),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::DEFAULT
    }
}
