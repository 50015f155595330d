//! Error types for grid access and point edits.
//!
//! The only failures the core can report are at its boundary: malformed
//! grid dimensions, coordinates outside the grid, unknown cell tags, and a
//! saturated edit queue. Nothing inside a tick can fail.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or coordinate lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// A dimension exceeds what `i32` coordinates can address.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A coordinate lies outside `[0, rows) × [0, cols)`.
    CoordOutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::CoordOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "coordinate ({row}, {col}) out of bounds for {rows}x{cols} grid"
            ),
        }
    }
}

impl Error for GridError {}

/// Errors from applying a point edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// The edit targets a coordinate outside the grid.
    OutOfBounds(GridError),
    /// A raw cell tag did not name a known [`CellKind`](crate::CellKind).
    InvalidKind {
        /// The rejected tag.
        tag: u8,
    },
    /// The pending-edit queue is at capacity.
    QueueFull,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(e) => write!(f, "edit rejected: {e}"),
            Self::InvalidKind { tag } => write!(f, "unknown cell kind tag {tag}"),
            Self::QueueFull => write!(f, "edit queue full"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for EditError {
    fn from(e: GridError) -> Self {
        Self::OutOfBounds(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_coordinate() {
        let e = GridError::CoordOutOfBounds {
            row: -1,
            col: 4,
            rows: 3,
            cols: 3,
        };
        let msg = e.to_string();
        assert!(msg.contains("(-1, 4)"));
        assert!(msg.contains("3x3"));
    }

    #[test]
    fn edit_error_chains_grid_error() {
        let inner = GridError::CoordOutOfBounds {
            row: 9,
            col: 9,
            rows: 2,
            cols: 2,
        };
        let e: EditError = inner.clone().into();
        assert_eq!(e, EditError::OutOfBounds(inner));
        assert!(e.source().is_some());
        assert!(EditError::QueueFull.source().is_none());
    }
}
