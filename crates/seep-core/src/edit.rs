//! Point edits and their receipts.
//!
//! An [`Edit`] overwrites one cell wholesale between ticks. Edits are an
//! explicit source or sink of fill and are never checked against
//! conservation; the only validation is the bounds check when applied.

use crate::cell::{CellKind, CAPACITY};
use crate::error::EditError;
use crate::id::TickId;

/// Overwrite the cell at `(row, col)` with `kind` and `fill`.
///
/// Coordinates are signed so that raw input positions (which can fall off
/// the surface) reach the bounds check instead of wrapping.
///
/// # Examples
///
/// ```
/// use seep_core::{CellKind, Edit};
///
/// let paint = Edit::paint(2, 5, CellKind::Solid);
/// assert_eq!(paint.fill, 1.0);
///
/// let erase = Edit::erase(2, 5);
/// assert_eq!(erase.kind, CellKind::Liquid);
/// assert_eq!(erase.fill, 0.0);
///
/// assert!(Edit::from_raw(0, 0, 7, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edit {
    /// Target row.
    pub row: i32,
    /// Target column.
    pub col: i32,
    /// Kind written into the cell.
    pub kind: CellKind,
    /// Fill written into the cell.
    pub fill: f64,
}

impl Edit {
    /// An arbitrary overwrite.
    pub fn new(row: i32, col: i32, kind: CellKind, fill: f64) -> Self {
        Self {
            row,
            col,
            kind,
            fill,
        }
    }

    /// Paint a full cell of `kind`.
    pub fn paint(row: i32, col: i32, kind: CellKind) -> Self {
        Self::new(row, col, kind, CAPACITY)
    }

    /// Reset a cell to empty liquid, the grid's initial state.
    pub fn erase(row: i32, col: i32) -> Self {
        Self::new(row, col, CellKind::Liquid, 0.0)
    }

    /// Build an edit from a raw kind tag, rejecting unknown tags.
    pub fn from_raw(row: i32, col: i32, tag: u8, fill: f64) -> Result<Self, EditError> {
        Ok(Self::new(row, col, CellKind::try_from(tag)?, fill))
    }
}

/// Outcome of one submitted [`Edit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditReceipt {
    /// Whether the edit was written into the grid.
    pub accepted: bool,
    /// The tick whose input grid contained the edit, if accepted.
    pub applied_tick: Option<TickId>,
    /// Why the edit was rejected, if it was.
    pub reason: Option<EditError>,
}

impl EditReceipt {
    /// Receipt for an edit accepted into a queue but not yet written.
    pub fn queued() -> Self {
        Self {
            accepted: true,
            applied_tick: None,
            reason: None,
        }
    }

    /// Receipt for an edit written ahead of `tick`.
    pub fn applied(tick: TickId) -> Self {
        Self {
            accepted: true,
            applied_tick: Some(tick),
            reason: None,
        }
    }

    /// Receipt for a rejected edit.
    pub fn rejected(reason: EditError) -> Self {
        Self {
            accepted: false,
            applied_tick: None,
            reason: Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_maps_known_tags() {
        let e = Edit::from_raw(1, 2, 2, 0.4).unwrap();
        assert_eq!(e.kind, CellKind::Gas);
        assert_eq!(e.fill, 0.4);
    }

    #[test]
    fn from_raw_rejects_unknown_tag() {
        assert_eq!(
            Edit::from_raw(1, 2, 9, 0.4),
            Err(EditError::InvalidKind { tag: 9 })
        );
    }

    #[test]
    fn receipts() {
        let ok = EditReceipt::applied(TickId(3));
        assert!(ok.accepted);
        assert_eq!(ok.applied_tick, Some(TickId(3)));
        let bad = EditReceipt::rejected(EditError::QueueFull);
        assert!(!bad.accepted);
        assert_eq!(bad.reason, Some(EditError::QueueFull));
    }
}
