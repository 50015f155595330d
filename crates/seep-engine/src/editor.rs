//! Brush editor: turns pointer and key input into point edits.
//!
//! The brush holds the current paint kind and an erase toggle. It never
//! touches the grid; it only produces [`Edit`] values for the world to
//! apply between ticks.

use seep_core::{CellKind, Edit};

use crate::config::WorldConfig;

/// Input relevant to editing, already decoded from the windowing layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// The pointer moved to surface pixel `(x, y)`. `held` is whether any
    /// button is down; only held motion paints.
    Motion {
        /// Horizontal pixel position.
        x: i32,
        /// Vertical pixel position.
        y: i32,
        /// Whether a button is held.
        held: bool,
    },
    /// Advance the paint kind (space bar).
    CycleKind,
    /// Toggle erase mode (backspace).
    ToggleErase,
}

/// Current painting state.
///
/// Starts painting [`CellKind::Solid`] with erase off. Painting writes the
/// current kind at full capacity; erasing writes empty liquid, which is
/// what a fresh grid holds.
///
/// # Examples
///
/// ```
/// use seep_core::{CellKind, Edit};
/// use seep_engine::{Brush, InputEvent};
///
/// let mut brush = Brush::new(20);
/// brush.handle(InputEvent::CycleKind);
/// assert_eq!(brush.kind(), CellKind::Liquid);
///
/// let edit = brush.handle(InputEvent::Motion { x: 45, y: 10, held: true });
/// assert_eq!(edit, Some(Edit::paint(0, 2, CellKind::Liquid)));
///
/// assert_eq!(brush.handle(InputEvent::Motion { x: 45, y: 10, held: false }), None);
/// ```
#[derive(Clone, Debug)]
pub struct Brush {
    kind: CellKind,
    erasing: bool,
    cell_size: u32,
}

impl Brush {
    /// A brush for cells of `cell_size` pixels.
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is zero.
    pub fn new(cell_size: u32) -> Self {
        assert!(cell_size > 0, "Brush cell_size must be at least 1");
        Self {
            kind: CellKind::Solid,
            erasing: false,
            cell_size,
        }
    }

    /// A brush sized for `config`. The config must have passed
    /// [`validate()`](WorldConfig::validate).
    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(config.cell_size)
    }

    /// Kind written by the next stroke when not erasing.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Whether strokes erase.
    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    /// Advance Solid → Liquid → Gas → Solid. Returns the new kind.
    pub fn cycle_kind(&mut self) -> CellKind {
        self.kind = self.kind.cycle();
        self.kind
    }

    /// Flip erase mode. Returns the new state.
    pub fn toggle_erase(&mut self) -> bool {
        self.erasing = !self.erasing;
        self.erasing
    }

    /// `(row, col)` of the cell containing pixel `(x, y)`.
    ///
    /// Pixels left of or above the surface map to negative coordinates,
    /// which the grid rejects.
    pub fn cell_of(&self, x: i32, y: i32) -> (i32, i32) {
        let size = i64::from(self.cell_size);
        let row = i64::from(y).div_euclid(size);
        let col = i64::from(x).div_euclid(size);
        (row as i32, col as i32)
    }

    /// The edit a stroke at pixel `(x, y)` produces.
    pub fn stroke(&self, x: i32, y: i32) -> Edit {
        let (row, col) = self.cell_of(x, y);
        if self.erasing {
            Edit::erase(row, col)
        } else {
            Edit::paint(row, col, self.kind)
        }
    }

    /// Update state from `event`, returning an edit if it paints.
    pub fn handle(&mut self, event: InputEvent) -> Option<Edit> {
        match event {
            InputEvent::Motion { x, y, held: true } => Some(self.stroke(x, y)),
            InputEvent::Motion { held: false, .. } => None,
            InputEvent::CycleKind => {
                self.cycle_kind();
                None
            }
            InputEvent::ToggleErase => {
                self.toggle_erase();
                None
            }
        }
    }
}
