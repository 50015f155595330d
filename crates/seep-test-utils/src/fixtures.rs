//! Reusable phase test fixtures.
//!
//! Three mock phases for pipeline validation and engine testing:
//!
//! - [`IdentityPhase`]: leaves the working copy untouched.
//! - [`ConstFillPhase`]: overwrites every non-solid cell with one kind/fill.
//! - [`RecordingPhase`]: appends its name to a shared log when applied.

use seep_core::CellKind;
use seep_grid::Grid;
use seep_phase::{Phase, ReadMode};
use std::sync::{Arc, Mutex};

/// Leaves the working copy as the input.
///
/// Useful for testing pipeline plumbing: a pipeline of identities must
/// return its input unchanged.
pub struct IdentityPhase {
    pub name: String,
    pub mode: ReadMode,
}

impl IdentityPhase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: ReadMode::Frozen,
        }
    }

    /// An identity that reports itself as order-dependent.
    pub fn progressive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: ReadMode::Progressive,
        }
    }
}

impl Phase for IdentityPhase {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_mode(&self) -> ReadMode {
        self.mode
    }

    fn apply(&self, _input: &Grid, _working: &mut Grid) {}
}

/// Writes one kind and fill into every non-solid cell.
pub struct ConstFillPhase {
    pub name: String,
    pub kind: CellKind,
    pub fill: f64,
}

impl ConstFillPhase {
    pub fn new(name: impl Into<String>, kind: CellKind, fill: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            fill,
        }
    }
}

impl Phase for ConstFillPhase {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, _input: &Grid, working: &mut Grid) {
        for cell in working.cells_mut() {
            if !cell.is_solid() {
                cell.kind = self.kind;
                cell.fill = self.fill;
            }
        }
    }
}

/// Records each invocation into a shared log.
pub struct RecordingPhase {
    pub name: String,
    pub log: Arc<Mutex<Vec<String>>>,
}

impl RecordingPhase {
    pub fn new(name: impl Into<String>, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.into(),
            log,
        }
    }
}

impl Phase for RecordingPhase {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, _input: &Grid, _working: &mut Grid) {
        self.log
            .lock()
            .expect("recording log poisoned")
            .push(self.name.clone());
    }
}
