//! Double-buffered grid pair for phase execution.
//!
//! [`PingPongGrid`] holds two grids of identical dimensions that alternate
//! between "published" (the input of the next phase, and what callers read
//! between ticks) and "staging" (the phase's working buffer).
//!
//! The lifecycle per phase is:
//! 1. `begin_phase()`: reseed staging with a full copy of published and
//!    hand out `&published` + `&mut staging` as [`PhaseBuffers`]
//! 2. the phase reads the input and writes deltas into the working buffer
//! 3. `publish()`: swap, so the working buffer becomes the grid

use crate::grid::Grid;

/// Borrowed buffers for one phase.
///
/// Holds a shared borrow of the published grid and a mutable borrow of the
/// staging grid, so the arena cannot be touched until the phase is done.
#[must_use]
pub struct PhaseBuffers<'a> {
    /// Frozen input of the phase.
    pub input: &'a Grid,
    /// Working buffer, initialised to a copy of `input`.
    pub working: &'a mut Grid,
}

/// Two grids swapped after every phase.
#[derive(Clone, Debug)]
pub struct PingPongGrid {
    published: Grid,
    staging: Grid,
    /// Number of completed publishes since construction.
    generation: u64,
}

impl PingPongGrid {
    /// Wrap `grid` as the initially published buffer.
    pub fn new(grid: Grid) -> Self {
        let staging = grid.clone();
        Self {
            published: grid,
            staging,
            generation: 0,
        }
    }

    /// Reseed the working buffer from the published grid and borrow both.
    pub fn begin_phase(&mut self) -> PhaseBuffers<'_> {
        self.staging.copy_from(&self.published);
        PhaseBuffers {
            input: &self.published,
            working: &mut self.staging,
        }
    }

    /// Promote the working buffer to published.
    pub fn publish(&mut self) {
        std::mem::swap(&mut self.published, &mut self.staging);
        self.generation += 1;
    }

    /// The current authoritative grid.
    pub fn published(&self) -> &Grid {
        &self.published
    }

    /// Mutable access to the authoritative grid, for edits between ticks.
    pub fn published_mut(&mut self) -> &mut Grid {
        &mut self.published
    }

    /// Number of phases published so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Consume the pair, returning the authoritative grid.
    pub fn into_published(self) -> Grid {
        self.published
    }
}
