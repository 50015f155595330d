//! Lockstep (synchronous) simulation world.
//!
//! [`Simulation`] is the user-facing API for running the automaton. Each
//! call to [`step_sync()`](Simulation::step_sync) queues edits, applies
//! everything pending to the grid, runs the phase pipeline once, and
//! returns the resulting grid.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, and `step_sync()` returns a
//! [`StepResult`] that borrows the grid from `self`. A tick therefore
//! always runs to completion before anything can read or edit the grid.

use std::time::Instant;

use log::{debug, info, warn};
use seep_core::{Cell, CellKind, Edit, EditReceipt, GridError, TickId};
use seep_grid::{Grid, PingPongGrid};
use seep_phase::{execute_phase, Phase, Pipeline};

use crate::config::{ConfigError, WorldConfig};
use crate::ingress::EditQueue;
use crate::metrics::StepMetrics;

// Compile-time assertion: Simulation can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a [`Simulation::step_sync()`] call.
pub struct StepResult<'w> {
    /// Grid state after this tick.
    pub grid: &'w Grid,
    /// One receipt per edit handled this tick.
    ///
    /// Edits rejected at submission (queue full) come first, then every
    /// drained edit in arrival order, applied or rejected.
    pub receipts: Vec<EditReceipt>,
    /// Performance metrics for this tick.
    pub metrics: StepMetrics,
}

// ── Simulation ──────────────────────────────────────────────────

/// Single-threaded world: one grid, one pipeline, one edit queue.
///
/// # Example
///
/// ```
/// use seep_core::{CellKind, Edit};
/// use seep_engine::{Simulation, WorldConfig};
///
/// let config = WorldConfig { rows: 3, cols: 1, ..WorldConfig::default() };
/// let mut world = Simulation::new(config).unwrap();
///
/// let result = world.step_sync(vec![
///     Edit::paint(0, 0, CellKind::Liquid),
///     Edit::paint(2, 0, CellKind::Solid),
/// ]);
/// assert!(result.receipts.iter().all(|r| r.accepted));
/// assert_eq!(result.grid.cell_at(1, 0).unwrap().fill, 1.0);
/// assert_eq!(world.current_tick().0, 1);
/// ```
pub struct Simulation {
    arena: PingPongGrid,
    pipeline: Pipeline,
    queue: EditQueue,
    tick: TickId,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Create a world running the five standard phases.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        Self::with_phases(config, seep_phases::standard_phase_list())
    }

    /// Create a world running `phases` in the given order.
    ///
    /// Validates the configuration and the phase list, then builds an
    /// all-liquid, zero-fill grid.
    pub fn with_phases(
        config: WorldConfig,
        phases: Vec<Box<dyn Phase>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let pipeline = Pipeline::new(phases)?;
        let grid = Grid::new(config.rows, config.cols)?;
        info!(
            "world created: {}x{} grid, phases {:?}, order-dependent {:?}",
            config.rows,
            config.cols,
            pipeline.names(),
            pipeline.order_dependent()
        );
        Ok(Self {
            arena: PingPongGrid::new(grid),
            pipeline,
            queue: EditQueue::new(config.max_pending_edits),
            tick: TickId::default(),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Queue edits for the next tick without stepping.
    ///
    /// Returns one receipt per edit; accepted edits carry no tick until
    /// they are applied.
    pub fn submit(&mut self, edits: Vec<Edit>) -> Vec<EditReceipt> {
        let receipts = self.queue.submit(edits);
        let rejected = receipts.iter().filter(|r| !r.accepted).count();
        if rejected > 0 {
            warn!(
                "edit queue full (capacity {}): {rejected} edit(s) dropped",
                self.queue.capacity()
            );
        }
        receipts
    }

    /// Execute one tick synchronously.
    ///
    /// Queues `edits`, applies every pending edit to the grid in arrival
    /// order, runs the pipeline, and returns the new grid with receipts
    /// and metrics. Nothing inside a tick can fail; bad edits are reported
    /// through their receipts.
    pub fn step_sync(&mut self, edits: Vec<Edit>) -> StepResult<'_> {
        let tick_start = Instant::now();
        let next = self.tick.next();

        let mut receipts: Vec<EditReceipt> = self
            .submit(edits)
            .into_iter()
            .filter(|r| !r.accepted)
            .collect();

        // 1. Apply pending edits to the published grid.
        let edit_start = Instant::now();
        let mut edits_applied = 0u32;
        for edit in self.queue.drain() {
            match self.arena.published_mut().apply(&edit) {
                Ok(()) => {
                    edits_applied += 1;
                    receipts.push(EditReceipt::applied(next));
                }
                Err(e) => {
                    debug!("tick {next}: {e}");
                    receipts.push(EditReceipt::rejected(e));
                }
            }
        }
        let edit_processing_us = edit_start.elapsed().as_micros() as u64;

        // 2. Run every phase in order.
        let mut phase_us = Vec::with_capacity(self.pipeline.len());
        for phase in self.pipeline.iter() {
            let phase_start = Instant::now();
            execute_phase(phase, &mut self.arena);
            phase_us.push((
                phase.name().to_string(),
                phase_start.elapsed().as_micros() as u64,
            ));
        }

        self.tick = next;
        let total_fill = self.arena.published().total_fill();
        let metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            edit_processing_us,
            phase_us,
            edits_applied,
            edits_rejected: receipts.iter().filter(|r| !r.accepted).count() as u32,
            total_fill,
        };
        debug!(
            "tick {next}: {} us, {edits_applied} edit(s) applied, total fill {total_fill:.6}",
            metrics.total_us
        );
        self.last_metrics = metrics.clone();

        StepResult {
            grid: self.arena.published(),
            receipts,
            metrics,
        }
    }

    /// Overwrite one cell immediately, outside the tick loop.
    pub fn set_cell(
        &mut self,
        row: i32,
        col: i32,
        kind: CellKind,
        fill: f64,
    ) -> Result<(), GridError> {
        self.arena.published_mut().set_cell(row, col, kind, fill)
    }

    /// Read one cell of the current grid.
    pub fn cell_at(&self, row: i32, col: i32) -> Result<Cell, GridError> {
        self.arena.published().cell_at(row, col)
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        self.arena.published()
    }

    /// Reset to tick 0 with an all-liquid, zero-fill grid.
    ///
    /// Discards pending edits and clears metrics. Returns the fresh grid.
    pub fn reset(&mut self) -> &Grid {
        self.arena.published_mut().clear();
        self.queue.clear();
        self.tick = TickId::default();
        self.last_metrics = StepMetrics::default();
        info!("world reset to tick 0");
        self.arena.published()
    }

    /// Current tick ID (0 after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The phase pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Number of edits waiting for the next tick.
    pub fn pending_edits(&self) -> usize {
        self.queue.len()
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let grid = self.arena.published();
        f.debug_struct("Simulation")
            .field("rows", &grid.rows())
            .field("cols", &grid.cols())
            .field("current_tick", &self.tick)
            .field("pipeline", &self.pipeline)
            .field("pending_edits", &self.queue.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seep_core::EditError;
    use seep_phase::PipelineError;
    use seep_phases::STANDARD_ORDER;
    use seep_test_utils::{assert_close, ConstFillPhase, IdentityPhase, RecordingPhase};
    use std::sync::{Arc, Mutex};

    fn config(rows: u32, cols: u32) -> WorldConfig {
        WorldConfig {
            rows,
            cols,
            ..WorldConfig::default()
        }
    }

    #[test]
    fn new_world_is_empty_liquid_at_tick_zero() {
        let world = Simulation::new(config(4, 5)).unwrap();
        assert_eq!(world.current_tick(), TickId(0));
        assert_eq!(world.grid().len(), 20);
        assert!(world.grid().cells().iter().all(|c| c.is_liquid() && c.fill == 0.0));
        assert_eq!(world.pipeline().names(), STANDARD_ORDER.to_vec());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Simulation::new(config(0, 5)).unwrap_err();
        assert_eq!(err, ConfigError::Grid(GridError::EmptyGrid));
    }

    #[test]
    fn duplicate_phase_names_are_rejected() {
        let phases: Vec<Box<dyn Phase>> =
            vec![Box::new(IdentityPhase::new("a")), Box::new(IdentityPhase::new("a"))];
        match Simulation::with_phases(config(2, 2), phases) {
            Err(ConfigError::Pipeline(PipelineError::DuplicateName { .. })) => {}
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn edits_land_before_phases_run() {
        let mut world = Simulation::new(config(3, 1)).unwrap();
        let result = world.step_sync(vec![
            Edit::paint(0, 0, CellKind::Liquid),
            Edit::paint(2, 0, CellKind::Solid),
        ]);
        assert_eq!(result.receipts, vec![EditReceipt::applied(TickId(1)); 2]);
        assert_eq!(result.grid.cell_at(0, 0).unwrap().fill, 0.0);
        assert_eq!(result.grid.cell_at(1, 0).unwrap().fill, 1.0);
        assert_eq!(result.metrics.edits_applied, 2);
        assert_close(result.metrics.total_fill, 2.0, 1e-12);
    }

    #[test]
    fn out_of_bounds_edit_gets_rejection_receipt() {
        let mut world = Simulation::new(config(2, 2)).unwrap();
        let result = world.step_sync(vec![Edit::erase(2, 0), Edit::erase(0, 0)]);
        assert!(matches!(
            result.receipts[0].reason,
            Some(EditError::OutOfBounds(GridError::CoordOutOfBounds { row: 2, col: 0, .. }))
        ));
        assert!(result.receipts[1].accepted);
        assert_eq!(result.metrics.edits_rejected, 1);
        assert_eq!(result.metrics.edits_applied, 1);
    }

    #[test]
    fn queue_overflow_is_reported() {
        let cfg = WorldConfig {
            max_pending_edits: 2,
            ..config(2, 2)
        };
        let mut world = Simulation::new(cfg).unwrap();
        let edits = vec![Edit::erase(0, 0), Edit::erase(0, 1), Edit::erase(1, 0)];
        let result = world.step_sync(edits);
        assert_eq!(result.receipts.len(), 3);
        assert_eq!(result.receipts[0], EditReceipt::rejected(EditError::QueueFull));
        assert!(result.receipts[1..].iter().all(|r| r.accepted));
    }

    #[test]
    fn submitted_edits_wait_for_the_next_tick() {
        let mut world = Simulation::new(config(2, 2)).unwrap();
        let receipts = world.submit(vec![Edit::paint(1, 1, CellKind::Solid)]);
        assert_eq!(receipts, vec![EditReceipt::queued()]);
        assert_eq!(world.pending_edits(), 1);
        assert!(world.cell_at(1, 1).unwrap().is_liquid());

        let result = world.step_sync(Vec::new());
        assert_eq!(result.receipts, vec![EditReceipt::applied(TickId(1))]);
        assert!(world.cell_at(1, 1).unwrap().is_solid());
        assert_eq!(world.pending_edits(), 0);
    }

    #[test]
    fn metrics_name_every_phase() {
        let mut world = Simulation::new(config(2, 2)).unwrap();
        world.step_sync(Vec::new());
        let names: Vec<&str> = world
            .last_metrics()
            .phase_us
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, STANDARD_ORDER.to_vec());
    }

    #[test]
    fn set_cell_is_bounds_checked() {
        let mut world = Simulation::new(config(2, 2)).unwrap();
        world.set_cell(1, 1, CellKind::Gas, 0.5).unwrap();
        assert_eq!(world.cell_at(1, 1).unwrap().kind, CellKind::Gas);
        let before = world.grid().clone();
        assert!(world.set_cell(-1, 0, CellKind::Solid, 1.0).is_err());
        assert_eq!(world.grid(), &before);
    }

    #[test]
    fn reset_clears_grid_queue_and_tick() {
        let mut world = Simulation::new(config(2, 2)).unwrap();
        world.step_sync(vec![Edit::paint(0, 0, CellKind::Solid)]);
        world.submit(vec![Edit::paint(1, 1, CellKind::Gas)]);
        let grid = world.reset().clone();
        assert!(grid.cells().iter().all(|c| c.is_liquid() && c.fill == 0.0));
        assert_eq!(world.current_tick(), TickId(0));
        assert_eq!(world.pending_edits(), 0);
        assert_eq!(world.last_metrics(), &StepMetrics::default());
    }

    #[test]
    fn custom_pipeline_runs_in_order() {
        let phases: Vec<Box<dyn Phase>> = vec![
            Box::new(IdentityPhase::new("first")),
            Box::new(IdentityPhase::progressive("second")),
        ];
        let mut world = Simulation::with_phases(config(2, 2), phases).unwrap();
        assert_eq!(world.pipeline().order_dependent(), vec!["second"]);
        let result = world.step_sync(vec![Edit::paint(0, 1, CellKind::Liquid)]);
        assert_eq!(result.grid.cell_at(0, 1).unwrap().fill, 1.0);
    }

    #[test]
    fn every_phase_runs_once_per_tick() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let phases: Vec<Box<dyn Phase>> = vec![
            Box::new(RecordingPhase::new("before", log.clone())),
            Box::new(ConstFillPhase::new("flood", CellKind::Gas, 0.25)),
            Box::new(RecordingPhase::new("after", log.clone())),
        ];
        let mut world = Simulation::with_phases(config(2, 2), phases).unwrap();
        let result = world.step_sync(vec![Edit::paint(0, 0, CellKind::Solid)]);
        assert!(result.grid.cell_at(0, 0).unwrap().is_solid());
        assert_eq!(result.grid.cell_at(1, 1).unwrap().kind, CellKind::Gas);
        assert_close(result.metrics.total_fill, 1.75, 1e-12);
        world.step_sync(Vec::new());
        assert_eq!(*log.lock().unwrap(), vec!["before", "after", "before", "after"]);
    }
}
