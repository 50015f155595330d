//! The [`Phase`] trait and [`ReadMode`] enum.
//!
//! Phases are stateless operators executed in a fixed sequence each tick.
//! Each one receives the frozen output of the previous phase and a working
//! copy of it, and must leave its result in the working copy.

use seep_grid::Grid;

/// How a phase consults the grid while it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadMode {
    /// All transfer conditions are evaluated against the frozen input;
    /// only deltas are written to the working buffer. The result does not
    /// depend on cell enumeration order.
    Frozen,

    /// Some conditions read the working buffer as it is being written,
    /// so the result depends on the row-major, left-then-right scan.
    Progressive,
}

/// One local-update rule of the simulation tick.
///
/// # Contract
///
/// - `apply()` MUST be deterministic: same input produces identical output.
/// - `&self`: phases are stateless; all state lives in the grid.
/// - `working` arrives as an exact copy of `input`. Solid cells are never
///   donors or receivers, and no fill is created or destroyed.
///
/// # Object safety
///
/// This trait is object-safe; pipelines store phases as
/// `Vec<Box<dyn Phase>>`.
///
/// # Examples
///
/// A phase that evaporates a fixed fraction of every gas cell (not part of
/// the standard pipeline, since it destroys fill):
///
/// ```
/// use seep_core::CellKind;
/// use seep_grid::Grid;
/// use seep_phase::{Phase, ReadMode};
///
/// struct Evaporate(f64);
///
/// impl Phase for Evaporate {
///     fn name(&self) -> &str { "evaporate" }
///
///     fn apply(&self, input: &Grid, working: &mut Grid) {
///         for (i, cell) in input.cells().iter().enumerate() {
///             if cell.kind == CellKind::Gas {
///                 working.cells_mut()[i].fill -= cell.fill * self.0;
///             }
///         }
///     }
/// }
///
/// let phase = Evaporate(0.1);
/// assert_eq!(phase.name(), "evaporate");
/// assert_eq!(phase.read_mode(), ReadMode::Frozen);
/// ```
pub trait Phase: Send + 'static {
    /// Human-readable name for error reporting and telemetry.
    fn name(&self) -> &str;

    /// Whether the phase reads only the frozen input.
    ///
    /// Default: [`ReadMode::Frozen`].
    fn read_mode(&self) -> ReadMode {
        ReadMode::Frozen
    }

    /// Execute the phase once.
    fn apply(&self, input: &Grid, working: &mut Grid);
}
