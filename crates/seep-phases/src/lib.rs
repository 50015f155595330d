//! The liquid and gas rule phases of the Seep fluid automaton.
//!
//! # Pipeline order (each tick)
//!
//! 1. [`GravityFlow`]: liquid falls into the liquid cell below
//! 2. [`LateralEqualization`]: blocked liquid spreads left and right
//! 3. [`PressureRelease`]: liquid above capacity pushes the excess up
//! 4. [`GasRise`]: gas moves into the cell above
//! 5. [`GasDiffusion`]: gas spreads left and right
//!
//! The order is fixed: pressure release only has work to do because the
//! earlier phases can leave liquid above capacity. [`step`] runs the five
//! phases once; [`standard_pipeline`] packages them for the engine.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod gas_diffusion;
pub mod gas_rise;
pub mod gravity;
pub mod lateral;
pub mod pressure;

pub use gas_diffusion::GasDiffusion;
pub use gas_rise::GasRise;
pub use gravity::GravityFlow;
pub use lateral::LateralEqualization;
pub use pressure::PressureRelease;

use seep_grid::{Grid, PingPongGrid};
use seep_phase::{execute_phase, Phase, Pipeline, PipelineError};

/// Phase names in execution order.
pub const STANDARD_ORDER: [&str; 5] = [
    gravity::NAME,
    lateral::NAME,
    pressure::NAME,
    gas_rise::NAME,
    gas_diffusion::NAME,
];

fn standard_phases() -> [&'static dyn Phase; 5] {
    [
        &GravityFlow,
        &LateralEqualization,
        &PressureRelease,
        &GasRise,
        &GasDiffusion,
    ]
}

/// The five phases, boxed, in execution order.
pub fn standard_phase_list() -> Vec<Box<dyn Phase>> {
    vec![
        Box::new(GravityFlow),
        Box::new(LateralEqualization),
        Box::new(PressureRelease),
        Box::new(GasRise),
        Box::new(GasDiffusion),
    ]
}

/// The five phases as a validated [`Pipeline`].
pub fn standard_pipeline() -> Result<Pipeline, PipelineError> {
    Pipeline::new(standard_phase_list())
}

/// Advance `arena` by one tick.
pub fn step_in_place(arena: &mut PingPongGrid) {
    for phase in standard_phases() {
        execute_phase(phase, arena);
    }
}

/// Advance `grid` by one tick, returning the new grid.
///
/// The caller's grid is not modified.
///
/// # Examples
///
/// ```
/// use seep_core::CellKind;
/// use seep_grid::initialize;
///
/// let mut grid = initialize(3, 1).unwrap();
/// grid.set_cell(0, 0, CellKind::Liquid, 1.0).unwrap();
/// grid.set_cell(2, 0, CellKind::Solid, 1.0).unwrap();
///
/// let next = seep_phases::step(&grid);
/// assert_eq!(next.cell_at(0, 0).unwrap().fill, 0.0);
/// assert_eq!(next.cell_at(1, 0).unwrap().fill, 1.0);
/// assert_eq!(grid.cell_at(0, 0).unwrap().fill, 1.0);
/// ```
pub fn step(grid: &Grid) -> Grid {
    let mut arena = PingPongGrid::new(grid.clone());
    step_in_place(&mut arena);
    arena.into_published()
}
