//! Test utilities and mock types for Seep development.
//!
//! Provides text-layout grid fixtures, seeded random grids, mock
//! [`Phase`](seep_phase::Phase) implementations, and fill assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod layout;
pub mod random;

pub use fixtures::{ConstFillPhase, IdentityPhase, RecordingPhase};
pub use layout::{layout, render_layout};
pub use random::{random_grid, random_sealed_grid};

use seep_grid::Grid;

/// Default tolerance for fill comparisons after a handful of transfers.
pub const FILL_EPSILON: f64 = 1e-9;

/// Panic unless `a` and `b` differ by at most `tol`.
#[track_caller]
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() <= tol,
        "expected {a} ≈ {b} (tolerance {tol}, diff {})",
        (a - b).abs()
    );
}

/// Panic unless both grids hold the same total fill within a tolerance
/// scaled by the grid size.
#[track_caller]
pub fn assert_conserved(before: &Grid, after: &Grid) {
    let tol = FILL_EPSILON * before.len().max(1) as f64;
    assert_close(before.total_fill(), after.total_fill(), tol);
}

/// Fill of the cell at `(row, col)`. Panics when out of bounds.
#[track_caller]
pub fn fill_at(grid: &Grid, row: i32, col: i32) -> f64 {
    grid.cell_at(row, col)
        .unwrap_or_else(|e| panic!("fill_at({row}, {col}): {e}"))
        .fill
}
