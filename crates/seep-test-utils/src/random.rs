//! Seeded random grids for property and soak tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seep_core::CellKind;
use seep_grid::Grid;

fn random_kind(rng: &mut ChaCha8Rng) -> CellKind {
    let roll: f64 = rng.gen();
    if roll < 0.2 {
        CellKind::Solid
    } else if roll < 0.7 {
        CellKind::Liquid
    } else {
        CellKind::Gas
    }
}

/// A `rows × cols` grid with random kinds and fills in `[0, max_fill)`.
///
/// Solids always carry fill 1.0, as the brush paints them. Deterministic
/// for a given seed.
pub fn random_grid(rows: u32, cols: u32, seed: u64, max_fill: f64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols).expect("random grid dimensions");
    for cell in grid.cells_mut() {
        let kind = random_kind(&mut rng);
        cell.kind = kind;
        cell.fill = match kind {
            CellKind::Solid => 1.0,
            _ => rng.gen_range(0.0..max_fill),
        };
    }
    grid
}

/// Like [`random_grid`] but with a one-cell solid frame around the edge.
pub fn random_sealed_grid(rows: u32, cols: u32, seed: u64, max_fill: f64) -> Grid {
    let mut grid = random_grid(rows, cols, seed, max_fill);
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            let edge = r == 0 || c == 0 || r == rows as i32 - 1 || c == cols as i32 - 1;
            if edge {
                grid.set_cell(r, c, CellKind::Solid, 1.0)
                    .expect("frame coordinate in bounds");
            }
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_grid() {
        assert_eq!(random_grid(6, 7, 42, 1.0), random_grid(6, 7, 42, 1.0));
        assert_ne!(random_grid(6, 7, 42, 1.0), random_grid(6, 7, 43, 1.0));
    }

    #[test]
    fn fills_within_range() {
        let g = random_grid(10, 10, 7, 0.5);
        for cell in g.cells() {
            if cell.is_solid() {
                assert_eq!(cell.fill, 1.0);
            } else {
                assert!((0.0..0.5).contains(&cell.fill));
            }
        }
    }

    #[test]
    fn sealed_grid_has_solid_frame() {
        let g = random_sealed_grid(5, 4, 1, 1.0);
        for c in 0..4 {
            assert!(g.cell_at(0, c).unwrap().is_solid());
            assert!(g.cell_at(4, c).unwrap().is_solid());
        }
        for r in 0..5 {
            assert!(g.cell_at(r, 0).unwrap().is_solid());
            assert!(g.cell_at(r, 3).unwrap().is_solid());
        }
    }
}
