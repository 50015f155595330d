//! Gravity flow: liquid falls into the liquid cell below.

use seep_grid::Grid;
use seep_phase::Phase;

pub(crate) const NAME: &str = "gravity_flow";

/// Moves liquid straight down until the cell beneath is full.
///
/// For every liquid cell with a liquid cell directly below holding less
/// fill, the free space below (`1 − below`) is compared with the source:
/// if it all fits the whole source drops, otherwise exactly the free space
/// drops and the cell below is topped up to capacity. Gas and solid cells
/// never take part, on either side.
///
/// Conditions are read from the frozen input and applied as deltas, so a
/// cell that both receives from above and drains below keeps both effects.
/// If the cell below is already over capacity nothing moves; pressure
/// release deals with it. This departs from the unclamped rule, where the
/// "free space" is negative and the excess is pushed back up so the cell
/// below ends at exactly 1. Only edits can create such a cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct GravityFlow;

impl Phase for GravityFlow {
    fn name(&self) -> &str {
        NAME
    }

    fn apply(&self, input: &Grid, working: &mut Grid) {
        let cells = input.cells();
        for (i, source) in cells.iter().enumerate() {
            if !source.is_liquid() {
                continue;
            }
            let Some(b) = input.below(i) else {
                continue;
            };
            let below = &cells[b];
            if !below.is_liquid() || below.fill >= source.fill {
                continue;
            }
            let free = below.free_space();
            if free <= 0.0 {
                continue;
            }
            let moved = if free >= source.fill { source.fill } else { free };
            let out = working.cells_mut();
            out[i].fill -= moved;
            out[b].fill += moved;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seep_grid::PingPongGrid;
    use seep_phase::execute_phase;
    use seep_test_utils::{assert_close, fill_at, layout};

    fn run(grid: Grid) -> Grid {
        let mut arena = PingPongGrid::new(grid);
        execute_phase(&GravityFlow, &mut arena);
        arena.into_published()
    }

    #[test]
    fn whole_cell_drops_into_empty_cell() {
        let out = run(layout(&["~", ".", "#"]));
        assert_eq!(fill_at(&out, 0, 0), 0.0);
        assert_eq!(fill_at(&out, 1, 0), 1.0);
    }

    #[test]
    fn partial_drop_tops_up_cell_below() {
        let mut g = layout(&["~", ".", "#"]);
        g.set_cell(1, 0, seep_core::CellKind::Liquid, 0.7).unwrap();
        let out = run(g);
        assert_close(fill_at(&out, 0, 0), 0.7, 1e-12);
        assert_close(fill_at(&out, 1, 0), 1.0, 1e-12);
    }

    #[test]
    fn no_flow_into_fuller_cell() {
        let out = run(layout(&["-", "~"]));
        assert_eq!(fill_at(&out, 0, 0), 0.5);
        assert_eq!(fill_at(&out, 1, 0), 1.0);
    }

    #[test]
    fn bottom_row_and_solids_block() {
        let out = run(layout(&["~", "#"]));
        assert_eq!(fill_at(&out, 0, 0), 1.0);
        let out = run(layout(&["~"]));
        assert_eq!(fill_at(&out, 0, 0), 1.0);
    }

    #[test]
    fn gas_neither_falls_nor_receives() {
        let out = run(layout(&["o", "."]));
        assert_eq!(fill_at(&out, 0, 0), 1.0);
        assert_eq!(fill_at(&out, 1, 0), 0.0);
        let out = run(layout(&["~", "*"]));
        assert_eq!(fill_at(&out, 0, 0), 1.0);
        assert_eq!(fill_at(&out, 1, 0), 0.5);
    }

    #[test]
    fn column_moves_one_cell_per_phase_without_loss() {
        // Middle cell both receives and drains in the same pass.
        let out = run(layout(&["~", "-", ".", "#"]));
        assert_eq!(fill_at(&out, 0, 0), 0.5);
        assert_eq!(fill_at(&out, 1, 0), 0.5);
        assert_eq!(fill_at(&out, 2, 0), 0.5);
        assert_close(out.total_fill(), 1.5 + 1.0, 1e-12);
    }

    #[test]
    fn over_capacity_cell_below_is_left_alone() {
        let mut g = layout(&["~", "."]);
        g.set_cell(0, 0, seep_core::CellKind::Liquid, 1.6).unwrap();
        g.set_cell(1, 0, seep_core::CellKind::Liquid, 1.2).unwrap();
        // Unclamped, free space is -0.2: the pair would become 1.8 over 1.0.
        assert_close(g.cell_at(1, 0).unwrap().free_space(), -0.2, 1e-12);
        let out = run(g);
        assert_eq!(fill_at(&out, 0, 0), 1.6);
        assert_eq!(fill_at(&out, 1, 0), 1.2);
        assert_close(out.total_fill(), 2.8, 1e-12);
    }
}
