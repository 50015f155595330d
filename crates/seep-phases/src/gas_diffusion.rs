//! Gas lateral diffusion.

use seep_core::{CellKind, CAPACITY};
use seep_grid::Grid;
use seep_phase::{Phase, ReadMode};

pub(crate) const NAME: &str = "gas_diffusion";

/// Largest share of a gas cell offered to one neighbour per evaluation.
pub const SPREAD_DIVISOR: f64 = 3.0;

/// Spreads gas into the horizontal neighbours.
///
/// For every gas cell with positive fill, the left neighbour and then the
/// right neighbour (solids skipped) are offered up to a third of the
/// source, capped by what the source still holds and by the neighbour's
/// free space. A positive offer moves and turns the neighbour into gas.
///
/// Unlike the liquid phases this one reads and writes the working buffer
/// as it scans: the source and neighbour levels used for each offer are
/// the ones left by every earlier offer in the pass, so a spreading front
/// can travel several cells within one tick. The outcome depends on the
/// row-major, left-then-right order and the phase reports
/// [`ReadMode::Progressive`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GasDiffusion;

impl Phase for GasDiffusion {
    fn name(&self) -> &str {
        NAME
    }

    fn read_mode(&self) -> ReadMode {
        ReadMode::Progressive
    }

    fn apply(&self, input: &Grid, working: &mut Grid) {
        let cells = input.cells();
        for (i, source) in cells.iter().enumerate() {
            if !source.is_gas() || source.fill <= 0.0 {
                continue;
            }
            for (_, n) in input.horizontal_neighbours(i) {
                if cells[n].is_solid() {
                    continue;
                }
                let out = working.cells_mut();
                let have = out[i].fill;
                let other = out[n].fill;
                if other >= have {
                    continue;
                }
                let offer = (have / SPREAD_DIVISOR).min(have).min(CAPACITY - other);
                if offer <= 0.0 {
                    continue;
                }
                out[n].fill += offer;
                out[n].kind = CellKind::Gas;
                out[i].fill -= offer;
            }
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
        execute_phase(&GasDiffusion, &mut arena);
        arena.into_published()
    }

    #[test]
    fn left_offer_is_made_before_right() {
        let out = run(layout(&[".o."]));
        // Left takes a third of 1.0; right a third of what is left.
        let left = 1.0 / 3.0;
        let right = (1.0 - left) / 3.0;
        assert_close(fill_at(&out, 0, 0), left, 1e-12);
        assert_close(fill_at(&out, 0, 2), right, 1e-12);
        assert_close(fill_at(&out, 0, 1), 1.0 - left - right, 1e-12);
        assert_eq!(out.cell_at(0, 0).unwrap().kind, CellKind::Gas);
        assert_eq!(out.cell_at(0, 2).unwrap().kind, CellKind::Gas);
    }

    #[test]
    fn cells_converted_this_pass_do_not_spread_yet() {
        let out = run(layout(&["o.."]));
        // Column 1 was liquid in the input, so it is not a source this pass.
        assert_close(fill_at(&out, 0, 0), 2.0 / 3.0, 1e-12);
        assert_close(fill_at(&out, 0, 1), 1.0 / 3.0, 1e-12);
        assert_eq!(fill_at(&out, 0, 2), 0.0);
    }

    #[test]
    fn later_source_sees_earlier_offers() {
        let out = run(layout(&["o*."]));
        // Column 0 pushes 1/3 right (column 1 -> 5/6). Column 1 then pushes
        // 5/18 back left and a third of the remaining 5/9 right.
        assert_close(fill_at(&out, 0, 0), 17.0 / 18.0, 1e-12);
        assert_close(fill_at(&out, 0, 1), 10.0 / 27.0, 1e-12);
        assert_close(fill_at(&out, 0, 2), 5.0 / 27.0, 1e-12);
        assert_close(out.total_fill(), 1.5, 1e-12);
    }

    #[test]
    fn solid_neighbours_skipped() {
        let g = layout(&["#o#"]);
        assert_eq!(run(g.clone()), g);
    }

    #[test]
    fn offer_capped_by_free_space() {
        let mut g = layout(&["o~"]);
        g.set_cell(0, 1, CellKind::Liquid, 0.9).unwrap();
        let out = run(g);
        assert_close(fill_at(&out, 0, 1), 1.0, 1e-12);
        assert_close(fill_at(&out, 0, 0), 0.9, 1e-12);
        assert_eq!(out.cell_at(0, 1).unwrap().kind, CellKind::Gas);
    }

    #[test]
    fn over_capacity_neighbour_gets_nothing() {
        let mut g = layout(&["o~"]);
        g.set_cell(0, 0, CellKind::Gas, 1.5).unwrap();
        g.set_cell(0, 1, CellKind::Liquid, 1.2).unwrap();
        assert_eq!(run(g.clone()), g);
    }

    #[test]
    fn empty_gas_is_inert() {
        let mut g = layout(&["..."]);
        g.set_cell(0, 1, CellKind::Gas, 0.0).unwrap();
        assert_eq!(run(g.clone()), g);
    }
}
