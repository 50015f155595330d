//! Gas buoyant rise.

use seep_core::CellKind;
use seep_grid::Grid;
use seep_phase::{Phase, ReadMode};

pub(crate) const NAME: &str = "gas_rise";

/// Moves gas into the cell above, the mirror image of [`GravityFlow`].
///
/// A gas cell with positive fill rises when it holds more than the cell
/// above and that cell is not solid. Free space above is `1 − above`: if
/// the whole source fits it all moves, otherwise exactly the free space
/// moves. The receiving cell becomes gas whatever it held before.
///
/// Fill levels are compared on the frozen input, but a target that the
/// working buffer already shows as gas with fill is skipped, so a cell is
/// never claimed twice in one pass. That guard makes the phase
/// [`ReadMode::Progressive`].
///
/// [`GravityFlow`]: crate::GravityFlow
#[derive(Clone, Copy, Debug, Default)]
pub struct GasRise;

impl Phase for GasRise {
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
            let Some(a) = input.above(i) else {
                continue;
            };
            let above = &cells[a];
            if above.is_solid() || source.fill <= above.fill {
                continue;
            }
            let claimed = &working.cells()[a];
            if claimed.is_gas() && claimed.fill > 0.0 {
                continue;
            }
            let free = above.free_space();
            if free <= 0.0 {
                continue;
            }
            let moved = if free >= source.fill { source.fill } else { free };
            let out = working.cells_mut();
            out[i].fill -= moved;
            out[a].fill += moved;
            out[a].kind = CellKind::Gas;
        }
    }
}
