//! Upward pressure release for liquid above capacity.

use seep_core::CAPACITY;
use seep_grid::Grid;
use seep_phase::Phase;

pub(crate) const NAME: &str = "pressure_release";

/// Pushes liquid held above capacity into the liquid cell above.
///
/// A liquid cell with `fill > 1` under a liquid cell holding strictly less
/// hands over exactly `fill − 1`, leaving itself at capacity. The receiver
/// may end up above capacity in turn; that is resolved on a later tick,
/// never within this one.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressureRelease;

impl Phase for PressureRelease {
    fn name(&self) -> &str {
        NAME
    }

    fn apply(&self, input: &Grid, working: &mut Grid) {
        let cells = input.cells();
        for (i, source) in cells.iter().enumerate() {
            if !source.is_liquid() || source.fill <= CAPACITY {
                continue;
            }
            let Some(a) = input.above(i) else {
                continue;
            };
            let above = &cells[a];
            if !above.is_liquid() || above.fill >= source.fill {
                continue;
            }
            let excess = source.fill - CAPACITY;
            let out = working.cells_mut();
            out[i].fill -= excess;
            out[a].fill += excess;
        }
    }
}
