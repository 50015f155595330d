//! Lateral equalization: liquid that cannot fall spreads sideways.

use seep_grid::Grid;
use seep_phase::Phase;

pub(crate) const NAME: &str = "lateral_equalization";

/// Share of a fill difference moved towards a lower neighbour per tick.
/// Dividing by three damps the exchange so neighbours converge instead of
/// oscillating.
pub const DAMPING: f64 = 3.0;

/// Spreads liquid left and right where it cannot fall any further.
///
/// Applies to a liquid cell whose downward escape is blocked: it sits on
/// the bottom row, on a solid, or on a cell already holding at least as
/// much fill. Each horizontal liquid neighbour holding strictly less then
/// receives `(source − neighbour) / 3`. A near-empty source (below the
/// emptiness threshold) compares against 0 instead of the neighbour's fill,
/// as does any gas neighbour; gas neighbours still never receive liquid.
///
/// Both sides are computed against the same frozen snapshot and both may
/// fire in one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct LateralEqualization;

fn blocked_below(input: &Grid, index: usize) -> bool {
    let cells = input.cells();
    match input.below(index) {
        None => true,
        Some(b) => cells[b].is_solid() || cells[b].fill >= cells[index].fill,
    }
}

impl Phase for LateralEqualization {
    fn name(&self) -> &str {
        NAME
    }

    fn apply(&self, input: &Grid, working: &mut Grid) {
        let cells = input.cells();
        for (i, source) in cells.iter().enumerate() {
            if !source.is_liquid() || !blocked_below(input, i) {
                continue;
            }
            for (_, n) in input.horizontal_neighbours(i) {
                let neighbour = &cells[n];
                let compared = if neighbour.is_gas() || source.is_effectively_empty() {
                    0.0
                } else {
                    neighbour.fill
                };
                if !neighbour.is_liquid() || compared >= source.fill {
                    continue;
                }
                let moved = (source.fill - compared) / DAMPING;
                let out = working.cells_mut();
                out[i].fill -= moved;
                out[n].fill += moved;
            }
        }
    }
}
