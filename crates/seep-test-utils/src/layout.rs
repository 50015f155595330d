//! Text layouts for building small grids by hand.
//!
//! One character per cell, one string per row:
//!
//! | Char | Cell |
//! |------|------|
//! | `#`  | Solid, fill 1.0 |
//! | `.`  | Liquid, fill 0.0 |
//! | `-`  | Liquid, fill 0.5 |
//! | `~`  | Liquid, fill 1.0 |
//! | `*`  | Gas, fill 0.5 |
//! | `o`  | Gas, fill 1.0 |

use seep_core::CellKind;
use seep_grid::Grid;

fn decode(ch: char) -> Option<(CellKind, f64)> {
    match ch {
        '#' => Some((CellKind::Solid, 1.0)),
        '.' => Some((CellKind::Liquid, 0.0)),
        '-' => Some((CellKind::Liquid, 0.5)),
        '~' => Some((CellKind::Liquid, 1.0)),
        '*' => Some((CellKind::Gas, 0.5)),
        'o' => Some((CellKind::Gas, 1.0)),
        _ => None,
    }
}

/// Build a grid from a text layout. Panics on ragged rows or unknown chars.
#[track_caller]
pub fn layout(rows: &[&str]) -> Grid {
    assert!(!rows.is_empty(), "layout needs at least one row");
    let cols = rows[0].chars().count();
    let mut grid = Grid::new(rows.len() as u32, cols as u32).expect("layout dimensions");
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count(), cols, "ragged layout row {r}");
        for (c, ch) in line.chars().enumerate() {
            let (kind, fill) =
                decode(ch).unwrap_or_else(|| panic!("unknown layout char {ch:?} at ({r}, {c})"));
            grid.set_cell(r as i32, c as i32, kind, fill)
                .expect("layout coordinate in bounds");
        }
    }
    grid
}

/// Render a grid back into layout characters, rounding fill to the
/// nearest layout level. Handy in assertion messages.
pub fn render_layout(grid: &Grid) -> Vec<String> {
    (0..grid.rows())
        .map(|r| {
            grid.row(r)
                .iter()
                .map(|cell| match cell.kind {
                    CellKind::Solid => '#',
                    CellKind::Liquid if cell.fill >= 0.75 => '~',
                    CellKind::Liquid if cell.fill >= 0.25 => '-',
                    CellKind::Liquid => '.',
                    CellKind::Gas if cell.fill >= 0.75 => 'o',
                    CellKind::Gas => '*',
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_round_trips_exact_levels() {
        let rows = ["~-.", "*o#"];
        let grid = layout(&rows);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(render_layout(&grid), vec!["~-.", "*o#"]);
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn ragged_rows_panic() {
        layout(&["..", "..."]);
    }
}
