//! Pure mapping from grid state to coloured rectangles.
//!
//! The painter never mutates the grid. Fill is clamped to `[0, 1]` for
//! display only; the simulated value is left alone.

use seep_core::{Cell, CellKind, EMPTY_THRESHOLD};
use seep_grid::Grid;
use smallvec::{smallvec, SmallVec};

// ── Colour ─────────────────────────────────────────────────────────

/// A packed `0xRRGGBB` colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    /// `0x000000`.
    pub const BLACK: Rgb = Rgb(0x000000);
    /// `0xffffff`.
    pub const WHITE: Rgb = Rgb(0xffffff);

    /// Pack three channels.
    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Unpack into `(r, g, b)`.
    pub fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// Channel-wise linear interpolation from `self` (at `t = 0`) to `to`
    /// (at `t = 1`). `t` is clamped to `[0, 1]`; NaN counts as 0.
    pub fn lerp(self, to: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let (r1, g1, b1) = self.channels();
        let (r2, g2, b2) = to.channels();
        let mix = |a: u8, b: u8| ((b as f64 - a as f64) * t + a as f64) as u8;
        Rgb::from_channels(mix(r1, r2), mix(g1, g2), mix(b1, b2))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Colours used by the [`Painter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Cell background, also used for near-empty liquid.
    pub background: Rgb,
    /// Liquid colour at fill 0.
    pub liquid_shallow: Rgb,
    /// Liquid colour at fill 1.
    pub liquid_deep: Rgb,
    /// Solid cells.
    pub solid: Rgb,
    /// Gas colour at fill 0.
    pub gas_thin: Rgb,
    /// Gas colour at fill 1.
    pub gas_dense: Rgb,
    /// Grid lines drawn over the cells.
    pub grid_line: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            liquid_shallow: Rgb(0xff0000),
            liquid_deep: Rgb(0xf05b5b),
            solid: Rgb::WHITE,
            gas_thin: Rgb::WHITE,
            gas_dense: Rgb(0x1912ff),
            grid_line: Rgb(0x0f0f0f),
        }
    }
}

// ── Rectangles ─────────────────────────────────────────────────────

/// How liquid cells are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillMode {
    /// A bar anchored at the cell bottom, `min(fill, 1) × cell_size` tall.
    Level,
    /// The whole cell in the fill colour.
    #[default]
    Flood,
}

/// An axis-aligned filled rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Fill colour.
    pub color: Rgb,
}

/// Maps cells to rectangles for a pixel surface.
///
/// # Examples
///
/// ```
/// use seep_core::CellKind;
/// use seep_engine::{FillMode, Painter, Palette, Rgb};
/// use seep_grid::initialize;
///
/// let mut grid = initialize(1, 1).unwrap();
/// grid.set_cell(0, 0, CellKind::Gas, 0.5).unwrap();
///
/// let painter = Painter::new(20, 2, Palette::default(), FillMode::Level);
/// let rects = painter.paint_cell(&grid.cell_at(0, 0).unwrap());
/// assert_eq!(rects[0].color, Rgb::BLACK);
/// assert_eq!((rects[1].y, rects[1].height), (10, 10));
/// ```
#[derive(Clone, Debug)]
pub struct Painter {
    cell_size: u32,
    line_width: u32,
    palette: Palette,
    mode: FillMode,
}

impl Painter {
    /// A painter for square cells of `cell_size` pixels.
    ///
    /// Pixel positions are `u32`; painted grids must satisfy the surface
    /// limit that [`WorldConfig::validate`](crate::WorldConfig::validate)
    /// enforces.
    pub fn new(cell_size: u32, line_width: u32, palette: Palette, mode: FillMode) -> Self {
        Self {
            cell_size,
            line_width,
            palette,
            mode,
        }
    }

    /// Cell edge length in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// The active palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The liquid drawing mode.
    pub fn mode(&self) -> FillMode {
        self.mode
    }

    /// Colour of a cell's contents, or `None` when only the background
    /// shows.
    pub fn cell_color(&self, cell: &Cell) -> Option<Rgb> {
        let p = &self.palette;
        match cell.kind {
            CellKind::Solid => Some(p.solid),
            CellKind::Liquid if cell.fill < EMPTY_THRESHOLD => None,
            CellKind::Liquid => Some(p.liquid_shallow.lerp(p.liquid_deep, cell.display_fill())),
            CellKind::Gas => Some(p.gas_thin.lerp(p.gas_dense, cell.display_fill())),
        }
    }

    /// Background plus contents for one cell, in draw order.
    pub fn paint_cell(&self, cell: &Cell) -> SmallVec<[Rect; 2]> {
        let size = self.cell_size;
        let x = cell.col() * size;
        let y = cell.row() * size;
        let mut rects: SmallVec<[Rect; 2]> = smallvec![Rect {
            x,
            y,
            width: size,
            height: size,
            color: self.palette.background,
        }];
        let Some(color) = self.cell_color(cell) else {
            return rects;
        };
        let full = cell.is_solid() || (cell.is_liquid() && self.mode == FillMode::Flood);
        let height = if full {
            size
        } else {
            (cell.display_fill() * size as f64) as u32
        };
        if height > 0 {
            rects.push(Rect {
                x,
                y: y + size - height,
                width: size,
                height,
                color,
            });
        }
        rects
    }

    /// Grid lines for a `rows × cols` surface: one vertical strip per
    /// column, then one horizontal strip per row.
    pub fn grid_lines(&self, rows: u32, cols: u32) -> Vec<Rect> {
        let width = cols * self.cell_size;
        let height = rows * self.cell_size;
        let color = self.palette.grid_line;
        let columns = (0..cols).map(|c| Rect {
            x: c * self.cell_size,
            y: 0,
            width: self.line_width,
            height,
            color,
        });
        let lines = (0..rows).map(|r| Rect {
            x: 0,
            y: r * self.cell_size,
            width,
            height: self.line_width,
            color,
        });
        columns.chain(lines).collect()
    }

    /// Every rectangle needed to draw `grid`, cells first, lines on top.
    pub fn paint(&self, grid: &Grid) -> Vec<Rect> {
        let mut out: Vec<Rect> = grid
            .cells()
            .iter()
            .flat_map(|cell| self.paint_cell(cell))
            .collect();
        if self.line_width > 0 {
            out.extend(self.grid_lines(grid.rows(), grid.cols()));
        }
        out
    }
}

// ── Text ───────────────────────────────────────────────────────────

fn glyph(cell: &Cell) -> char {
    let fill = cell.display_fill();
    match cell.kind {
        CellKind::Solid => '#',
        CellKind::Liquid if cell.fill < EMPTY_THRESHOLD => ' ',
        CellKind::Liquid if fill < 0.35 => '.',
        CellKind::Liquid if fill < 0.7 => '-',
        CellKind::Liquid => '~',
        CellKind::Gas if fill <= 0.0 => ' ',
        CellKind::Gas if fill < 0.75 => 'o',
        CellKind::Gas => 'O',
    }
}

/// Render `grid` as one line of text per row, for terminals and logs.
///
/// `#` is solid; liquid shows as `.`, `-`, `~` with rising fill; gas as
/// `o` then `O`. Near-empty liquid and empty gas are blank.
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
    for r in 0..grid.rows() {
        if r > 0 {
            out.push('\n');
        }
        for cell in grid.row(r) {
            out.push(glyph(cell));
        }
    }
    out
}
