//! The fixed-size [`Grid`] of cells.

use seep_core::{Cell, CellKind, Edit, EditError, GridError};

/// A fixed `rows × cols` array of cells, stored row-major.
///
/// Dimensions are chosen once at construction and never change. Every
/// coordinate maps to exactly one [`Cell`], whose stored coordinates always
/// agree with its position; only `kind` and `fill` are ever mutated.
///
/// # Examples
///
/// ```
/// use seep_core::CellKind;
/// use seep_grid::initialize;
///
/// let mut grid = initialize(3, 4).unwrap();
/// assert_eq!(grid.len(), 12);
/// assert_eq!(grid.cell_at(0, 0).unwrap().kind, CellKind::Liquid);
///
/// grid.set_cell(2, 1, CellKind::Solid, 1.0).unwrap();
/// assert!(grid.cell_at(2, 1).unwrap().is_solid());
///
/// // Out-of-bounds coordinates are rejected.
/// assert!(grid.set_cell(3, 0, CellKind::Gas, 1.0).is_err());
/// assert!(grid.cell_at(-1, 0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

/// Create an all-liquid, zero-fill grid of `rows × cols` cells.
///
/// Equivalent to [`Grid::new`].
pub fn initialize(rows: u32, cols: u32) -> Result<Grid, GridError> {
    Grid::new(rows, cols)
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-liquid, zero-fill grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(Cell::new(r, c, CellKind::Liquid, 0.0));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat row-major index of `(row, col)`, or an error if outside the grid.
    pub fn index_of(&self, row: i32, col: i32) -> Result<usize, GridError> {
        if row < 0 || col < 0 || row as u32 >= self.rows || col as u32 >= self.cols {
            return Err(GridError::CoordOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row as usize * self.cols as usize + col as usize)
    }

    /// `(row, col)` of a flat index. The index must be in range.
    pub fn coords_of(&self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((index / cols) as u32, (index % cols) as u32)
    }

    /// Read the cell at `(row, col)`.
    pub fn cell_at(&self, row: i32, col: i32) -> Result<Cell, GridError> {
        let i = self.index_of(row, col)?;
        Ok(self.cells[i])
    }

    /// Overwrite the cell at `(row, col)` wholesale.
    ///
    /// No validation is performed beyond the bounds check: `fill` is
    /// written as given. An out-of-bounds request leaves every cell
    /// untouched.
    pub fn set_cell(
        &mut self,
        row: i32,
        col: i32,
        kind: CellKind,
        fill: f64,
    ) -> Result<(), GridError> {
        let i = self.index_of(row, col)?;
        let cell = &mut self.cells[i];
        cell.kind = kind;
        cell.fill = fill;
        Ok(())
    }

    /// Apply a point edit.
    pub fn apply(&mut self, edit: &Edit) -> Result<(), EditError> {
        self.set_cell(edit.row, edit.col, edit.kind, edit.fill)?;
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to cell state in row-major order.
    ///
    /// Cell coordinates are private to [`Cell`], so this cannot break the
    /// position invariant.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// One row as a slice. The row must be in range.
    pub fn row(&self, row: u32) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Sum of every cell's fill, solids included.
    pub fn total_fill(&self) -> f64 {
        self.cells.iter().map(|c| c.fill).sum()
    }

    /// Sum of fill over cells of one kind.
    pub fn fill_of(&self, kind: CellKind) -> f64 {
        self.cells
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.fill)
            .sum()
    }

    /// Overwrite this grid's cells with those of `other`, reusing the
    /// existing allocation.
    ///
    /// # Panics
    ///
    /// Panics if the two grids differ in dimensions. A grid never changes
    /// size after construction.
    pub fn copy_from(&mut self, other: &Grid) {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "copy_from requires grids of equal dimensions"
        );
        self.cells.copy_from_slice(&other.cells);
    }

    /// Reset every cell to empty liquid.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.kind = CellKind::Liquid;
            cell.fill = 0.0;
        }
    }
}
