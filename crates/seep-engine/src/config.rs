//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the input for constructing a [`Simulation`]. It sizes
//! the grid and carries the presentation settings a driver needs, so a
//! single value describes the whole window. [`validate()`] checks it once
//! at construction.
//!
//! [`Simulation`]: crate::Simulation
//! [`validate()`]: WorldConfig::validate

use std::error::Error;
use std::fmt;
use std::time::Duration;

use seep_core::GridError;
use seep_grid::Grid;
use seep_phase::PipelineError;

use crate::paint::{FillMode, Painter, Palette};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`WorldConfig`] or building a world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions are unusable.
    Grid(GridError),
    /// The phase list failed validation.
    Pipeline(PipelineError),
    /// `cell_size` is zero.
    ZeroCellSize,
    /// `max_pending_edits` is zero.
    EditQueueZero,
    /// The pixel surface does not fit [`WorldConfig::MAX_SURFACE`].
    SurfaceTooLarge {
        /// Surface width in pixels.
        width: u64,
        /// Surface height in pixels.
        height: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Pipeline(e) => write!(f, "pipeline: {e}"),
            Self::ZeroCellSize => write!(f, "cell_size must be at least 1 pixel"),
            Self::EditQueueZero => write!(f, "max_pending_edits must be at least 1"),
            Self::SurfaceTooLarge { width, height } => write!(
                f,
                "surface {width}x{height} px exceeds {} px per side",
                WorldConfig::MAX_SURFACE
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Pipeline(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<PipelineError> for ConfigError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation world.
///
/// The defaults describe a 900 × 600 pixel surface of 20-pixel cells.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Grid rows. Default: 30.
    pub rows: u32,
    /// Grid columns. Default: 45.
    pub cols: u32,
    /// Cell edge length in pixels. Default: 20.
    pub cell_size: u32,
    /// Grid line thickness in pixels; 0 draws no lines. Default: 2.
    pub grid_line_width: u32,
    /// Maximum edits buffered between ticks. Default: 1024.
    pub max_pending_edits: usize,
    /// Target delay between frames, for drivers. Default: 16 ms.
    pub frame_interval: Duration,
    /// Presentation colours.
    pub palette: Palette,
    /// How liquid cells are drawn. Default: [`FillMode::Flood`].
    pub fill_mode: FillMode,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 45,
            cell_size: 20,
            grid_line_width: 2,
            max_pending_edits: 1024,
            frame_interval: Duration::from_millis(16),
            palette: Palette::default(),
            fill_mode: FillMode::default(),
        }
    }
}

impl WorldConfig {
    /// Largest surface side in pixels. Keeps pixel coordinates within
    /// `i32` so the brush can address every cell.
    pub const MAX_SURFACE: u32 = i32::MAX as u32;

    /// Size the grid to cover a `width × height` pixel surface.
    ///
    /// Partial cells at the right and bottom edges are dropped. A zero
    /// `cell_size` yields a config that fails [`validate()`](Self::validate).
    pub fn with_surface(width: u32, height: u32, cell_size: u32) -> Self {
        Self {
            rows: height.checked_div(cell_size).unwrap_or(0),
            cols: width.checked_div(cell_size).unwrap_or(0),
            cell_size,
            ..Self::default()
        }
    }

    /// Pixel size `(width, height)` of the surface the grid covers.
    pub fn surface_size(&self) -> (u64, u64) {
        (
            self.cols as u64 * self.cell_size as u64,
            self.rows as u64 * self.cell_size as u64,
        )
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must be non-empty and addressable with i32 coordinates.
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Grid(GridError::EmptyGrid));
        }
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value > Grid::MAX_DIM {
                return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Grid::MAX_DIM,
                }));
            }
        }
        // 2. Cells must be visible.
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        // 3. Surface pixels must fit the painter's u32 geometry.
        let (width, height) = self.surface_size();
        let max = u64::from(Self::MAX_SURFACE);
        if width > max || height > max {
            return Err(ConfigError::SurfaceTooLarge { width, height });
        }
        // 4. Edit queue >= 1.
        if self.max_pending_edits == 0 {
            return Err(ConfigError::EditQueueZero);
        }
        Ok(())
    }

    /// A [`Painter`] matching this configuration.
    pub fn painter(&self) -> Painter {
        Painter::new(
            self.cell_size,
            self.grid_line_width,
            self.palette,
            self.fill_mode,
        )
    }
}
