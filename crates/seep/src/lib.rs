//! Seep: a cellular-automaton liquid and gas simulator on a fixed 2-D grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Seep sub-crates. For most users, adding `seep` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! // A 3x1 column: full liquid over empty liquid over a solid floor.
//! let mut grid = initialize(3, 1).unwrap();
//! grid.set_cell(0, 0, CellKind::Liquid, 1.0).unwrap();
//! grid.set_cell(2, 0, CellKind::Solid, 1.0).unwrap();
//!
//! let next = step(&grid);
//! assert_eq!(next.cell_at(1, 0).unwrap().fill, 1.0);
//!
//! // The same thing through a world with queued edits.
//! let config = WorldConfig { rows: 3, cols: 1, ..WorldConfig::default() };
//! let mut world = Simulation::new(config).unwrap();
//! let result = world.step_sync(vec![
//!     Edit::paint(0, 0, CellKind::Liquid),
//!     Edit::paint(2, 0, CellKind::Solid),
//! ]);
//! assert_eq!(result.grid, &next);
//! assert_eq!(world.current_tick(), TickId(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seep-core` | Cells, edits, receipts, IDs, error types |
//! | [`grid`] | `seep-grid` | Grid storage, neighbours, ping-pong buffers |
//! | [`phase`] | `seep-phase` | Phase trait and pipeline validation |
//! | [`phases`] | `seep-phases` | The five liquid and gas rules, `step` |
//! | [`engine`] | `seep-engine` | World, edit queue, brush, paint model |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`seep-core`).
///
/// Contains [`types::Cell`], [`types::CellKind`], [`types::Edit`],
/// receipts, and the error enums.
pub use seep_core as types;

/// Grid storage and double buffering (`seep-grid`).
pub use seep_grid as grid;

/// Phase trait and pipeline validation (`seep-phase`).
///
/// The [`phase::Phase`] trait is the extension point for custom rules.
pub use seep_phase as phase;

/// The standard rule phases (`seep-phases`).
pub use seep_phases as phases;

/// Simulation world, edit ingress and presentation (`seep-engine`).
pub use seep_engine as engine;

/// Common imports for typical Seep usage.
///
/// ```rust
/// use seep::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use seep_core::{Cell, CellKind, Edit, EditReceipt, TickId, CAPACITY, EMPTY_THRESHOLD};

    // Errors
    pub use seep_core::{EditError, GridError};
    pub use seep_phase::PipelineError;

    // Grid
    pub use seep_grid::{initialize, Grid, PingPongGrid};

    // Phases
    pub use seep_phase::{Phase, Pipeline, ReadMode};
    pub use seep_phases::{standard_pipeline, step};

    // Engine
    pub use seep_engine::{
        render_text, Brush, ConfigError, InputEvent, Painter, Simulation, StepMetrics,
        StepResult, WorldConfig,
    };
}
