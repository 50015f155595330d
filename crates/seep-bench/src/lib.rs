//! Benchmark profiles for the Seep fluid automaton.
//!
//! Provides pre-built worlds for benchmarking and examples:
//!
//! - [`reference_profile`]: the default 45x30 window
//! - [`stress_profile`]: 450x300 (135K cells)
//! - [`scenery`]: deterministic basins, liquid and gas via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seep_core::{CellKind, Edit};
use seep_engine::{ConfigError, Simulation, WorldConfig};

/// Columns between basin walls.
pub const BASIN_WIDTH: u32 = 9;

/// Default 45x30 window config.
pub fn reference_config() -> WorldConfig {
    WorldConfig::default()
}

/// 450x300 config, ten times the window in each direction.
pub fn stress_config() -> WorldConfig {
    WorldConfig {
        rows: 300,
        cols: 450,
        max_pending_edits: 300 * 450,
        ..WorldConfig::default()
    }
}

/// Edits that build a scene on a `rows × cols` grid.
///
/// A solid floor, basin walls every [`BASIN_WIDTH`] columns over the lower
/// half, liquid scattered through the top third and gas pockets in the
/// lower half. The same seed always yields the same edits.
pub fn scenery(rows: u32, cols: u32, seed: u64) -> Vec<Edit> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edits = Vec::new();
    let (rows, cols) = (rows as i32, cols as i32);
    for r in 0..rows {
        for c in 0..cols {
            let floor = r == rows - 1;
            let wall = r >= rows / 2 && c % BASIN_WIDTH as i32 == 0;
            if floor || wall {
                edits.push(Edit::paint(r, c, CellKind::Solid));
            } else if r < rows / 3 && rng.gen_bool(0.3) {
                edits.push(Edit::paint(r, c, CellKind::Liquid));
            } else if r > rows / 2 && rng.gen_bool(0.05) {
                edits.push(Edit::paint(r, c, CellKind::Gas));
            }
        }
    }
    edits
}

fn build(config: WorldConfig, seed: u64) -> Result<Simulation, ConfigError> {
    let (rows, cols) = (config.rows, config.cols);
    let mut world = Simulation::new(config)?;
    world.step_sync(scenery(rows, cols, seed));
    Ok(world)
}

/// A world on the reference config with [`scenery`] applied (tick 1).
pub fn reference_profile(seed: u64) -> Result<Simulation, ConfigError> {
    build(reference_config(), seed)
}

/// A world on the stress config with [`scenery`] applied (tick 1).
pub fn stress_profile(seed: u64) -> Result<Simulation, ConfigError> {
    build(stress_config(), seed)
}
