//! Seep Quickstart: a small tank built with the brush, run in the terminal.
//!
//! Demonstrates:
//!   1. Building a WorldConfig and Simulation
//!   2. Driving a Brush with pointer and key events
//!   3. Stepping at the configured frame interval, reading receipts and metrics
//!   4. Rendering the grid as text and resetting
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use std::thread;
use std::time::{Duration, Instant};

use seep_core::{CellKind, Edit};
use seep_engine::{render_text, Brush, InputEvent, Simulation, WorldConfig};

// ─── Tank parameters ────────────────────────────────────────────

const ROWS: u32 = 12;
const COLS: u32 = 20;
const CELL: u32 = 10;
const TICKS: u32 = 120;

/// Pixel centre of cell `(row, col)`.
fn centre(row: u32, col: u32) -> (i32, i32) {
    ((col * CELL + CELL / 2) as i32, (row * CELL + CELL / 2) as i32)
}

/// Feed a held-button drag through the brush.
fn drag(brush: &mut Brush, cells: impl IntoIterator<Item = (u32, u32)>) -> Vec<Edit> {
    cells
        .into_iter()
        .filter_map(|(r, c)| {
            let (x, y) = centre(r, c);
            brush.handle(InputEvent::Motion { x, y, held: true })
        })
        .collect()
}

/// Sleep out the rest of a frame that began at `started`.
fn pace(frame: Duration, started: Instant) {
    thread::sleep(frame.saturating_sub(started.elapsed()));
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Seep Quickstart ===\n");

    let config = WorldConfig {
        rows: ROWS,
        cols: COLS,
        cell_size: CELL,
        ..WorldConfig::default()
    };
    let frame = config.frame_interval;
    let mut brush = Brush::from_config(&config);
    let mut world = Simulation::new(config)?;
    println!("Phases: {:?}", world.pipeline().names());
    println!("Order-dependent: {:?}\n", world.pipeline().order_dependent());

    // Tank: floor, two walls and a shelf, painted in solid.
    let mut edits = drag(&mut brush, (0..COLS).map(|c| (ROWS - 1, c)));
    edits.extend(drag(&mut brush, (4..ROWS).map(|r| (r, 0))));
    edits.extend(drag(&mut brush, (4..ROWS).map(|r| (r, COLS - 1))));
    edits.extend(drag(&mut brush, (1..8).map(|c| (6, c))));

    // Liquid poured onto the shelf.
    brush.handle(InputEvent::CycleKind);
    edits.extend(drag(&mut brush, (2..6).map(|c| (2, c))));

    // A gas pocket under the shelf.
    brush.handle(InputEvent::CycleKind);
    edits.extend(drag(&mut brush, (9..11).map(|r| (r, 3))));

    let result = world.step_sync(edits);
    let applied = result.receipts.iter().filter(|r| r.accepted).count();
    println!("Applied {applied} edits at tick {}", world.current_tick());

    for _ in 1..TICKS {
        let started = Instant::now();
        let result = world.step_sync(Vec::new());
        if result.metrics.total_us > 1_000 {
            println!("slow tick: {:?}", result.metrics.phase_us);
        }
        pace(frame, started);
    }

    let m = world.last_metrics();
    println!(
        "\nTick {}: liquid {:.3}, gas {:.3}, total {:.3}",
        world.current_tick(),
        world.grid().fill_of(CellKind::Liquid),
        world.grid().fill_of(CellKind::Gas),
        m.total_fill
    );
    println!("{}", render_text(world.grid()));

    // Erase part of the shelf and let it drain.
    brush.handle(InputEvent::ToggleErase);
    let edits = drag(&mut brush, [(6, 6), (6, 7)]);
    for tick in 0..TICKS {
        let started = Instant::now();
        let edits = if tick == 0 { edits.clone() } else { Vec::new() };
        world.step_sync(edits);
        pace(frame, started);
    }
    println!("\nAfter opening the shelf (tick {}):", world.current_tick());
    println!("{}", render_text(world.grid()));

    world.reset();
    println!("\nReset, tick: {}", world.current_tick());
    println!("Done.");
    Ok(())
}
