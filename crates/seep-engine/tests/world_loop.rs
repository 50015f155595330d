//! Driver-style loops: input events in, ticks, paint out.

use seep_core::{CellKind, Edit, TickId};
use seep_engine::{render_text, Brush, InputEvent, Simulation, WorldConfig};
use seep_test_utils::{assert_close, random_sealed_grid};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn small_world(rows: u32, cols: u32) -> (Simulation, WorldConfig) {
    let config = WorldConfig {
        rows,
        cols,
        cell_size: 10,
        ..WorldConfig::default()
    };
    (Simulation::new(config.clone()).unwrap(), config)
}

fn drag(brush: &mut Brush, points: &[(i32, i32)]) -> Vec<Edit> {
    points
        .iter()
        .filter_map(|&(x, y)| brush.handle(InputEvent::Motion { x, y, held: true }))
        .collect()
}

#[test]
fn painted_basin_holds_its_water() {
    init_logging();
    let (mut world, config) = small_world(6, 5);
    let mut brush = Brush::from_config(&config);

    // Floor and walls in solid.
    let mut walls: Vec<(i32, i32)> = (0..5).map(|c| (c * 10 + 5, 55)).collect();
    walls.extend((0..5).map(|r| (5, r * 10 + 5)));
    walls.extend((0..5).map(|r| (45, r * 10 + 5)));
    let edits = drag(&mut brush, &walls);
    world.step_sync(edits);

    // Two full cells of liquid near the top.
    brush.handle(InputEvent::CycleKind);
    let edits = drag(&mut brush, &[(15, 5), (25, 5)]);
    world.step_sync(edits);

    for _ in 0..300 {
        world.step_sync(Vec::new());
    }

    let grid = world.grid();
    assert_close(grid.fill_of(CellKind::Liquid), 2.0, 1e-9);
    // Everything drained out of the top rows into the basin.
    for c in 1..4 {
        assert!(grid.cell_at(0, c).unwrap().fill < 1e-9);
    }
    let bottom: f64 = (1..4).map(|c| grid.cell_at(4, c).unwrap().fill).sum();
    assert!(bottom > 1.5, "bottom row holds {bottom}");
}

#[test]
fn erase_stroke_removes_fill() {
    init_logging();
    let (mut world, config) = small_world(3, 3);
    let mut brush = Brush::from_config(&config);

    world.step_sync(drag(&mut brush, &[(5, 5), (15, 5), (25, 5)]));
    assert_eq!(world.grid().fill_of(CellKind::Solid), 3.0);

    brush.handle(InputEvent::ToggleErase);
    let result = world.step_sync(drag(&mut brush, &[(15, 5)]));
    assert_eq!(result.grid.cell_at(0, 1).unwrap().kind, CellKind::Liquid);
    assert_eq!(result.metrics.total_fill, 2.0);
}

#[test]
fn strokes_off_the_surface_are_rejected() {
    init_logging();
    let (mut world, config) = small_world(2, 2);
    let mut brush = Brush::from_config(&config);
    let result = world.step_sync(drag(&mut brush, &[(-3, 5), (25, 5)]));
    assert_eq!(result.receipts.len(), 2);
    assert!(result.receipts.iter().all(|r| !r.accepted));
    assert_eq!(result.metrics.edits_rejected, 2);
    assert_eq!(result.grid.total_fill(), 0.0);
}

#[test]
fn sealed_world_conserves_fill_for_many_ticks() {
    init_logging();
    let (mut world, _) = small_world(12, 16);
    let start = random_sealed_grid(12, 16, 0x5eed, 1.0);
    for cell in start.cells() {
        world
            .set_cell(cell.row() as i32, cell.col() as i32, cell.kind, cell.fill)
            .unwrap();
    }
    let total = world.grid().total_fill();
    for _ in 0..500 {
        let result = world.step_sync(Vec::new());
        assert!(result.grid.cells().iter().all(|c| c.fill >= 0.0));
    }
    assert_close(world.grid().total_fill(), total, 1e-8);
    assert_eq!(world.current_tick(), TickId(500));
}

#[test]
fn text_render_tracks_the_world() {
    init_logging();
    let (mut world, _) = small_world(3, 1);
    world.set_cell(0, 0, CellKind::Liquid, 1.0).unwrap();
    world.set_cell(2, 0, CellKind::Solid, 1.0).unwrap();
    assert_eq!(render_text(world.grid()), "~\n \n#");
    world.step_sync(Vec::new());
    assert_eq!(render_text(world.grid()), " \n~\n#");
}
