//! End-to-end runs against the simulated sonar robot.

mod common;

use common::config_with_cycles;
use dhwani_map::io::load_global_map;
use dhwani_map::{CellGeometry, GridCoord, WorldPoint};
use dhwani_nav::{ControlLoop, SimulatedRobot, StopReason, StopSignal};

#[test]
fn test_simulated_run_maps_room() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("robot_map.dat");

    let config = config_with_cycles(400);
    let robot = SimulatedRobot::new(&config.simulation).unwrap();
    let mut control = ControlLoop::new(&config, robot)
        .unwrap()
        .with_export(&path, config.output.field_width);

    let summary = control.run(&StopSignal::new()).unwrap();
    assert_eq!(summary.cycles, 400);
    assert_eq!(summary.stop_reason, StopReason::CycleBudget);
    assert!(summary.samples_used > 0);
    assert!(summary.map.occupied_count() > 0);
    // The room fits inside the grid with the default start offset
    assert_eq!(summary.merge.votes_dropped, 0);
    assert_eq!(summary.coverage.occupied_cells, summary.map.occupied_count());

    let robot = control.robot();
    assert_eq!(robot.steps(), 400);
    assert_eq!(robot.linear_velocity(), 0.0);

    let loaded = load_global_map(&path, config.grid.width, config.grid.height).unwrap();
    assert_eq!(loaded, summary.map);
}

#[test]
fn test_no_occupied_cells_at_start_position() {
    let config = config_with_cycles(300);
    let robot = SimulatedRobot::new(&config.simulation).unwrap();
    let mut control = ControlLoop::new(&config, robot).unwrap();
    let summary = control.run(&StopSignal::new()).unwrap();

    // Nearest surface is 1500 from the start; nothing should be marked near it
    let geometry = CellGeometry::from_config(&config.grid);
    let start = config.control.start_offset();
    for x in 0..config.grid.width as i32 {
        for y in 0..config.grid.height as i32 {
            let coord = GridCoord::new(x, y);
            if summary.map.is_occupied(coord) {
                let center: WorldPoint = geometry.cell_center(coord);
                assert!(
                    center.distance(&start) > 300.0,
                    "cell ({x}, {y}) occupied next to the start position"
                );
            }
        }
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = config_with_cycles(150);

    let run = || {
        let robot = SimulatedRobot::new(&config.simulation).unwrap();
        let mut control = ControlLoop::new(&config, robot).unwrap();
        control.run(&StopSignal::new()).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.map, second.map);
    assert_eq!(first.samples_used, second.samples_used);
}
