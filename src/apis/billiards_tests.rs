use crate::apis::billiards::BilliardsTable;
use crate::utils::{ArenaConfig, SimulationError};

fn full_table() -> BilliardsTable {
    // probability 1.0 fills every grid cell, which keeps the layout
    // deterministic in count even though positions stay random
    let config = ArenaConfig { population_probability: 1.0, ..ArenaConfig::default() };
    BilliardsTable::with_config(config).unwrap()
}

fn expected_cell_count(config: &ArenaConfig) -> usize {
    let mut cells = 0;
    let mut x = -config.half_width;
    while x < config.half_width - config.partition_size {
        let mut y = -config.half_height;
        while y < config.half_height - config.partition_size {
            cells += 1;
            y += config.partition_size;
        }
        x += config.partition_size;
    }
    cells
}

#[test]
fn test_new_populates_the_table() {
    let table = full_table();
    assert_eq!(table.ball_count(), expected_cell_count(table.arena().config()));
    assert_eq!(table.snapshots().len(), table.ball_count());
}

#[test]
fn test_with_config_rejects_invalid_constants() {
    let config = ArenaConfig { max_speed: 0.0, ..ArenaConfig::default() };
    assert!(matches!(
        BilliardsTable::with_config(config),
        Err(SimulationError::InvalidSpeed)
    ));
}

#[test]
fn test_release_without_press() {
    let mut table = full_table();
    let result = table.pointer_release(10.0, 10.0);
    assert_eq!(result, Err(SimulationError::NoActiveStroke));
}

#[test]
fn test_press_then_release_strikes_a_ball() {
    let mut table = full_table();
    let momentum_before = table.total_momentum();

    table.pointer_press(0.0, 0.0).unwrap();
    table.pointer_release(30.0, -20.0).unwrap();

    // exactly one ball received the drag delta as an impulse
    let momentum_after = table.total_momentum();
    let delta = momentum_after.minus(momentum_before);
    crate::assert_float_eq(delta.x, 30.0, 1e-9, None);
    crate::assert_float_eq(delta.y, -20.0, 1e-9, None);
}

#[test]
fn test_release_consumes_the_stroke() {
    let mut table = full_table();
    table.pointer_press(0.0, 0.0).unwrap();
    table.pointer_release(10.0, 0.0).unwrap();

    // the stroke is spent; a second release has nothing to complete
    let result = table.pointer_release(10.0, 0.0);
    assert_eq!(result, Err(SimulationError::NoActiveStroke));
}

#[test]
fn test_new_press_overwrites_dangling_stroke() {
    let mut table = full_table();
    let momentum_before = table.total_momentum();

    table.pointer_press(-100.0, -100.0).unwrap();
    table.pointer_press(0.0, 0.0).unwrap();
    table.pointer_release(15.0, 0.0).unwrap();

    // only the second press took effect
    let delta = table.total_momentum().minus(momentum_before);
    crate::assert_float_eq(delta.x, 15.0, 1e-9, None);
    crate::assert_float_eq(delta.y, 0.0, 1e-9, None);
}

#[test]
fn test_tick_runs_every_frame() {
    let mut table = full_table();
    let energy_before = table.total_kinetic_energy();
    for _ in 0..10 {
        table.tick();
    }
    // friction drains energy; no frame adds any without a stroke
    assert!(table.total_kinetic_energy() <= energy_before);
}

#[test]
fn test_rerack_discards_pending_stroke() {
    let mut table = full_table();
    table.pointer_press(0.0, 0.0).unwrap();
    table.rerack().unwrap();

    assert_eq!(table.ball_count(), expected_cell_count(table.arena().config()));
    let result = table.pointer_release(10.0, 0.0);
    assert_eq!(result, Err(SimulationError::NoActiveStroke));
}
