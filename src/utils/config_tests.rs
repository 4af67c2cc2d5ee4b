use crate::utils::{ArenaConfig, SimulationError, DEFAULT_ARENA_CONFIG};

#[test]
fn test_new_with_no_overrides_matches_default() {
    let config = ArenaConfig::new(None, None, None, None, None, None, None, None);
    assert_eq!(config.half_width, DEFAULT_ARENA_CONFIG.half_width);
    assert_eq!(config.friction, DEFAULT_ARENA_CONFIG.friction);
    assert_eq!(config.max_speed, DEFAULT_ARENA_CONFIG.max_speed);
    assert_eq!(config.population_probability, DEFAULT_ARENA_CONFIG.population_probability);
}

#[test]
fn test_default_config_validates() {
    assert!(ArenaConfig::default().validated().is_ok());
}

#[test]
fn test_validated_rejects_bad_dimensions() {
    let config = ArenaConfig { half_height: 0.0, ..ArenaConfig::default() };
    assert_eq!(config.validated().err(), Some(SimulationError::InvalidDimensions));

    let config = ArenaConfig { partition_size: -70.0, ..ArenaConfig::default() };
    assert_eq!(config.validated().err(), Some(SimulationError::InvalidDimensions));
}

#[test]
fn test_validated_rejects_bad_radius() {
    let config = ArenaConfig { ball_radius: 0.0, ..ArenaConfig::default() };
    assert_eq!(config.validated().err(), Some(SimulationError::InvalidRadius));
}

#[test]
fn test_validated_rejects_friction_outside_open_interval() {
    for friction in [0.0, 1.0, -0.5, 1.5] {
        let config = ArenaConfig { friction, ..ArenaConfig::default() };
        assert_eq!(config.validated().err(), Some(SimulationError::InvalidCoefficient));
    }
}

#[test]
fn test_validated_rejects_bad_speeds() {
    let config = ArenaConfig { max_speed: -25.0, ..ArenaConfig::default() };
    assert_eq!(config.validated().err(), Some(SimulationError::InvalidSpeed));

    let config = ArenaConfig { max_initial_speed: -1.0, ..ArenaConfig::default() };
    assert_eq!(config.validated().err(), Some(SimulationError::InvalidSpeed));

    // a zero initial speed range is allowed; every ball just spawns at rest
    let config = ArenaConfig { max_initial_speed: 0.0, ..ArenaConfig::default() };
    assert!(config.validated().is_ok());
}

#[test]
fn test_validated_rejects_bad_probability() {
    let config = ArenaConfig { population_probability: 1.1, ..ArenaConfig::default() };
    assert_eq!(config.validated().err(), Some(SimulationError::InvalidProbability));
}
