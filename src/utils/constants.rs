use crate::utils;

pub const DEFAULT_ARENA_CONFIG: utils::ArenaConfig = utils::ArenaConfig {
    half_width: 300.0,
    half_height: 300.0,
    ball_radius: 15.0,
    partition_size: 70.0,
    friction: 0.98,
    max_speed: 25.0,
    max_initial_speed: 20.0,
    population_probability: 0.5,
};
