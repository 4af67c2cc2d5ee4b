// src/utils/config.rs
use crate::utils::{DEFAULT_ARENA_CONFIG, errors::SimulationError};

/// Simulation constants for a billiards arena, fixed at initialization.
///
/// Coordinates are arena-centered: the play rectangle spans
/// `[-half_width, half_width] × [-half_height, half_height]`.
#[derive(Debug, Clone, Copy)]
pub struct ArenaConfig {
    pub half_width: f64,
    pub half_height: f64,
    pub ball_radius: f64,
    /// Side length of the square grid cells used to place balls at startup.
    /// Should be at least one ball diameter so spawns cannot overlap; this is
    /// the caller's responsibility and is not enforced.
    pub partition_size: f64,
    /// Per-tick velocity retention factor, strictly between 0 and 1.
    pub friction: f64,
    pub max_speed: f64,
    /// Initial per-axis velocity is drawn uniformly from
    /// `[-max_initial_speed, max_initial_speed]`.
    pub max_initial_speed: f64,
    /// Chance that a grid cell is populated with a ball at startup.
    pub population_probability: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        DEFAULT_ARENA_CONFIG
    }
}

impl ArenaConfig {
    pub fn new(
        half_width: Option<f64>,
        half_height: Option<f64>,
        ball_radius: Option<f64>,
        partition_size: Option<f64>,
        friction: Option<f64>,
        max_speed: Option<f64>,
        max_initial_speed: Option<f64>,
        population_probability: Option<f64>,
    ) -> Self {
        let default = DEFAULT_ARENA_CONFIG;
        Self {
            half_width: half_width.unwrap_or(default.half_width),
            half_height: half_height.unwrap_or(default.half_height),
            ball_radius: ball_radius.unwrap_or(default.ball_radius),
            partition_size: partition_size.unwrap_or(default.partition_size),
            friction: friction.unwrap_or(default.friction),
            max_speed: max_speed.unwrap_or(default.max_speed),
            max_initial_speed: max_initial_speed.unwrap_or(default.max_initial_speed),
            population_probability: population_probability.unwrap_or(default.population_probability),
        }
    }

    /// Checks every configuration invariant, returning the config unchanged
    /// when all hold. Violations are fatal at initialization time only; the
    /// running simulation never re-validates.
    ///
    /// # Example
    /// ```
    /// use rs_billiards::utils::ArenaConfig;
    ///
    /// let config = ArenaConfig::default().validated().unwrap();
    /// assert_eq!(config.friction, 0.98);
    ///
    /// let bad = ArenaConfig { friction: 0.0, ..ArenaConfig::default() };
    /// assert!(bad.validated().is_err());
    /// ```
    pub fn validated(self) -> Result<Self, SimulationError> {
        if self.half_width <= 0.0 || self.half_height <= 0.0 {
            return Err(SimulationError::InvalidDimensions);
        }
        if self.ball_radius <= 0.0 {
            return Err(SimulationError::InvalidRadius);
        }
        if self.partition_size <= 0.0 {
            return Err(SimulationError::InvalidDimensions);
        }
        if self.friction <= 0.0 || self.friction >= 1.0 {
            return Err(SimulationError::InvalidCoefficient);
        }
        if self.max_speed <= 0.0 {
            return Err(SimulationError::InvalidSpeed);
        }
        if self.max_initial_speed < 0.0 {
            return Err(SimulationError::InvalidSpeed);
        }
        if !(0.0..=1.0).contains(&self.population_probability) {
            return Err(SimulationError::InvalidProbability);
        }
        Ok(self)
    }
}
