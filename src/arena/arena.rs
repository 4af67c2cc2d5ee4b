// src/arena/arena.rs

use log::{debug, warn};
use rand::Rng;

use crate::interactions::{elastic_collision, intersecting};
use crate::models::{Ball, BallSnapshot, Vector2D};
use crate::utils::{ArenaConfig, SimulationError};

/// The bounded rectangular play area. Owns every ball in a contiguous
/// collection addressed by index; physics steps are arena methods so balls
/// never hold a reference back to their surroundings.
#[derive(Debug, Clone)]
pub struct Arena {
    config: ArenaConfig,
    balls: Vec<Ball>,
}

impl Arena {
    /// Creates an empty arena.
    ///
    /// # Errors
    /// Configuration invariant violations are fatal here and only here; see
    /// [`ArenaConfig::validated`].
    pub fn new(config: ArenaConfig) -> Result<Self, SimulationError> {
        Ok(Arena {
            config: config.validated()?,
            balls: Vec::new(),
        })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn add_ball(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// Read-only per-ball views for the host's renderer.
    pub fn snapshots(&self) -> Vec<BallSnapshot> {
        self.balls.iter().map(Ball::snapshot).collect()
    }

    /// Subdivides the play rectangle into a uniform grid of
    /// `partition_size × partition_size` cells and populates a random subset
    /// of them, one ball per chosen cell. Spawn positions are inset from the
    /// cell edges by the ball radius, so no two spawns can overlap as long as
    /// the caller sized `partition_size` to at least one ball diameter.
    /// Initial velocity is uniform per axis in
    /// `[-max_initial_speed, max_initial_speed]`.
    pub fn populate(&mut self, rng: &mut impl Rng) {
        let config = self.config;
        let radius = config.ball_radius;
        let partition = config.partition_size;
        let spawned_before = self.balls.len();

        let mut cell_x = -config.half_width;
        while cell_x < config.half_width - partition {
            let mut cell_y = -config.half_height;
            while cell_y < config.half_height - partition {
                if rng.random_bool(config.population_probability) {
                    let velocity = Vector2D::new(
                        random_span(rng, config.max_initial_speed),
                        random_span(rng, config.max_initial_speed),
                    );
                    let position = Vector2D::new(
                        random_inset(rng, cell_x, partition, radius),
                        random_inset(rng, cell_y, partition, radius),
                    );
                    // radius was validated with the config
                    if let Ok(ball) = Ball::new(position, velocity, radius) {
                        self.balls.push(ball);
                    }
                }
                cell_y += partition;
            }
            cell_x += partition;
        }
        debug!("Populated arena with {} balls", self.balls.len() - spawned_before);
    }

    /// Advances every ball by exactly one step, in collection order. The
    /// iteration order is also the tie-break order for multi-way collisions;
    /// no fairness is guaranteed.
    pub fn tick(&mut self) {
        for index in 0..self.balls.len() {
            self.step_ball(index);
        }
    }

    fn step_ball(&mut self, index: usize) {
        let config = self.config;
        let mut ball = self.balls[index];

        // Wall collisions. The velocity component is reassigned to its
        // absolute value (with the inward sign) rather than negated: a ball
        // that stays inside the wall's collision band across several ticks
        // keeps being pushed inward, where negation would flip sign every
        // tick and never escape.
        if ball.position.x + ball.radius >= config.half_width {
            ball.velocity = ball.velocity.with_x(-ball.velocity.x.abs());
        } else if ball.position.x - ball.radius <= -config.half_width {
            ball.velocity = ball.velocity.with_x(ball.velocity.x.abs());
        }
        if ball.position.y + ball.radius >= config.half_height {
            ball.velocity = ball.velocity.with_y(-ball.velocity.y.abs());
        } else if ball.position.y - ball.radius <= -config.half_height {
            ball.velocity = ball.velocity.with_y(ball.velocity.y.abs());
        }

        // friction, applied unconditionally every tick
        ball.velocity = ball.velocity.scale(config.friction);

        // lower the velocity before moving if it exceeds the cap
        ball.velocity = ball.velocity.clamp_magnitude(config.max_speed);

        // update position
        ball.position = ball.position.plus(ball.velocity);
        self.balls[index] = ball;

        // Pairwise collision pass. The translation is undone before resolving
        // so the pair doesn't carry a deep interpenetration into the next
        // frame; with several simultaneous contacts the pushback can apply
        // more than once, an accepted approximation absent sub-stepping.
        for other_index in 0..self.balls.len() {
            if other_index == index {
                continue;
            }
            let current = self.balls[index];
            let other = self.balls[other_index];
            if !intersecting(&current, &other) {
                continue;
            }
            self.balls[index].position = current.position.minus(current.velocity);
            match elastic_collision(&self.balls[index], &other) {
                Ok((velocity_a, velocity_b)) => {
                    self.balls[index].velocity = velocity_a;
                    self.balls[other_index].velocity = velocity_b;
                }
                Err(error) => {
                    warn!(
                        "Skipping unresolvable collision between balls {} and {}: {}",
                        index, other_index, error
                    );
                }
            }
        }
    }

    /// Returns the index of the ball closest to `point` by Euclidean
    /// distance, via a single linear scan over the collection. Ties go to the
    /// first ball found. Returns `None` for an empty arena.
    ///
    /// # Example
    /// ```
    /// use rs_billiards::arena::Arena;
    /// use rs_billiards::models::{Ball, Vector2D};
    /// use rs_billiards::utils::ArenaConfig;
    ///
    /// let mut arena = Arena::new(ArenaConfig::default()).unwrap();
    /// arena.add_ball(Ball::new(Vector2D::new(100.0, 0.0), Vector2D::ZERO, 15.0).unwrap());
    /// arena.add_ball(Ball::new(Vector2D::new(5.0, 0.0), Vector2D::ZERO, 15.0).unwrap());
    /// assert_eq!(arena.select_nearest(Vector2D::ZERO), Some(1));
    /// ```
    pub fn select_nearest(&self, point: Vector2D) -> Option<usize> {
        let mut nearest = None;
        let mut best_distance = f64::INFINITY;
        for (index, ball) in self.balls.iter().enumerate() {
            let distance = ball.position.distance_squared(point);
            if distance < best_distance {
                best_distance = distance;
                nearest = Some(index);
            }
        }
        nearest
    }

    /// Adds `delta` to the indexed ball's velocity, unconditionally. No speed
    /// clamp is applied here; the cap is enforced lazily on the next tick.
    ///
    /// # Errors
    /// Returns `SimulationError::EmptyArena` when no ball exists at `index`.
    pub fn apply_impulse(&mut self, index: usize, delta: Vector2D) -> Result<(), SimulationError> {
        let ball = self.balls.get_mut(index).ok_or(SimulationError::EmptyArena)?;
        ball.velocity = ball.velocity.plus(delta);
        Ok(())
    }

    /// Sum of per-ball kinetic energy, for host diagnostics.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }

    /// Vector sum of per-ball momentum, for host diagnostics.
    pub fn total_momentum(&self) -> Vector2D {
        self.balls
            .iter()
            .fold(Vector2D::ZERO, |sum, ball| sum.plus(ball.momentum()))
    }
}

fn random_span(rng: &mut impl Rng, half_span: f64) -> f64 {
    if half_span == 0.0 {
        return 0.0;
    }
    rng.random_range(-half_span..=half_span)
}

fn random_inset(rng: &mut impl Rng, cell_start: f64, partition: f64, radius: f64) -> f64 {
    let lower = cell_start + radius;
    let upper = cell_start + partition - radius;
    if upper <= lower {
        // partition smaller than one ball diameter; fall back to the center
        warn!("Partition size {} cannot inset radius {}; spawning at cell center", partition, radius);
        return cell_start + partition / 2.0;
    }
    rng.random_range(lower..upper)
}
