use crate::models::Vector2D;
use crate::utils::SimulationError;

pub const WHITE: [u8; 3] = [255, 255, 255];

/// A circular body in the arena. Plain data record; all physics logic lives
/// in the arena and the interaction functions, so balls never reference
/// their surroundings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub radius: f64,
    pub color: [u8; 3],
}

/// The read-only per-ball view handed to the host's renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSnapshot {
    pub position: Vector2D,
    pub radius: f64,
    pub color: [u8; 3],
}

impl Ball {
    /// Creates a white ball.
    ///
    /// # Errors
    /// Returns `SimulationError::InvalidRadius` when `radius` is not positive.
    ///
    /// # Example
    /// ```
    /// use rs_billiards::models::{Ball, Vector2D};
    ///
    /// let ball = Ball::new(Vector2D::ZERO, Vector2D::new(3.0, 4.0), 15.0).unwrap();
    /// assert_eq!(ball.speed(), 5.0);
    /// ```
    pub fn new(position: Vector2D, velocity: Vector2D, radius: f64) -> Result<Self, SimulationError> {
        Self::with_color(position, velocity, radius, WHITE)
    }

    pub fn with_color(
        position: Vector2D,
        velocity: Vector2D,
        radius: f64,
        color: [u8; 3],
    ) -> Result<Self, SimulationError> {
        if radius <= 0.0 {
            return Err(SimulationError::InvalidRadius);
        }
        Ok(Ball { position, velocity, radius, color })
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Kinetic energy for the unit mass every ball carries.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.velocity.magnitude_squared()
    }

    /// Momentum for the unit mass every ball carries.
    pub fn momentum(&self) -> Vector2D {
        self.velocity
    }

    pub fn snapshot(&self) -> BallSnapshot {
        BallSnapshot {
            position: self.position,
            radius: self.radius,
            color: self.color,
        }
    }
}
