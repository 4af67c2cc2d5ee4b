use crate::arena::Arena;
use crate::models::Vector2D;
use crate::utils::SimulationError;

/// A cue strike in progress: the ball captured by a pointer press, plus the
/// press coordinate. Valid only between a press and its matching release;
/// completing the stroke consumes it, so a stroke can never be applied twice.
#[derive(Debug, Clone, PartialEq)]
pub struct CueStroke {
    ball_index: usize,
    anchor: Vector2D,
}

impl CueStroke {
    /// Starts a stroke at the pointer-press coordinate, capturing the nearest
    /// ball.
    ///
    /// # Errors
    /// Returns `SimulationError::EmptyArena` when there is no ball to capture.
    ///
    /// # Example
    /// ```
    /// use rs_billiards::arena::{Arena, CueStroke};
    /// use rs_billiards::models::{Ball, Vector2D};
    /// use rs_billiards::utils::ArenaConfig;
    ///
    /// let mut arena = Arena::new(ArenaConfig::default()).unwrap();
    /// arena.add_ball(Ball::new(Vector2D::ZERO, Vector2D::ZERO, 15.0).unwrap());
    ///
    /// let stroke = CueStroke::begin(&arena, Vector2D::new(10.0, 0.0)).unwrap();
    /// stroke.complete(&mut arena, Vector2D::new(40.0, 0.0)).unwrap();
    /// assert_eq!(arena.balls()[0].velocity, Vector2D::new(30.0, 0.0));
    /// ```
    pub fn begin(arena: &Arena, press: Vector2D) -> Result<Self, SimulationError> {
        let ball_index = arena
            .select_nearest(press)
            .ok_or(SimulationError::EmptyArena)?;
        Ok(CueStroke { ball_index, anchor: press })
    }

    pub fn ball_index(&self) -> usize {
        self.ball_index
    }

    pub fn anchor(&self) -> Vector2D {
        self.anchor
    }

    /// Finishes the stroke at the pointer-release coordinate, applying the
    /// drag delta from press to release as a velocity impulse to the captured
    /// ball. The cap on speed is not applied here; it takes effect on the
    /// next tick.
    pub fn complete(self, arena: &mut Arena, release: Vector2D) -> Result<(), SimulationError> {
        arena.apply_impulse(self.ball_index, release.minus(self.anchor))
    }
}
