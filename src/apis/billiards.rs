// src/apis/billiards.rs

use rand::rngs::ThreadRng;

use crate::arena::{Arena, CueStroke};
use crate::models::{BallSnapshot, Vector2D};
use crate::utils::{ArenaConfig, SimulationError};

/// A simplified interface for running the sandbox from a host loop.
///
/// This struct wires the arena, the pointer-stroke session, and a random
/// source together behind four calls the host makes: `tick` once per frame,
/// `snapshots` once per frame for the renderer, and `pointer_press` /
/// `pointer_release` when input arrives. Pointer coordinates are expected in
/// arena-centered space; translating raw screen coordinates is the host's
/// job.
pub struct BilliardsTable {
    arena: Arena,
    stroke: Option<CueStroke>,
    rng: ThreadRng,
}

impl BilliardsTable {
    /// Creates a table with the default configuration and a randomized,
    /// non-overlapping ball population.
    ///
    /// # Example
    /// ```
    /// use rs_billiards::apis::billiards::BilliardsTable;
    ///
    /// let mut table = BilliardsTable::new().unwrap();
    /// table.tick();
    /// let frame = table.snapshots();
    /// assert_eq!(frame.len(), table.ball_count());
    /// ```
    pub fn new() -> Result<Self, SimulationError> {
        Self::with_config(ArenaConfig::default())
    }

    /// Creates a populated table with custom simulation constants.
    ///
    /// # Errors
    /// Fails when the configuration violates an invariant; see
    /// [`ArenaConfig::validated`].
    pub fn with_config(config: ArenaConfig) -> Result<Self, SimulationError> {
        let mut arena = Arena::new(config)?;
        let mut rng = rand::rng();
        arena.populate(&mut rng);
        Ok(Self { arena, stroke: None, rng })
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn ball_count(&self) -> usize {
        self.arena.ball_count()
    }

    /// Advances the simulation by one frame.
    pub fn tick(&mut self) {
        self.arena.tick();
    }

    /// Read-only per-ball views for the renderer.
    pub fn snapshots(&self) -> Vec<BallSnapshot> {
        self.arena.snapshots()
    }

    /// Begins a cue stroke at the press coordinate, capturing the nearest
    /// ball. A press while another stroke is pending overwrites the pending
    /// stroke.
    ///
    /// # Errors
    /// Returns `SimulationError::EmptyArena` when the table holds no balls.
    pub fn pointer_press(&mut self, x: f64, y: f64) -> Result<(), SimulationError> {
        self.stroke = Some(CueStroke::begin(&self.arena, Vector2D::new(x, y))?);
        Ok(())
    }

    /// Completes the pending cue stroke at the release coordinate, applying
    /// the press-to-release delta as an impulse to the captured ball.
    ///
    /// # Errors
    /// Returns `SimulationError::NoActiveStroke` when no press preceded this
    /// release.
    pub fn pointer_release(&mut self, x: f64, y: f64) -> Result<(), SimulationError> {
        let stroke = self.stroke.take().ok_or(SimulationError::NoActiveStroke)?;
        stroke.complete(&mut self.arena, Vector2D::new(x, y))
    }

    /// Repopulates the table from scratch with a fresh random layout.
    pub fn rerack(&mut self) -> Result<(), SimulationError> {
        let mut arena = Arena::new(*self.arena.config())?;
        arena.populate(&mut self.rng);
        self.arena = arena;
        self.stroke = None;
        Ok(())
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.arena.total_kinetic_energy()
    }

    pub fn total_momentum(&self) -> Vector2D {
        self.arena.total_momentum()
    }
}
