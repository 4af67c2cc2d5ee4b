use std::fmt;
use std::error::Error;

/// Represents errors that can occur while configuring or running the sandbox.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Indicates a division by zero error.
    DivisionByZero,
    /// Indicates an operation that is undefined for the zero vector (e.g., normalization or projection axis).
    ZeroVector,
    /// Indicates an invalid ball radius (e.g., negative or zero radius).
    InvalidRadius,
    /// Indicates invalid arena dimensions (e.g., non-positive half-extents).
    InvalidDimensions,
    /// Indicates an invalid friction coefficient (must lie strictly between 0 and 1).
    InvalidCoefficient,
    /// Indicates an invalid speed limit or speed range (e.g., non-positive max speed).
    InvalidSpeed,
    /// Indicates a population probability outside the range [0, 1].
    InvalidProbability,
    /// Indicates that two balls occupy the same position (the collision axis is undefined).
    BallsAtSamePosition,
    /// Indicates an operation that requires at least one ball in the arena.
    EmptyArena,
    /// Indicates a pointer release with no matching pointer press.
    NoActiveStroke,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::DivisionByZero => write!(f, "Division by zero"),
            SimulationError::ZeroVector => write!(f, "Operation undefined for the zero vector"),
            SimulationError::InvalidRadius => write!(f, "Invalid ball radius"),
            SimulationError::InvalidDimensions => write!(f, "Invalid arena dimensions"),
            SimulationError::InvalidCoefficient => write!(f, "Invalid friction coefficient"),
            SimulationError::InvalidSpeed => write!(f, "Invalid speed value"),
            SimulationError::InvalidProbability => write!(f, "Invalid population probability"),
            SimulationError::BallsAtSamePosition => write!(f, "Balls are at the same position"),
            SimulationError::EmptyArena => write!(f, "The arena contains no balls"),
            SimulationError::NoActiveStroke => write!(f, "Pointer release without a matching press"),
        }
    }
}

impl Error for SimulationError {}
