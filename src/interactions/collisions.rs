use crate::models::{Ball, Vector2D};
use crate::utils::SimulationError;

/// Tests whether two balls overlap.
///
/// Broad phase first: if the absolute coordinate delta on either axis exceeds
/// `2 × (radius_a + radius_b)`, the pair is rejected without any distance
/// arithmetic. Otherwise the narrow phase compares the squared center
/// distance against the squared radius sum. Both sides of the narrow-phase
/// comparison are squared; comparing a squared distance against an unsquared
/// radius sum under-reports contacts whenever the radii sum past 1.
///
/// # Example
/// ```
/// use rs_billiards::interactions::intersecting;
/// use rs_billiards::models::{Ball, Vector2D};
///
/// let a = Ball::new(Vector2D::ZERO, Vector2D::ZERO, 5.0).unwrap();
/// let b = Ball::new(Vector2D::new(8.0, 0.0), Vector2D::ZERO, 5.0).unwrap();
/// let c = Ball::new(Vector2D::new(11.0, 0.0), Vector2D::ZERO, 5.0).unwrap();
/// assert!(intersecting(&a, &b));
/// assert!(!intersecting(&a, &c));
/// ```
pub fn intersecting(a: &Ball, b: &Ball) -> bool {
    let x_distance = (a.position.x - b.position.x).abs();
    let y_distance = (a.position.y - b.position.y).abs();
    let radius_sum = a.radius + b.radius;
    // ignore balls that are too far away to be colliding
    if x_distance > 2.0 * radius_sum || y_distance > 2.0 * radius_sum {
        return false;
    }
    a.position.distance_squared(b.position) <= radius_sum * radius_sum
}

/// Computes the post-collision velocities for a pair of equal-mass,
/// perfectly elastic, non-rotating balls.
///
/// Each velocity is decomposed into components parallel and perpendicular to
/// the line joining the two centers via vector projection; the parallel
/// components are exchanged and the perpendicular components preserved, which
/// conserves both total momentum and total kinetic energy. Positions are not
/// touched; the caller decides how to separate the pair.
///
/// # Errors
/// Returns `SimulationError::BallsAtSamePosition` when the centers coincide,
/// which leaves the projection axis undefined.
///
/// # Example
/// ```
/// use rs_billiards::interactions::elastic_collision;
/// use rs_billiards::models::{Ball, Vector2D};
///
/// let a = Ball::new(Vector2D::new(-10.0, 0.0), Vector2D::new(5.0, 0.0), 5.0).unwrap();
/// let b = Ball::new(Vector2D::new(10.0, 0.0), Vector2D::new(-5.0, 0.0), 5.0).unwrap();
/// let (vel_a, vel_b) = elastic_collision(&a, &b).unwrap();
/// assert_eq!(vel_a, Vector2D::new(-5.0, 0.0));
/// assert_eq!(vel_b, Vector2D::new(5.0, 0.0));
/// ```
pub fn elastic_collision(a: &Ball, b: &Ball) -> Result<(Vector2D, Vector2D), SimulationError> {
    let b_to_a = a.position.minus(b.position);
    if b_to_a.magnitude_squared() == 0.0 {
        return Err(SimulationError::BallsAtSamePosition);
    }
    let a_to_b = b.position.minus(a.position);

    let parallel_a = a.velocity.project_onto(b_to_a)?;
    let perpendicular_a = a.velocity.minus(parallel_a);

    let parallel_b = b.velocity.project_onto(a_to_b)?;
    let perpendicular_b = b.velocity.minus(parallel_b);

    Ok((
        perpendicular_a.plus(parallel_b),
        perpendicular_b.plus(parallel_a),
    ))
}
