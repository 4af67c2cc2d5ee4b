use crate::arena::{Arena, CueStroke};
use crate::models::{Ball, Vector2D};
use crate::utils::{ArenaConfig, SimulationError};

fn arena_with_balls() -> Arena {
    let mut arena = Arena::new(ArenaConfig::default()).unwrap();
    arena.add_ball(Ball::new(Vector2D::new(-50.0, 0.0), Vector2D::ZERO, 15.0).unwrap());
    arena.add_ball(Ball::new(Vector2D::new(50.0, 0.0), Vector2D::ZERO, 15.0).unwrap());
    arena
}

#[test]
fn test_begin_captures_nearest_ball() {
    let arena = arena_with_balls();
    let stroke = CueStroke::begin(&arena, Vector2D::new(40.0, 10.0)).unwrap();
    assert_eq!(stroke.ball_index(), 1);
    assert_eq!(stroke.anchor(), Vector2D::new(40.0, 10.0));
}

#[test]
fn test_begin_in_empty_arena() {
    let arena = Arena::new(ArenaConfig::default()).unwrap();
    let result = CueStroke::begin(&arena, Vector2D::ZERO);
    assert_eq!(result, Err(SimulationError::EmptyArena));
}

#[test]
fn test_complete_applies_drag_delta_as_impulse() {
    let mut arena = arena_with_balls();
    let stroke = CueStroke::begin(&arena, Vector2D::new(-45.0, 5.0)).unwrap();

    stroke.complete(&mut arena, Vector2D::new(-25.0, -5.0)).unwrap();

    // release minus press, applied to the captured ball only
    assert_eq!(arena.balls()[0].velocity, Vector2D::new(20.0, -10.0));
    assert_eq!(arena.balls()[1].velocity, Vector2D::ZERO);
}

#[test]
fn test_complete_stacks_on_existing_velocity() {
    let mut arena = Arena::new(ArenaConfig::default()).unwrap();
    arena.add_ball(Ball::new(Vector2D::ZERO, Vector2D::new(2.0, 3.0), 15.0).unwrap());

    let stroke = CueStroke::begin(&arena, Vector2D::ZERO).unwrap();
    stroke.complete(&mut arena, Vector2D::new(1.0, 1.0)).unwrap();

    assert_eq!(arena.balls()[0].velocity, Vector2D::new(3.0, 4.0));
}
