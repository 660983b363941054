//! Integration tests for the game session
//!
//! These tests drive a full session built from the reference arena:
//! 1. The builder creates the expected bodies
//! 2. Contact events fire once per touch
//! 3. The elastic ball keeps its speed through bounces
//! 4. Stepping is independent of wall-clock time
//! 5. Paddle moves never leave the bounds

use brickball_core::{ArenaLayout, GameSession, PaddleMove, SessionSettings, ShapeTag, WorldBuilder};
use brickball_input::PaddleIntent;
use glam::Vec2;
use proptest::prelude::*;

fn build(settings: SessionSettings) -> GameSession {
    WorldBuilder::new(&ArenaLayout::default(), settings)
        .build()
        .expect("reference arena should build")
}

// ==================== Scenario Tests ====================

#[test]
fn test_reference_arena_bodies() {
    let session = build(SessionSettings::default());
    let world = session.world();

    assert_eq!(world.body_count(), 7);
    assert_eq!(world.shape_count(), 7);
    assert_eq!(world.shape_tag(session.ball().collider), Some(ShapeTag::Ball));
    assert!(world.contact_events_enabled(session.ball().collider));
    assert!(!world.contact_events_enabled(session.paddle().collider));

    let paddle = session.paddle_position_px();
    assert!((paddle - Vec2::new(200.0, 265.0)).length() < 1e-3);
}

// ==================== Contact Event Tests ====================

/// Ball sent straight down touches the paddle exactly once
#[test]
fn test_ball_paddle_contact_fires_once() {
    let settings = SessionSettings {
        ball_velocity: Vec2::new(0.0, 2.9),
        ..SessionSettings::default()
    };
    let mut session = build(settings);

    let mut begin_steps = Vec::new();
    for step in 0..12 {
        let events = session.step();
        if events
            .iter()
            .any(|e| e.is_begin() && e.involves(ShapeTag::Ball, ShapeTag::Paddle))
        {
            begin_steps.push(step);
        }
    }

    // 5px gap at ~1.4px per step
    assert_eq!(begin_steps.len(), 1, "begin steps: {:?}", begin_steps);
    assert!(begin_steps[0] >= 2);

    // Bounced back up
    assert!(session.ball_velocity().y < 0.0);
}

#[test]
fn test_contact_events_cleared_between_steps() {
    let settings = SessionSettings {
        ball_velocity: Vec2::new(0.0, 2.9),
        ..SessionSettings::default()
    };
    let mut session = build(settings);

    let mut total = 0;
    for _ in 0..12 {
        total += session.step().len();
    }
    assert!(total >= 1);

    // Ball is now travelling up through open space
    assert!(session.step().is_empty());
}

// ==================== Energy Tests ====================

#[test]
fn test_elastic_ball_keeps_speed() {
    let mut session = build(SessionSettings::default());
    let initial = session.ball_velocity().length();

    let mut contacts = 0;
    for step in 0..3200 {
        let began = session
            .step()
            .iter()
            .filter(|e| e.is_begin() && e.other_tag(ShapeTag::Ball).is_some())
            .count();
        contacts += began;

        let speed = session.ball_velocity().length();
        assert!(
            (speed - initial).abs() < 1e-3,
            "speed {} at step {} (contacts so far: {})",
            speed,
            step,
            contacts
        );
    }

    assert!(contacts >= 10, "only {} contacts in 3200 steps", contacts);
}

// ==================== Determinism Tests ====================

#[test]
fn test_stepping_ignores_wall_clock() {
    let mut fast = build(SessionSettings::default());
    let mut slow = build(SessionSettings::default());

    for _ in 0..120 {
        fast.step();
    }
    for _ in 0..120 {
        slow.step();
        std::thread::sleep(std::time::Duration::from_micros(200));
    }

    assert_eq!(fast.ball_position_px(), slow.ball_position_px());
    assert_eq!(fast.ball_velocity(), slow.ball_velocity());
    assert_eq!(fast.world().steps_taken(), 120);
}

#[test]
fn test_step_advances_fixed_timestep() {
    let mut session = build(SessionSettings::default());
    let start = session.ball_position_px();
    for _ in 0..10 {
        session.step();
    }
    let travelled = start.y - session.ball_position_px().y;
    // 10 * 0.016s * 2.9 units/s * 30px
    assert!((travelled - 13.92).abs() < 0.05, "travelled {}", travelled);
}

// ==================== Paddle Bound Tests ====================

#[test]
fn test_paddle_stops_at_bound() {
    let mut session = build(SessionSettings::default());

    let mut rejected = false;
    for _ in 0..200 {
        let dx = PaddleIntent::Right.displacement(5.0, 0.016);
        if let PaddleMove::Rejected { candidate_px } = session.move_paddle(dx) {
            assert!(candidate_px >= 350.0);
            rejected = true;
            break;
        }
    }

    assert!(rejected);
    let x = session.paddle_position_px().x;
    assert!(x < 350.0 && x > 347.0, "paddle stopped at {}", x);
}

fn intent_strategy() -> impl Strategy<Value = PaddleIntent> {
    prop_oneof![
        Just(PaddleIntent::Left),
        Just(PaddleIntent::Right),
        Just(PaddleIntent::Idle),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_paddle_stays_inside_bounds(
        moves in prop::collection::vec((intent_strategy(), 0.0f32..0.2), 1..200)
    ) {
        let mut session = build(SessionSettings::default());
        let bounds = session.paddle_bounds();
        let y = session.paddle_position_px().y;

        for (intent, dt) in moves {
            let before = session.paddle_position_px();
            match session.move_paddle(intent.displacement(5.0, dt)) {
                PaddleMove::Rejected { .. } | PaddleMove::Idle => {
                    prop_assert_eq!(session.paddle_position_px(), before);
                }
                PaddleMove::Applied { .. } => {}
            }

            let position = session.paddle_position_px();
            prop_assert!(bounds.contains(position.x));
            prop_assert_eq!(position.y, y);
        }
    }
}
