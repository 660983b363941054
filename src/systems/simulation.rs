//! Game simulation system
//!
//! Manages the per-frame simulation:
//! - Delta time calculation
//! - Held keys → paddle movement
//! - One fixed physics step
//! - Collision logging

use std::time::Instant;
use brickball_core::{GameSession, PaddleMove, ShapeTag};
use brickball_input::PaddleController;

/// Result of a simulation update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// Measured frame time, in seconds
    pub dt: f32,
    /// What happened to the paddle
    pub paddle: PaddleMove,
    /// Contacts that began during this frame's step
    pub collisions: usize,
}

/// Manages the game simulation loop
///
/// The measured frame time only scales paddle movement. The world always
/// advances by its own fixed timestep, once per frame.
pub struct SimulationSystem {
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Restart frame timing so setup time is not counted as a frame
    pub fn reset_clock(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Run one simulation frame, measuring dt since the previous one
    pub fn update(
        &mut self,
        session: &mut GameSession,
        controller: &PaddleController,
    ) -> SimulationResult {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.update_with_dt(session, controller, dt)
    }

    /// Run one simulation frame with an explicit dt
    pub fn update_with_dt(
        &mut self,
        session: &mut GameSession,
        controller: &PaddleController,
        dt: f32,
    ) -> SimulationResult {
        // 1. Paddle from held keys
        let paddle = session.move_paddle(controller.displacement(dt));

        // 2. Fixed physics step
        let mut collisions = 0;
        for event in session.step().iter().filter(|e| e.is_begin()) {
            log::info!("collision: {} <-> {}", tag_name(event.a.tag), tag_name(event.b.tag));
            collisions += 1;
        }

        SimulationResult {
            dt,
            paddle,
            collisions,
        }
    }
}

fn tag_name(tag: Option<ShapeTag>) -> &'static str {
    tag.map_or("unknown", |t| t.name())
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickball_core::{ArenaLayout, SessionSettings, WorldBuilder};
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    fn session() -> GameSession {
        WorldBuilder::new(&ArenaLayout::default(), SessionSettings::default())
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert!(sim.last_frame.elapsed().as_millis() < 100);
    }

    #[test]
    fn test_held_left_moves_paddle() {
        let mut sim = SimulationSystem::new();
        let mut session = session();
        let mut controller = PaddleController::new();
        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);

        let start = session.paddle_position_px().x;
        let result = sim.update_with_dt(&mut session, &controller, 0.1);

        assert!(matches!(result.paddle, PaddleMove::Applied { .. }));
        // 5 units/s * 0.1s * 30px
        assert!((session.paddle_position_px().x - (start - 15.0)).abs() < 1e-3);
        assert_eq!(session.world().steps_taken(), 1);
    }

    #[test]
    fn test_idle_frame_still_steps() {
        let mut sim = SimulationSystem::new();
        let mut session = session();
        let controller = PaddleController::new();

        let result = sim.update_with_dt(&mut session, &controller, 0.5);
        assert_eq!(result.paddle, PaddleMove::Idle);
        assert_eq!(result.collisions, 0);
        assert_eq!(session.world().steps_taken(), 1);
    }

    #[test]
    fn test_long_frame_does_not_lengthen_step() {
        let mut sim = SimulationSystem::new();
        let mut slow = session();
        let mut fast = session();
        let controller = PaddleController::new();

        sim.update_with_dt(&mut slow, &controller, 0.5);
        sim.update_with_dt(&mut fast, &controller, 0.001);
        assert_eq!(slow.ball_position_px(), fast.ball_position_px());
    }

    #[test]
    fn test_measured_update() {
        let mut sim = SimulationSystem::new();
        let mut session = session();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let result = sim.update(&mut session, &PaddleController::new());
        assert!(result.dt >= 0.005);
    }

    #[test]
    fn test_reset_clock_drops_setup_time() {
        let mut sim = SimulationSystem::new();
        let mut session = session();
        let mut controller = PaddleController::new();
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);

        // Slow startup between construction and the first frame
        std::thread::sleep(std::time::Duration::from_millis(300));
        sim.reset_clock();

        let start = session.paddle_position_px().x;
        let result = sim.update(&mut session, &controller);
        assert!(result.dt < 0.1, "first frame dt {}", result.dt);
        assert!(!matches!(result.paddle, PaddleMove::Rejected { .. }));
        assert!(session.paddle_position_px().x >= start);
    }
}
