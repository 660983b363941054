//! The game session: world plus the paddle and ball it was built with

use brickball_physics::{BodyHandle, ContactEvent, DebugDrawSink, PhysicsWorld, UnitScale};
use glam::Vec2;

use crate::arena::PaddleBounds;

/// Outcome of a paddle move request
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaddleMove {
    /// No displacement was requested
    Idle,
    /// Paddle moved to this x, in sim units
    Applied { x: f32 },
    /// The candidate position was out of bounds; the paddle stayed put
    Rejected { candidate_px: f32 },
}

/// Owns the physics world and the handles of the paddle and ball
///
/// Built once by [`crate::WorldBuilder`]; dropping or shutting it down
/// releases every body and shape.
pub struct GameSession {
    world: PhysicsWorld,
    paddle: BodyHandle,
    ball: BodyHandle,
    scale: UnitScale,
    paddle_bounds: PaddleBounds,
}

impl GameSession {
    pub(crate) fn new(
        world: PhysicsWorld,
        paddle: BodyHandle,
        ball: BodyHandle,
        scale: UnitScale,
        paddle_bounds: PaddleBounds,
    ) -> Self {
        Self {
            world,
            paddle,
            ball,
            scale,
            paddle_bounds,
        }
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn paddle(&self) -> BodyHandle {
        self.paddle
    }

    pub fn ball(&self) -> BodyHandle {
        self.ball
    }

    pub fn scale(&self) -> UnitScale {
        self.scale
    }

    pub fn paddle_bounds(&self) -> PaddleBounds {
        self.paddle_bounds
    }

    pub fn paddle_position_px(&self) -> Vec2 {
        let position = self.world.translation(self.paddle).unwrap_or_default();
        self.scale.vec_to_pixel_units(position)
    }

    pub fn ball_position_px(&self) -> Vec2 {
        let position = self.world.translation(self.ball).unwrap_or_default();
        self.scale.vec_to_pixel_units(position)
    }

    /// Ball velocity in sim units/s
    pub fn ball_velocity(&self) -> Vec2 {
        self.world.linear_velocity(self.ball).unwrap_or_default()
    }

    /// Shift the paddle horizontally by `dx` sim units
    ///
    /// The move is applied only if the new center stays strictly inside the
    /// paddle bounds; otherwise it is dropped whole, never clamped.
    pub fn move_paddle(&mut self, dx: f32) -> PaddleMove {
        if dx == 0.0 {
            return PaddleMove::Idle;
        }

        let Some(position) = self.world.translation(self.paddle) else {
            return PaddleMove::Idle;
        };
        let candidate = position.x + dx;
        let candidate_px = self.scale.to_pixel_units(candidate);

        if self.paddle_bounds.contains(candidate_px) {
            self.world
                .set_transform(self.paddle, Vec2::new(candidate, position.y), 0.0);
            PaddleMove::Applied { x: candidate }
        } else {
            log::trace!("Paddle move to {:.1}px rejected", candidate_px);
            PaddleMove::Rejected { candidate_px }
        }
    }

    /// Advance one fixed step and return every contact event it raised
    pub fn step(&mut self) -> &[ContactEvent] {
        self.world.step();
        self.world.contact_events()
    }

    pub fn debug_draw(&self, sink: &mut dyn DebugDrawSink) {
        self.world.debug_draw(sink);
    }

    /// Tear down the world, releasing all bodies and shapes
    pub fn shutdown(self) {
        log::info!(
            "Destroying world: releasing {} bodies and {} shapes after {} steps",
            self.world.body_count(),
            self.world.shape_count(),
            self.world.steps_taken()
        );
    }
}
