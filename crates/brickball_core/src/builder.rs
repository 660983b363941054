//! WorldBuilder - one-shot construction of the play field
//!
//! Converts the pixel layout into simulation units and populates a fresh
//! zero-gravity world with walls, the paddle, the ball and the block.

use brickball_physics::{
    BodyDesc, BodyHandle, BodyKind, PhysicsMaterial, PhysicsWorld, ShapeDesc, ShapeTag, UnitScale,
    WorldConfig,
};
use glam::Vec2;

use crate::arena::{ArenaLayout, PaddleBounds, PixelRect};
use crate::error::BuildError;
use crate::session::GameSession;

/// Tunables that shape a session, independent of the layout
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSettings {
    pub scale: UnitScale,
    pub world: WorldConfig,
    pub paddle_bounds: PaddleBounds,
    /// Ball velocity at session start, sim units/s (negative y is up)
    pub ball_velocity: Vec2,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            scale: UnitScale::REFERENCE,
            world: WorldConfig::default(),
            paddle_bounds: PaddleBounds::default(),
            ball_velocity: Vec2::new(0.0, -2.9),
        }
    }
}

/// Builds a [`GameSession`] from a layout
///
/// # Example
/// ```ignore
/// let session = WorldBuilder::new(&ArenaLayout::default(), SessionSettings::default())
///     .build()?;
/// ```
pub struct WorldBuilder<'a> {
    layout: &'a ArenaLayout,
    settings: SessionSettings,
    world: PhysicsWorld,
}

impl<'a> WorldBuilder<'a> {
    pub fn new(layout: &'a ArenaLayout, settings: SessionSettings) -> Self {
        let world = PhysicsWorld::with_config(settings.world.clone());
        Self {
            layout,
            settings,
            world,
        }
    }

    /// Populate the world and hand it to a new session
    pub fn build(mut self) -> Result<GameSession, BuildError> {
        let layout = self.layout;
        let bounds = self.settings.paddle_bounds;
        if !bounds.contains(layout.paddle.center.x) {
            return Err(BuildError::Layout(format!(
                "paddle starts at x={} outside ({}, {})",
                layout.paddle.center.x, bounds.min_x, bounds.max_x
            )));
        }

        for (name, rect) in layout.walls.iter() {
            self.add_wall(rect)?;
            log::debug!("Built {} wall", name);
        }
        let paddle = self.add_paddle()?;
        let ball = self.add_ball()?;
        self.add_block()?;

        log::info!(
            "Built arena: {} bodies ({} static, {} kinematic, {} dynamic)",
            self.world.body_count(),
            self.world.count_bodies(BodyKind::Static),
            self.world.count_bodies(BodyKind::Kinematic),
            self.world.count_bodies(BodyKind::Dynamic),
        );

        Ok(GameSession::new(
            self.world,
            paddle,
            ball,
            self.settings.scale,
            bounds,
        ))
    }

    fn box_shape(&self, rect: &PixelRect) -> ShapeDesc {
        let half = self.settings.scale.vec_to_sim_units(rect.half_extents);
        ShapeDesc::cuboid(half.x, half.y)
    }

    fn add_wall(&mut self, rect: &PixelRect) -> Result<BodyHandle, BuildError> {
        let desc = BodyDesc::fixed(self.box_shape(rect))
            .with_position(self.settings.scale.vec_to_sim_units(rect.center))
            .with_material(PhysicsMaterial::FRICTIONLESS)
            .with_tag(ShapeTag::Wall);
        Ok(self.world.add_body(&desc)?)
    }

    fn add_paddle(&mut self) -> Result<BodyHandle, BuildError> {
        let rect = self.layout.paddle;
        let desc = BodyDesc::kinematic(self.box_shape(&rect))
            .with_position(self.settings.scale.vec_to_sim_units(rect.center))
            .with_material(PhysicsMaterial::FRICTIONLESS)
            .with_tag(ShapeTag::Paddle);
        Ok(self.world.add_body(&desc)?)
    }

    fn add_ball(&mut self) -> Result<BodyHandle, BuildError> {
        let scale = self.settings.scale;
        let desc = BodyDesc::dynamic(ShapeDesc::circle(scale.to_sim_units(self.layout.ball_radius)))
            .with_position(scale.vec_to_sim_units(self.layout.ball_center))
            .with_velocity(self.settings.ball_velocity)
            .with_fixed_rotation(true)
            .with_material(PhysicsMaterial::ELASTIC)
            .with_tag(ShapeTag::Ball)
            .with_contact_events(true);
        Ok(self.world.add_body(&desc)?)
    }

    fn add_block(&mut self) -> Result<BodyHandle, BuildError> {
        let block = self.layout.block;
        let desc = BodyDesc::fixed(self.box_shape(&block.rect))
            .with_position(self.settings.scale.vec_to_sim_units(block.rect.center))
            .with_rotation(block.rotation)
            .with_material(PhysicsMaterial::FRICTIONLESS)
            .with_tag(ShapeTag::Block);
        Ok(self.world.add_body(&desc)?)
    }
}
