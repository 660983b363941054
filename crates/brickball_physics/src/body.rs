//! Rigid body descriptions and handles

use glam::Vec2;
use rapier2d::prelude::{ColliderHandle, RigidBodyBuilder, RigidBodyHandle, RigidBodyType};

use crate::error::PhysicsError;
use crate::material::PhysicsMaterial;
use crate::shapes::{ShapeDesc, ShapeTag};

/// How a body takes part in the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Immovable, infinite mass (walls, blocks)
    Static,
    /// Moved by direct transform assignment, pushes dynamic bodies (paddle)
    Kinematic,
    /// Fully simulated (ball)
    Dynamic,
}

impl BodyKind {
    pub(crate) fn from_rapier(body_type: RigidBodyType) -> Self {
        match body_type {
            RigidBodyType::Fixed => BodyKind::Static,
            RigidBodyType::Dynamic => BodyKind::Dynamic,
            RigidBodyType::KinematicPositionBased | RigidBodyType::KinematicVelocityBased => {
                BodyKind::Kinematic
            }
        }
    }

    fn rapier_builder(self) -> RigidBodyBuilder {
        match self {
            BodyKind::Static => RigidBodyBuilder::fixed(),
            BodyKind::Kinematic => RigidBodyBuilder::kinematic_position_based(),
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
        }
    }
}

/// Description of a single-shape body before it is added to the world
///
/// Positions and velocities are in simulation units.
#[derive(Clone, Debug)]
pub struct BodyDesc {
    pub kind: BodyKind,
    pub position: Vec2,
    /// Rotation in radians
    pub rotation: f32,
    pub linear_velocity: Vec2,
    pub fixed_rotation: bool,
    pub shape: ShapeDesc,
    pub material: PhysicsMaterial,
    pub tag: Option<ShapeTag>,
    /// Emit contact begin/end events for this shape
    pub contact_events: bool,
}

impl BodyDesc {
    pub fn new(kind: BodyKind, shape: ShapeDesc) -> Self {
        Self {
            kind,
            position: Vec2::ZERO,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            fixed_rotation: false,
            shape,
            material: PhysicsMaterial::default(),
            tag: None,
            contact_events: false,
        }
    }

    pub fn fixed(shape: ShapeDesc) -> Self {
        Self::new(BodyKind::Static, shape)
    }

    pub fn kinematic(shape: ShapeDesc) -> Self {
        Self::new(BodyKind::Kinematic, shape)
    }

    pub fn dynamic(shape: ShapeDesc) -> Self {
        Self::new(BodyKind::Dynamic, shape)
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.linear_velocity = velocity;
        self
    }

    pub fn with_fixed_rotation(mut self, fixed: bool) -> Self {
        self.fixed_rotation = fixed;
        self
    }

    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn with_tag(mut self, tag: ShapeTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_contact_events(mut self, enabled: bool) -> Self {
        self.contact_events = enabled;
        self
    }

    /// Check geometry and numbers before they reach the engine
    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.shape.validate()?;
        if !self.position.is_finite() || !self.rotation.is_finite() {
            return Err(PhysicsError::InvalidBody(format!(
                "non-finite transform ({}, {}) @ {}",
                self.position.x, self.position.y, self.rotation
            )));
        }
        if !self.linear_velocity.is_finite() {
            return Err(PhysicsError::InvalidBody(format!(
                "non-finite velocity ({}, {})",
                self.linear_velocity.x, self.linear_velocity.y
            )));
        }
        Ok(())
    }

    pub(crate) fn rigid_body_builder(&self) -> RigidBodyBuilder {
        let mut builder = self
            .kind
            .rapier_builder()
            .translation(crate::to_na(self.position))
            .rotation(self.rotation)
            .linvel(crate::to_na(self.linear_velocity));
        if self.fixed_rotation {
            builder = builder.lock_rotations();
        }
        builder
    }
}

/// Body and its single collider inside a [`crate::PhysicsWorld`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyHandle {
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let desc = BodyDesc::dynamic(ShapeDesc::circle(0.5))
            .with_position(Vec2::new(1.0, 2.0))
            .with_velocity(Vec2::new(0.0, -2.9))
            .with_fixed_rotation(true)
            .with_material(PhysicsMaterial::ELASTIC)
            .with_tag(ShapeTag::Ball)
            .with_contact_events(true);

        assert_eq!(desc.kind, BodyKind::Dynamic);
        assert_eq!(desc.position, Vec2::new(1.0, 2.0));
        assert_eq!(desc.linear_velocity, Vec2::new(0.0, -2.9));
        assert!(desc.fixed_rotation);
        assert_eq!(desc.material, PhysicsMaterial::ELASTIC);
        assert_eq!(desc.tag, Some(ShapeTag::Ball));
        assert!(desc.contact_events);
    }

    #[test]
    fn test_defaults() {
        let desc = BodyDesc::fixed(ShapeDesc::cuboid(1.0, 1.0));
        assert_eq!(desc.kind, BodyKind::Static);
        assert_eq!(desc.rotation, 0.0);
        assert_eq!(desc.tag, None);
        assert!(!desc.contact_events);
        assert!(!desc.fixed_rotation);
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let bad_shape = BodyDesc::fixed(ShapeDesc::cuboid(0.0, 1.0));
        assert!(matches!(bad_shape.validate(), Err(PhysicsError::InvalidShape(_))));

        let bad_position = BodyDesc::fixed(ShapeDesc::cuboid(1.0, 1.0))
            .with_position(Vec2::new(f32::NAN, 0.0));
        assert!(matches!(bad_position.validate(), Err(PhysicsError::InvalidBody(_))));

        let bad_velocity = BodyDesc::dynamic(ShapeDesc::circle(1.0))
            .with_velocity(Vec2::new(0.0, f32::INFINITY));
        assert!(matches!(bad_velocity.validate(), Err(PhysicsError::InvalidBody(_))));
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(BodyKind::from_rapier(RigidBodyType::Fixed), BodyKind::Static);
        assert_eq!(
            BodyKind::from_rapier(RigidBodyType::KinematicPositionBased),
            BodyKind::Kinematic
        );
        assert_eq!(BodyKind::from_rapier(RigidBodyType::Dynamic), BodyKind::Dynamic);
    }
}
