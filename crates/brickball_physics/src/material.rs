//! Surface material properties for collision response

use rapier2d::prelude::{CoefficientCombineRule, ColliderBuilder};

/// Surface material properties for collision response
///
/// Friction pairs are averaged; restitution pairs take the larger value, so a
/// perfectly elastic ball keeps its speed against walls that declare no
/// restitution of their own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsMaterial {
    /// Friction coefficient (0.0 = frictionless)
    pub friction: f32,
    /// Restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self {
            friction: 0.6,
            restitution: 0.0,
        }
    }
}

impl PhysicsMaterial {
    /// No friction, no bounce of its own (walls, paddle, blocks)
    pub const FRICTIONLESS: Self = Self {
        friction: 0.0,
        restitution: 0.0,
    };

    /// No friction, perfectly elastic (the ball)
    pub const ELASTIC: Self = Self {
        friction: 0.0,
        restitution: 1.0,
    };

    /// Create a new physics material with custom friction and restitution
    ///
    /// Friction is clamped to be non-negative and restitution to [0.0, 1.0].
    pub fn new(friction: f32, restitution: f32) -> Self {
        Self {
            friction: friction.max(0.0),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    pub(crate) fn apply(&self, builder: ColliderBuilder) -> ColliderBuilder {
        builder
            .friction(self.friction)
            .friction_combine_rule(CoefficientCombineRule::Average)
            .restitution(self.restitution)
            .restitution_combine_rule(CoefficientCombineRule::Max)
    }
}
