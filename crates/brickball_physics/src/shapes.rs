//! Collision shape descriptions and role tags

use rapier2d::prelude::ColliderBuilder;

use crate::error::PhysicsError;

/// Role of a shape in the game, used to classify contacts
///
/// Stored in the collider's `user_data` so a contact pair can be classified
/// without a side table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    Wall,
    Paddle,
    Ball,
    Block,
}

impl ShapeTag {
    const ALL: [ShapeTag; 4] = [ShapeTag::Wall, ShapeTag::Paddle, ShapeTag::Ball, ShapeTag::Block];

    /// Encoding used in collider user data; zero means "untagged"
    pub(crate) fn to_user_data(self) -> u128 {
        match self {
            ShapeTag::Wall => 1,
            ShapeTag::Paddle => 2,
            ShapeTag::Ball => 3,
            ShapeTag::Block => 4,
        }
    }

    pub(crate) fn from_user_data(data: u128) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.to_user_data() == data)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeTag::Wall => "wall",
            ShapeTag::Paddle => "racket",
            ShapeTag::Ball => "ball",
            ShapeTag::Block => "block",
        }
    }
}

impl std::fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometric form of a shape, in simulation units
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeDesc {
    /// Box centered on the body, given by half extents
    Box { half_width: f32, half_height: f32 },
    /// Circle centered on the body
    Circle { radius: f32 },
}

impl ShapeDesc {
    pub fn cuboid(half_width: f32, half_height: f32) -> Self {
        ShapeDesc::Box {
            half_width,
            half_height,
        }
    }

    pub fn circle(radius: f32) -> Self {
        ShapeDesc::Circle { radius }
    }

    /// Reject geometry the engine cannot simulate
    pub fn validate(&self) -> Result<(), PhysicsError> {
        match *self {
            ShapeDesc::Box {
                half_width,
                half_height,
            } => {
                if !(half_width.is_finite() && half_height.is_finite())
                    || half_width <= 0.0
                    || half_height <= 0.0
                {
                    return Err(PhysicsError::InvalidShape(format!(
                        "degenerate box with half extents ({}, {})",
                        half_width, half_height
                    )));
                }
            }
            ShapeDesc::Circle { radius } => {
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(PhysicsError::InvalidShape(format!(
                        "circle radius must be positive, got {}",
                        radius
                    )));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn builder(&self) -> ColliderBuilder {
        match *self {
            ShapeDesc::Box {
                half_width,
                half_height,
            } => ColliderBuilder::cuboid(half_width, half_height),
            ShapeDesc::Circle { radius } => ColliderBuilder::ball(radius),
        }
    }
}
