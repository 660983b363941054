//! 2D physics for brickball
//!
//! This crate wraps rapier2d into the small surface the game needs:
//! - Unit conversion between pixels and simulation units
//! - Body and shape descriptions with role tags
//! - A zero-gravity world advanced by a fixed timestep
//! - Contact begin/end events per step
//! - A debug draw pass over every collider

pub mod body;
pub mod debug_draw;
pub mod error;
pub mod events;
pub mod material;
pub mod shapes;
pub mod units;
pub mod world;

// Re-export commonly used types
pub use body::{BodyDesc, BodyHandle, BodyKind};
pub use debug_draw::{srgb_to_linear, DebugDrawSink, DrawTransform, HexColor};
pub use error::PhysicsError;
pub use events::{ContactEvent, ContactKind, ContactShape};
pub use material::PhysicsMaterial;
pub use shapes::{ShapeDesc, ShapeTag};
pub use units::UnitScale;
pub use world::{PhysicsWorld, WorldConfig};

pub use rapier2d;

use glam::Vec2;
use rapier2d::prelude::{Real, Vector};

pub(crate) fn to_na(v: Vec2) -> Vector<Real> {
    Vector::new(v.x, v.y)
}

pub(crate) fn from_na(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}
