//! Core game session for brickball
//!
//! This crate assembles the play field on top of `brickball_physics`:
//!
//! - [`ArenaLayout`] - Walls, paddle, ball and block in pixel coordinates
//! - [`WorldBuilder`] - Converts the layout into a populated physics world
//! - [`GameSession`] - Owns the world, paddle and ball; applies paddle moves
//!   and advances the fixed step
//! - [`BuildError`] - Fatal configuration problems found while building

mod arena;
mod builder;
mod error;
mod session;

pub use arena::{ArenaLayout, BlockLayout, PaddleBounds, PixelRect, Walls};
pub use builder::{SessionSettings, WorldBuilder};
pub use error::BuildError;
pub use session::{GameSession, PaddleMove};

// Re-export physics types for convenient access through brickball_core
pub use brickball_physics::{
    BodyHandle, BodyKind, ContactEvent, ContactKind, DebugDrawSink, PhysicsWorld, ShapeTag,
    UnitScale, WorldConfig,
};
pub use brickball_physics::srgb_to_linear;
