//! Brickball - a physics-driven 2D brick-ball arcade core
//!
//! The binary wires these pieces into a winit event loop; they live in a
//! library so tests can reach them.

pub mod config;
pub mod input;
pub mod lifecycle;
pub mod systems;
