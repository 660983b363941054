//! Debug rendering for brickball
//!
//! This crate provides the wgpu-based line renderer that displays the
//! physics world's shapes as outlines.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::LinePipeline`] - Line list rendering over a cleared background
//! - [`debug_renderer::DebugLineRenderer`] - Debug draw sink producing line vertices

pub mod context;
pub mod debug_renderer;
pub mod pipeline;

pub use context::{ContextError, RenderContext};
pub use debug_renderer::DebugLineRenderer;
