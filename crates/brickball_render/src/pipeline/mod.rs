//! Rendering pipeline components
//!
//! A single line-list pipeline draws the debug outlines of every shape.

pub mod line_pipeline;
pub mod types;

pub use line_pipeline::LinePipeline;
pub use types::{LineVertex, ViewportUniforms};
