//! GPU-compatible data types for the line pipeline
//!
//! These types match the layouts in `line.wgsl`.

use bytemuck::{Pod, Zeroable};

/// A line endpoint in window pixels with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in pixels (origin top-left, y down)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Size of the pixel space the lines are authored in
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewportUniforms {
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

impl ViewportUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width, height],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ViewportUniforms {
    fn default() -> Self {
        Self::new(400.0, 300.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_vertex_size() {
        // 2 floats position + 4 floats color
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    }

    #[test]
    fn test_viewport_uniforms_alignment() {
        // Uniform buffers need 16-byte alignment
        assert_eq!(std::mem::size_of::<ViewportUniforms>() % 16, 0);
    }
}
