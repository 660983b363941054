//! Debug draw sink that turns world shapes into pixel-space line segments

use brickball_physics::{DebugDrawSink, DrawTransform, HexColor, UnitScale};
use glam::Vec2;

use crate::pipeline::LineVertex;

/// Segments used to approximate a circle outline
pub const CIRCLE_SEGMENTS: usize = 20;

/// Collects line segments for one frame
///
/// Shapes arrive in simulation units and are converted to pixels with the
/// session's [`UnitScale`]. Call [`Self::clear`] at the start of every frame.
pub struct DebugLineRenderer {
    scale: UnitScale,
    vertices: Vec<LineVertex>,
}

impl DebugLineRenderer {
    pub fn new(scale: UnitScale) -> Self {
        Self {
            scale,
            vertices: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Line list vertices, two per segment
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    fn push_segment(&mut self, from: Vec2, to: Vec2, color: [f32; 4]) {
        let from = self.scale.vec_to_pixel_units(from);
        let to = self.scale.vec_to_pixel_units(to);
        self.vertices.push(LineVertex::new(from.to_array(), color));
        self.vertices.push(LineVertex::new(to.to_array(), color));
    }

    /// Closed loop through `points`, in simulation units
    fn push_loop(&mut self, points: &[Vec2], color: [f32; 4]) {
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.push_segment(from, to, color);
        }
    }
}

impl DebugDrawSink for DebugLineRenderer {
    fn draw_polygon(
        &mut self,
        transform: DrawTransform,
        vertices: &[Vec2],
        _radius: f32,
        color: HexColor,
    ) {
        if vertices.len() < 2 {
            return;
        }
        let points: Vec<Vec2> = vertices
            .iter()
            .map(|&v| transform.transform_point(v))
            .collect();
        self.push_loop(&points, color.to_rgba_f32());
    }

    fn draw_circle(&mut self, transform: DrawTransform, radius: f32, color: HexColor) {
        let points: Vec<Vec2> = (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
                transform.transform_point(Vec2::from_angle(angle) * radius)
            })
            .collect();
        self.push_loop(&points, color.to_rgba_f32());
    }
}
