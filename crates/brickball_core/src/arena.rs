//! Arena layout in pixel coordinates
//!
//! Pixel space has its origin at the top-left of the window with y growing
//! downward. The builder converts everything here to simulation units.

use glam::Vec2;

/// Axis-aligned rectangle given by center and half extents, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl PixelRect {
    pub const fn new(cx: f32, cy: f32, half_width: f32, half_height: f32) -> Self {
        Self {
            center: Vec2::new(cx, cy),
            half_extents: Vec2::new(half_width, half_height),
        }
    }
}

/// Horizontal range the paddle center may occupy, exclusive on both ends
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaddleBounds {
    pub min_x: f32,
    pub max_x: f32,
}

impl PaddleBounds {
    pub const fn new(min_x: f32, max_x: f32) -> Self {
        Self { min_x, max_x }
    }

    /// Strictly inside the bounds
    pub fn contains(&self, x_px: f32) -> bool {
        x_px > self.min_x && x_px < self.max_x
    }
}

impl Default for PaddleBounds {
    fn default() -> Self {
        Self::new(50.0, 350.0)
    }
}

/// The walls of the arena
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Walls {
    pub left: PixelRect,
    pub right: PixelRect,
    pub top: PixelRect,
    pub bottom: PixelRect,
}

impl Walls {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PixelRect)> {
        [
            ("left", &self.left),
            ("right", &self.right),
            ("top", &self.top),
            ("bottom", &self.bottom),
        ]
        .into_iter()
    }
}

/// A static obstacle block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockLayout {
    pub rect: PixelRect,
    /// Rotation in radians
    pub rotation: f32,
}

/// Full play field description, in pixels
#[derive(Clone, Debug, PartialEq)]
pub struct ArenaLayout {
    /// Window size the layout was authored for
    pub size: Vec2,
    pub walls: Walls,
    pub paddle: PixelRect,
    pub ball_center: Vec2,
    pub ball_radius: f32,
    pub block: BlockLayout,
}

impl Default for ArenaLayout {
    /// The 400x300 reference arena
    #[allow(clippy::approx_constant)]
    fn default() -> Self {
        Self {
            size: Vec2::new(400.0, 300.0),
            walls: Walls {
                left: PixelRect::new(10.0, 150.0, 10.0, 150.0),
                right: PixelRect::new(390.0, 150.0, 10.0, 150.0),
                top: PixelRect::new(200.0, 10.0, 180.0, 10.0),
                bottom: PixelRect::new(200.0, 290.0, 180.0, 10.0),
            },
            paddle: PixelRect::new(200.0, 265.0, 30.0, 5.0),
            ball_center: Vec2::new(200.0, 250.0),
            ball_radius: 5.0,
            block: BlockLayout {
                rect: PixelRect::new(206.0, 120.0, 50.0, 5.0),
                rotation: 85.0 * 3.14 / 180.0,
            },
        }
    }
}
