//! Debug drawing of collider outlines
//!
//! The world walks its colliders and hands each one to a [`DebugDrawSink`]
//! in simulation units. Sinks convert to pixels and issue their own draw
//! calls.

use glam::Vec2;

use crate::body::BodyKind;

/// Decode one 8-bit sRGB channel into linear light
///
/// Render targets with an sRGB format re-encode on write, so colors handed
/// to the GPU must be linear.
pub fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Packed `0xRRGGBB` color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexColor(pub u32);

impl HexColor {
    pub const PALE_GREEN: Self = Self(0x98FB98);
    pub const ROYAL_BLUE: Self = Self(0x4169E1);
    pub const PINK: Self = Self(0xFFC0CB);
    pub const GRAY: Self = Self(0x808080);

    /// Extract the 8-bit red, green and blue channels
    pub fn rgb(&self) -> (u8, u8, u8) {
        let r = ((self.0 >> 16) & 0xFF) as u8;
        let g = ((self.0 >> 8) & 0xFF) as u8;
        let b = (self.0 & 0xFF) as u8;
        (r, g, b)
    }

    /// Linear RGBA with full opacity
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        let (r, g, b) = self.rgb();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), 1.0]
    }

    /// Outline color for a body, by kind and sleep state
    pub fn for_body(kind: BodyKind, sleeping: bool) -> Self {
        match kind {
            BodyKind::Static => Self::PALE_GREEN,
            BodyKind::Kinematic => Self::ROYAL_BLUE,
            BodyKind::Dynamic if sleeping => Self::GRAY,
            BodyKind::Dynamic => Self::PINK,
        }
    }
}

/// Rigid transform of a collider in simulation units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawTransform {
    pub translation: Vec2,
    /// Rotation in radians
    pub rotation: f32,
}

impl DrawTransform {
    pub fn new(translation: Vec2, rotation: f32) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Map a collider-local point into world space
    pub fn transform_point(&self, local: Vec2) -> Vec2 {
        Vec2::from_angle(self.rotation).rotate(local) + self.translation
    }
}

/// Receiver for the world's debug draw pass
pub trait DebugDrawSink {
    /// A polygon given by local vertices; draw it as a closed loop
    ///
    /// `radius` is the rounding radius of the polygon and is zero for boxes.
    fn draw_polygon(&mut self, transform: DrawTransform, vertices: &[Vec2], radius: f32, color: HexColor);

    /// A circle centered on the transform's origin
    fn draw_circle(&mut self, transform: DrawTransform, radius: f32, color: HexColor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_extraction() {
        assert_eq!(HexColor(0x212121).rgb(), (33, 33, 33));
        assert_eq!(HexColor::ROYAL_BLUE.rgb(), (0x41, 0x69, 0xE1));
        let [r, g, b, a] = HexColor(0xFF0000).to_rgba_f32();
        assert!((r - 1.0).abs() < 1e-6);
        assert_eq!((g, b, a), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_srgb_to_linear() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert!((srgb_to_linear(255) - 1.0).abs() < 1e-6);
        // Background gray 0x21
        assert!((srgb_to_linear(33) - 0.0152).abs() < 1e-4);
        // Linear segment near black
        assert!((srgb_to_linear(10) - 10.0 / 255.0 / 12.92).abs() < 1e-7);

        let [r, g, b, a] = HexColor::ROYAL_BLUE.to_rgba_f32();
        assert!((r - srgb_to_linear(0x41)).abs() < 1e-7);
        assert!(g < 0x69 as f32 / 255.0);
        assert!(b < 0xE1 as f32 / 255.0);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_body_colors() {
        assert_eq!(HexColor::for_body(BodyKind::Static, false), HexColor::PALE_GREEN);
        assert_eq!(HexColor::for_body(BodyKind::Kinematic, false), HexColor::ROYAL_BLUE);
        assert_eq!(HexColor::for_body(BodyKind::Dynamic, false), HexColor::PINK);
        assert_eq!(HexColor::for_body(BodyKind::Dynamic, true), HexColor::GRAY);
    }

    #[test]
    fn test_transform_point() {
        let transform = DrawTransform::new(Vec2::new(1.0, 2.0), std::f32::consts::FRAC_PI_2);
        let p = transform.transform_point(Vec2::new(1.0, 0.0));
        assert!((p - Vec2::new(1.0, 3.0)).length() < 1e-6);
    }
}
