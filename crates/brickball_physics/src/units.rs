//! Conversion between simulation units and display pixels
//!
//! All geometry is authored in pixels and converted before it reaches the
//! physics world; everything read back from the world is converted to pixels
//! before it is drawn.

use glam::Vec2;

use crate::error::PhysicsError;

/// Fixed pixels-per-simulation-unit scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitScale {
    pixels_per_unit: f32,
}

impl UnitScale {
    /// 30 pixels per simulation unit
    pub const REFERENCE: Self = Self {
        pixels_per_unit: 30.0,
    };

    /// Create a scale, rejecting zero, negative and non-finite values
    pub fn new(pixels_per_unit: f32) -> Result<Self, PhysicsError> {
        if pixels_per_unit.is_finite() && pixels_per_unit > 0.0 {
            Ok(Self { pixels_per_unit })
        } else {
            Err(PhysicsError::InvalidScale(pixels_per_unit))
        }
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    #[inline]
    pub fn to_sim_units(&self, pixels: f32) -> f32 {
        pixels / self.pixels_per_unit
    }

    #[inline]
    pub fn to_pixel_units(&self, sim_units: f32) -> f32 {
        sim_units * self.pixels_per_unit
    }

    #[inline]
    pub fn vec_to_sim_units(&self, pixels: Vec2) -> Vec2 {
        pixels / self.pixels_per_unit
    }

    #[inline]
    pub fn vec_to_pixel_units(&self, sim_units: Vec2) -> Vec2 {
        sim_units * self.pixels_per_unit
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_scale() {
        let scale = UnitScale::default();
        assert_eq!(scale.pixels_per_unit(), 30.0);
        assert_eq!(scale.to_sim_units(150.0), 5.0);
        assert_eq!(scale.to_pixel_units(5.0), 150.0);
    }

    #[test]
    fn test_rejects_invalid_scale() {
        assert!(UnitScale::new(0.0).is_err());
        assert!(UnitScale::new(-30.0).is_err());
        assert!(UnitScale::new(f32::NAN).is_err());
        assert!(UnitScale::new(f32::INFINITY).is_err());
        assert!(UnitScale::new(12.5).is_ok());
    }

    #[test]
    fn test_vector_conversion() {
        let scale = UnitScale::default();
        let sim = scale.vec_to_sim_units(Vec2::new(200.0, 250.0));
        assert!((sim - Vec2::new(6.666_667, 8.333_333)).length() < 1e-5);
        let px = scale.vec_to_pixel_units(sim);
        assert!((px - Vec2::new(200.0, 250.0)).length() < 1e-3);
    }

    proptest! {
        #[test]
        fn round_trip_preserves_pixels(px in -1.0e5f32..1.0e5, ppu in 0.5f32..500.0) {
            let scale = UnitScale::new(ppu).unwrap();
            let back = scale.to_pixel_units(scale.to_sim_units(px));
            prop_assert!((back - px).abs() <= px.abs().max(1.0) * 1e-5);
        }
    }
}
