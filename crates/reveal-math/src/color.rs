//! RGBA colors with normalized float channels.

use approx::{AbsDiffEq, RelativeEq};
use glam::DVec4;
use serde::{Deserialize, Serialize};

/// A straight (non-premultiplied) RGBA color, each channel nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        )
    }

    pub fn from_vec4(v: DVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    pub fn to_vec4(self) -> DVec4 {
        DVec4::new(self.r, self.g, self.b, self.a)
    }

    /// Channel-wise linear interpolation, `t = 0` yields `self`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let start = self.to_vec4();
        Self::from_vec4(start + t * (other.to_vec4() - start))
    }

    pub fn to_f32_array(self) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, self.a as f32]
    }
}

impl From<[f64; 4]> for Rgba {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl AbsDiffEq for Rgba {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.a.abs_diff_eq(&other.a, epsilon)
    }
}

impl RelativeEq for Rgba {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.a.relative_eq(&other.a, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp_endpoints() {
        let c = Rgba::RED.lerp(Rgba::BLUE, 0.0);
        assert_eq!(c, Rgba::RED);
        let c = Rgba::RED.lerp(Rgba::BLUE, 1.0);
        assert_eq!(c, Rgba::BLUE);
    }

    #[test]
    fn test_lerp_midpoint() {
        let c = Rgba::new(0.0, 0.2, 1.0, 1.0).lerp(Rgba::new(1.0, 0.6, 0.0, 0.5), 0.5);
        assert_abs_diff_eq!(c, Rgba::new(0.5, 0.4, 0.5, 0.75), epsilon = 1e-12);
    }

    #[test]
    fn test_from_rgb8() {
        let c = Rgba::from_rgb8(255, 0, 51);
        assert_abs_diff_eq!(c, Rgba::new(1.0, 0.0, 0.2, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_to_f32_array() {
        assert_eq!(Rgba::new(0.25, 0.5, 0.75, 1.0).to_f32_array(), [0.25, 0.5, 0.75, 1.0]);
    }
}
