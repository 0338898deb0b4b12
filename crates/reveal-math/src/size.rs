use crate::Vector2;
use serde::{Deserialize, Serialize};

/// Width and height of a design box or render surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size2 {
    pub width: f64,
    pub height: f64,
}

impl Size2 {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn to_vec2(self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// Both dimensions strictly positive (and not NaN).
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl From<(f64, f64)> for Size2 {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}
