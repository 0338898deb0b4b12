use crate::{Point2, Size2, Vector2};
use serde::{Deserialize, Serialize};

/// Maps design-space points into the renderer's symmetric device space.
///
/// A point first goes to target-relative unit space, `v / target * scale + shift`,
/// where `shift` centers the scaled design box inside the target. The unit point
/// is then flipped into device convention `(2x - 1, 1 - 2y)` and multiplied by
/// `inset` so the stroke does not touch the surface edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeviceTransform {
    pub target: Vector2,
    pub scale: f64,
    pub shift: Vector2,
    pub inset: f64,
}

impl DeviceTransform {
    pub fn new(design_box: Size2, target: Size2, scale: f64, inset: f64) -> Self {
        let target = target.to_vec2();
        let shift = (target - design_box.to_vec2() * scale).abs() / 2.0 / target;
        Self {
            target,
            scale,
            shift,
            inset,
        }
    }

    /// Position inside the target surface, `(0, 0)` top-left and `(1, 1)` bottom-right.
    pub fn to_unit(&self, v: Point2) -> Point2 {
        v / self.target * self.scale + self.shift
    }

    pub fn apply(&self, v: Point2) -> Point2 {
        let unit = self.to_unit(v);
        Point2::new(2.0 * unit.x - 1.0, -2.0 * unit.y + 1.0) * self.inset
    }
}
