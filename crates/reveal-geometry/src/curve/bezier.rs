//! Cubic bezier segment.

use approx::{AbsDiffEq, RelativeEq};
use reveal_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::Curve;

/// One cubic bezier arc from `a` to `b`.
///
/// `p1` is the control point leaving `a` and `p2` the one arriving at `b`:
/// `B(t) = (1-t)^3 a + 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3 b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub a: Point2,
    pub b: Point2,
    pub p1: Point2,
    pub p2: Point2,
}

impl BezierSegment {
    pub fn new(a: Point2, b: Point2, p1: Point2, p2: Point2) -> Self {
        Self { a, b, p1, p2 }
    }

    /// Apply `f` to all four points.
    pub fn map_points(&self, f: impl Fn(Point2) -> Point2) -> Self {
        Self {
            a: f(self.a),
            b: f(self.b),
            p1: f(self.p1),
            p2: f(self.p2),
        }
    }

    pub fn points(&self) -> [Point2; 4] {
        [self.a, self.p1, self.p2, self.b]
    }

    /// Control point that continues this segment's end tangent through `b`.
    pub fn mirrored_p2(&self) -> Point2 {
        2.0 * self.b - self.p2
    }
}

impl Curve for BezierSegment {
    fn point_at(&self, t: f64) -> Point2 {
        let nt = 1.0 - t;
        nt.powi(3) * self.a
            + 3.0 * nt.powi(2) * t * self.p1
            + 3.0 * nt * t.powi(2) * self.p2
            + t.powi(3) * self.b
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        let nt = 1.0 - t;
        3.0 * nt.powi(2) * (self.p1 - self.a)
            + 6.0 * nt * t * (self.p2 - self.p1)
            + 3.0 * t.powi(2) * (self.b - self.p2)
    }
}

fn point_abs_diff_eq(lhs: Point2, rhs: Point2, epsilon: f64) -> bool {
    lhs.x.abs_diff_eq(&rhs.x, epsilon) && lhs.y.abs_diff_eq(&rhs.y, epsilon)
}

fn point_relative_eq(lhs: Point2, rhs: Point2, epsilon: f64, max_relative: f64) -> bool {
    lhs.x.relative_eq(&rhs.x, epsilon, max_relative)
        && lhs.y.relative_eq(&rhs.y, epsilon, max_relative)
}

impl AbsDiffEq for BezierSegment {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.points()
            .iter()
            .zip(other.points())
            .all(|(&l, r)| point_abs_diff_eq(l, r, epsilon))
    }
}

impl RelativeEq for BezierSegment {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.points()
            .iter()
            .zip(other.points())
            .all(|(&l, r)| point_relative_eq(l, r, epsilon, max_relative))
    }
}
