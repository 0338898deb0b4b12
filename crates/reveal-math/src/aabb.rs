use crate::Point2;
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut min = first;
        let mut max = first;
        for &p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    pub fn contains_point(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec2(1.0, 2.0), dvec2(-1.0, 5.0), dvec2(3.0, -1.0)];
        let aabb = Aabb2::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec2(-1.0, -1.0));
        assert_eq!(aabb.max, dvec2(3.0, 5.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb2::from_points(&[]).is_none());
    }

    #[test]
    fn test_contains_point() {
        let a = Aabb2::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0));
        assert!(a.contains_point(dvec2(0.5, 0.5)));
        assert!(a.contains_point(dvec2(1.0, 0.0)));
        assert!(!a.contains_point(dvec2(1.5, 0.5)));
    }
}
