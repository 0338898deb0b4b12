//! Design space to device space normalization.

use reveal_core::RevealConfig;
use reveal_math::{DeviceTransform, Size2};

use crate::curve::BezierSegment;
use crate::path::CurvePath;

/// Transform that maps `path`'s design space onto a target surface.
pub fn device_transform(path: &CurvePath, target: Size2, inset: f64) -> DeviceTransform {
    DeviceTransform::new(path.view_box(), target, path.scale(), inset)
}

/// Map every segment of `path` into device space for a surface of size `target`.
///
/// The scaled design box is centered on the target. Mismatched aspect ratios
/// letterbox instead of stretching. `path` is not modified.
pub fn normalize(path: &CurvePath, target: Size2) -> Vec<BezierSegment> {
    normalize_with_inset(path, target, RevealConfig::DEFAULT_INSET)
}

pub fn normalize_with_inset(path: &CurvePath, target: Size2, inset: f64) -> Vec<BezierSegment> {
    let transform = device_transform(path, target, inset);
    path.segments()
        .iter()
        .map(|segment| segment.map_points(|p| transform.apply(p)))
        .collect()
}

/// Stroke width relative to the target surface width.
pub fn normalized_stroke_width(path: &CurvePath, target: Size2) -> f64 {
    path.stroke_width() / target.width
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use reveal_math::{dvec2, Vector2};

    fn square_path(scale: f64) -> CurvePath {
        let mut path = CurvePath::with_scale(Size2::new(100.0, 100.0), 10.0, scale);
        path.move_to(dvec2(0.0, 0.0))
            .add_curve(dvec2(100.0, 100.0), dvec2(50.0, 0.0), dvec2(100.0, 50.0));
        path
    }

    #[test]
    fn test_matching_target_has_zero_shift() {
        let path = square_path(1.0);
        let t = device_transform(&path, Size2::new(100.0, 100.0), RevealConfig::DEFAULT_INSET);
        assert_eq!(t.shift, Vector2::ZERO);
    }

    #[test]
    fn test_normalize_maps_corners() {
        let path = square_path(1.0);
        let segs = normalize(&path, Size2::new(100.0, 100.0));
        assert_eq!(segs.len(), 1);
        assert_abs_diff_eq!(
            segs[0],
            BezierSegment::new(dvec2(-0.9, 0.9), dvec2(0.9, -0.9), dvec2(0.0, 0.9), dvec2(0.9, 0.0)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_normalize_does_not_mutate() {
        let path = square_path(1.0);
        let before = path.clone();
        let _ = normalize(&path, Size2::new(300.0, 200.0));
        assert_eq!(path, before);
    }

    #[test]
    fn test_resolution_independent() {
        // Same aspect ratio, scale tracks the surface: identical device geometry.
        let small = normalize(&square_path(1.0), Size2::new(100.0, 100.0));
        let large = normalize(&square_path(2.0), Size2::new(200.0, 200.0));
        assert_abs_diff_eq!(small[0], large[0], epsilon = 1e-12);
    }

    #[test]
    fn test_letterboxing_keeps_proportions() {
        let path = square_path(1.0);
        let segs = normalize_with_inset(&path, Size2::new(200.0, 100.0), 1.0);
        // 100x100 box centered in a 200x100 surface: x range [-0.5, 0.5], y full.
        assert_abs_diff_eq!(segs[0].a.x, -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(segs[0].b.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(segs[0].a.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(segs[0].b.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized_stroke_width() {
        let path = square_path(1.0);
        assert_abs_diff_eq!(normalized_stroke_width(&path, Size2::new(400.0, 100.0)), 0.025);
    }

    #[test]
    fn test_empty_path_normalizes_to_nothing() {
        let path = CurvePath::new(Size2::new(10.0, 10.0), 1.0);
        assert!(normalize(&path, Size2::new(10.0, 10.0)).is_empty());
    }
}
