//! Tessellation utilities for converting curves to discrete representations.

use reveal_math::Point2;

use crate::curve::Curve;

/// Sample a curve at `subdivisions + 1` evenly spaced parameters.
///
/// This is the parameterization the stroke renderer uses per subdivision, so
/// drawing `k` subdivisions of a segment covers points `0..=k` of the result.
/// The first and last points are the exact curve endpoints.
pub fn sample_uniform(curve: &dyn Curve, subdivisions: usize) -> Vec<Point2> {
    let (t_min, t_max) = curve.domain();
    if subdivisions == 0 {
        return vec![curve.point_at(t_min)];
    }
    (0..=subdivisions)
        .map(|i| {
            let t = if i == subdivisions {
                t_max
            } else {
                t_min + (t_max - t_min) * i as f64 / subdivisions as f64
            };
            curve.point_at(t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::BezierSegment;
    use reveal_math::dvec2;

    fn straight() -> BezierSegment {
        BezierSegment::new(
            dvec2(0.0, 0.0),
            dvec2(3.0, 0.0),
            dvec2(1.0, 0.0),
            dvec2(2.0, 0.0),
        )
    }

    #[test]
    fn test_sample_uniform_count_and_ends() {
        let seg = straight();
        let pts = sample_uniform(&seg, 10);
        assert_eq!(pts.len(), 11);
        assert_eq!(pts[0], seg.a);
        assert_eq!(pts[10], seg.b);
    }

    #[test]
    fn test_sample_uniform_linear_spacing() {
        // Evenly spaced control points give a linear parameterization.
        let pts = sample_uniform(&straight(), 3);
        for (i, p) in pts.iter().enumerate() {
            assert!((p.x - i as f64).abs() < 1e-12);
            assert!(p.y.abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_uniform_zero_subdivisions() {
        let pts = sample_uniform(&straight(), 0);
        assert_eq!(pts, vec![dvec2(0.0, 0.0)]);
    }
}
