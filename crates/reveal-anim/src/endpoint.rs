//! Position of the moving marker at the tip of the drawn stroke.

use reveal_geometry::{BezierSegment, Curve};
use reveal_math::Point2;

/// Segment containing `progress` and the local curve parameter inside it.
///
/// Uses the same equal-width buckets as [`crate::progress::draw_count`], so
/// the returned point lines up with the tip of the drawn subdivisions. The
/// index is clamped to the valid range; progress outside `[0, 1]` then
/// extrapolates the first or last segment.
///
/// Returns `None` for an empty segment list.
pub fn active_segment(progress: f64, segment_count: usize) -> Option<(usize, f64)> {
    if segment_count == 0 {
        return None;
    }
    if progress == 0.0 {
        return Some((0, 0.0));
    }

    // progress / (1 / n), kept as a product so progress 1 lands exactly on n.
    let ratio = progress * segment_count as f64;
    let index = (ratio.ceil() - 1.0).clamp(0.0, (segment_count - 1) as f64) as usize;
    let t = ratio - index as f64;
    Some((index, t))
}

/// Point on the path where the marker sits at `progress`.
///
/// At progress 0 this is exactly the first segment's `a`, at progress 1
/// exactly the last segment's `b`. Returns `None` for an empty segment list.
pub fn endpoint_position(progress: f64, segments: &[BezierSegment]) -> Option<Point2> {
    if progress == 0.0 {
        return segments.first().map(|segment| segment.a);
    }
    let (index, t) = active_segment(progress, segments.len())?;
    Some(segments[index].point_at(t))
}
