//! Progress to per-segment subdivision counts.

/// Number of subdivisions of segment `segment_index` to draw at `progress`.
///
/// Segment `i` owns the progress bucket ending at `(i + 1) / segment_count`.
/// Segments whose bucket ends at or before `progress` are drawn fully, segments
/// whose bucket starts after it are not drawn, and the one straddling it gets
/// `ceil((bucket - gap) * total)` subdivisions, `gap` being the distance from
/// `progress` to the bucket end.
///
/// # Arguments
/// * `segment_index` - 0-based index of the segment
/// * `segment_count` - Number of segments in the path
/// * `progress` - Global progress, `0` draws nothing and `1` draws everything
/// * `subdivisions` - Subdivisions per segment when fully drawn
pub fn draw_count(segment_index: usize, segment_count: usize, progress: f64, subdivisions: u32) -> u32 {
    if segment_count == 0 || segment_index >= segment_count {
        return 0;
    }

    let total = (segment_count as f64) * f64::from(subdivisions);
    let bucket = 1.0 / segment_count as f64;
    let position = ((segment_index + 1) as f64 * f64::from(subdivisions)) / total;

    if !(position > progress) {
        return subdivisions;
    }

    let gap = position - progress;
    if gap > bucket {
        return 0;
    }

    let partial = ((bucket - gap) * total).ceil() as u32;
    partial.min(subdivisions)
}

/// [`draw_count`] for every segment of a path, in order.
pub fn draw_counts(segment_count: usize, progress: f64, subdivisions: u32) -> Vec<u32> {
    (0..segment_count)
        .map(|i| draw_count(i, segment_count, progress, subdivisions))
        .collect()
}
