// Progress, endpoint and gradient behaviour over a whole normalized path.

use approx::assert_abs_diff_eq;
use reveal_anim::{active_segment, draw_counts, endpoint_position, sample_color, GradientStops};
use reveal_geometry::samples::{hello_colors, hello_path};
use reveal_geometry::{normalize, BezierSegment, Curve};
use reveal_math::{Rgba, Size2};

fn hello_segments() -> Vec<BezierSegment> {
    normalize(&hello_path(), Size2::new(800.0, 600.0))
}

#[test]
fn test_counts_cover_path_in_order() {
    let n = hello_segments().len();
    for step in 0..=100 {
        let progress = step as f64 / 100.0;
        let counts = draw_counts(n, progress, 300);
        // Drawn segments form a prefix: full ones, at most one partial, then empty ones.
        let partial = counts.iter().position(|&c| c < 300).unwrap_or(n);
        assert!(counts[partial..].iter().skip(1).all(|&c| c == 0), "gap in drawing at {}", progress);
    }
}

#[test]
fn test_counts_per_segment_never_shrink() {
    let n = 7;
    let mut previous = vec![0; n];
    for step in 0..=700 {
        let counts = draw_counts(n, step as f64 / 700.0, 50);
        for (now, before) in counts.iter().zip(&previous) {
            assert!(now >= before);
        }
        previous = counts;
    }
    assert!(previous.iter().all(|&c| c == 50));
}

#[test]
fn test_endpoint_exact_at_bounds() {
    let segments = hello_segments();
    assert_eq!(endpoint_position(0.0, &segments), Some(segments[0].a));
    assert_eq!(endpoint_position(1.0, &segments), Some(segments[segments.len() - 1].b));
}

#[test]
fn test_endpoint_is_continuous() {
    let segments = hello_segments();
    let steps = 3300;
    let mut previous = endpoint_position(0.0, &segments).unwrap();
    for step in 1..=steps {
        let point = endpoint_position(step as f64 / steps as f64, &segments).unwrap();
        assert!((point - previous).length() < 0.1, "marker jumped at step {}", step);
        previous = point;
    }
}

#[test]
fn test_endpoint_agrees_with_active_segment() {
    let segments = hello_segments();
    for progress in [0.05, 0.33, 0.5, 0.81, 0.99] {
        let (index, t) = active_segment(progress, segments.len()).unwrap();
        let expected = segments[index].point_at(t);
        let point = endpoint_position(progress, &segments).unwrap();
        assert_abs_diff_eq!(point.x, expected.x);
        assert_abs_diff_eq!(point.y, expected.y);
    }
}

#[test]
fn test_empty_segments_have_no_endpoint() {
    assert!(endpoint_position(0.0, &[]).is_none());
    assert!(endpoint_position(0.5, &[]).is_none());
    assert!(draw_counts(0, 0.5, 300).is_empty());
}

#[test]
fn test_hello_gradient_bounds() {
    let colors = hello_colors();
    assert_eq!(sample_color(0.0, &colors).unwrap(), colors[0]);
    assert_eq!(sample_color(1.0, &colors).unwrap(), colors[colors.len() - 1]);
    // Six stops: progress 0.2 lands on the second stop.
    assert_abs_diff_eq!(sample_color(0.2, &colors).unwrap(), colors[1], epsilon = 1e-12);
}

#[test]
fn test_gradient_channels_stay_between_neighbours() {
    let stops = GradientStops::new(hello_colors()).unwrap();
    for step in 0..=50 {
        let c = stops.sample(step as f64 / 50.0);
        for channel in [c.r, c.g, c.b, c.a] {
            assert!((-1e-12..=1.0 + 1e-12).contains(&channel));
        }
    }
}

#[test]
fn test_gradient_roundtrips_through_json() {
    let stops = GradientStops::new(vec![Rgba::RED, Rgba::WHITE]).unwrap();
    let json = serde_json::to_string(&stops).unwrap();
    let back: GradientStops = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stops);
}
