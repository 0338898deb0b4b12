//! Bezier reveal geometry: cubic segments, curve paths, and normalization.

pub mod curve;
pub mod normalize;
pub mod path;
pub mod samples;
pub mod tessellate;

pub use curve::{BezierSegment, Curve};
pub use normalize::{normalize, normalize_with_inset, normalized_stroke_width};
pub use path::{CurvePath, PathState};
