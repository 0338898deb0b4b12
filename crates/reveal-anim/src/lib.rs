//! Progress-driven evaluation of a partially drawn path.
//!
//! Every function here is pure. A path of `n` segments splits progress into
//! `n` equal buckets regardless of arc length; a gradient of `k` stops splits
//! it into `k - 1` buckets.

pub mod endpoint;
pub mod gradient;
pub mod progress;

pub use endpoint::{active_segment, endpoint_position};
pub use gradient::{sample_color, GradientStops};
pub use progress::{draw_count, draw_counts};
