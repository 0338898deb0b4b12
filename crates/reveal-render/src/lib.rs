pub mod frame;
pub mod gpu;
pub mod indices;

// Re-export main types
pub use frame::{FramePlan, FramePlanner, Marker};
pub use gpu::{GpuGlobals, GpuMarker, GpuSegment};
pub use indices::stroke_indices;
