//! Tightly packed `f32` records for upload to a GPU renderer.

use bytemuck::{Pod, Zeroable};
use reveal_geometry::BezierSegment;
use reveal_math::{Point2, Rgba};

fn point_to_f32(p: Point2) -> [f32; 2] {
    [p.x as f32, p.y as f32]
}

/// One bezier segment, read per instance by the stroke vertex shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuSegment {
    pub a: [f32; 2],
    pub b: [f32; 2],
    pub p1: [f32; 2],
    pub p2: [f32; 2],
}

impl GpuSegment {
    pub fn from_segment(segment: &BezierSegment) -> Self {
        Self {
            a: point_to_f32(segment.a),
            b: point_to_f32(segment.b),
            p1: point_to_f32(segment.p1),
            p2: point_to_f32(segment.p2),
        }
    }
}

/// Per-frame values shared by every stroke instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuGlobals {
    pub line_width: f32,
    pub elements_per_instance: u32,
    pub gradient_steps_count: u32,
    pub vectors_count: u32,
    pub filled_percent: f32,
}

/// A round marker drawn at the start or the moving tip of the stroke.
///
/// Laid out like a shader struct holding a `float2`, a `float4` and a `float`:
/// `color` starts at byte 16 and the record is padded to 48 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuMarker {
    pub center: [f32; 2],
    _pad0: [f32; 2],
    pub color: [f32; 4],
    pub radius: f32,
    _pad1: [f32; 3],
}

impl GpuMarker {
    pub fn new(center: Point2, color: Rgba, radius: f64) -> Self {
        Self {
            center: point_to_f32(center),
            _pad0: [0.0; 2],
            color: color.to_f32_array(),
            radius: radius as f32,
            _pad1: [0.0; 3],
        }
    }
}

/// Convert a record slice to raw bytes for buffer upload.
pub fn as_bytes<T: Pod>(records: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(records).to_vec()
}

/// Gradient stops as `[r, g, b, a]` rows.
pub fn colors_to_f32(colors: &[Rgba]) -> Vec<[f32; 4]> {
    colors.iter().map(|c| c.to_f32_array()).collect()
}
