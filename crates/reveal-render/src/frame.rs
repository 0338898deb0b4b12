//! Per-frame evaluation of a reveal animation.
//!
//! A [`FramePlanner`] is created once per animation with its configuration and
//! gradient. Every redraw calls [`FramePlanner::plan`] with the current progress
//! and gets back everything a renderer needs: device-space segments, the
//! normalized stroke width, how many subdivisions of each segment to draw, and
//! the markers.

use rayon::prelude::*;
use reveal_anim::{draw_counts, endpoint_position, GradientStops};
use reveal_core::traits::Validate;
use reveal_core::{RevealConfig, RevealError, Result};
use reveal_geometry::tessellate::sample_uniform;
use reveal_geometry::{normalize_with_inset, normalized_stroke_width, BezierSegment, CurvePath};
use reveal_math::{Point2, Rgba, Size2};

use crate::gpu::{self, GpuGlobals, GpuMarker, GpuSegment};
use crate::indices::{index_count, stroke_indices};

/// A round marker in device space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: Point2,
    pub color: Rgba,
    pub radius: f64,
}

impl Marker {
    pub fn to_gpu(&self) -> GpuMarker {
        GpuMarker::new(self.center, self.color, self.radius)
    }
}

/// Everything the renderer consumes for one frame.
#[derive(Debug, Clone)]
pub struct FramePlan {
    pub progress: f64,
    /// Device-space segments, four control points each.
    pub segments: Vec<BezierSegment>,
    /// Stroke width relative to the surface width.
    pub stroke_width: f64,
    pub subdivisions_per_segment: u32,
    /// Subdivisions to draw per segment, in segment order.
    pub draw_counts: Vec<u32>,
    /// Marker pinned on the path start, present when progress > 0.
    pub start_marker: Option<Marker>,
    /// Marker at the moving tip, present when progress > 0.
    pub end_marker: Option<Marker>,
    /// The gradient, re-exposed verbatim for per-vertex shading.
    pub colors: Vec<Rgba>,
}

impl FramePlan {
    /// Markers to draw, start first.
    pub fn markers(&self) -> Vec<Marker> {
        self.start_marker.iter().chain(self.end_marker.iter()).copied().collect()
    }

    /// Index counts per segment for an indexed draw with [`stroke_indices`].
    pub fn index_counts(&self) -> Vec<u32> {
        self.draw_counts.iter().map(|&count| index_count(count)).collect()
    }

    pub fn total_drawn(&self) -> u32 {
        self.draw_counts.iter().sum()
    }

    pub fn gpu_segments(&self) -> Vec<GpuSegment> {
        self.segments.iter().map(GpuSegment::from_segment).collect()
    }

    pub fn gpu_markers(&self) -> Vec<GpuMarker> {
        self.markers().iter().map(Marker::to_gpu).collect()
    }

    pub fn globals(&self) -> GpuGlobals {
        GpuGlobals {
            line_width: self.stroke_width as f32,
            elements_per_instance: self.subdivisions_per_segment,
            gradient_steps_count: self.colors.len() as u32,
            vectors_count: self.segments.len() as u32,
            filled_percent: self.progress as f32,
        }
    }

    pub fn segment_bytes(&self) -> Vec<u8> {
        gpu::as_bytes(&self.gpu_segments())
    }

    pub fn color_bytes(&self) -> Vec<u8> {
        gpu::as_bytes(&gpu::colors_to_f32(&self.colors))
    }

    /// Device-space polyline of the part of the path drawn this frame.
    ///
    /// Samples each segment the way the stroke renderer subdivides it and keeps
    /// the first `count + 1` points of every drawn segment.
    pub fn visible_polyline(&self) -> Vec<Point2> {
        let mut points = Vec::new();
        for (segment, &count) in self.segments.iter().zip(&self.draw_counts) {
            if count == 0 {
                break;
            }
            let samples = sample_uniform(segment, self.subdivisions_per_segment as usize);
            let skip = usize::from(!points.is_empty());
            points.extend(samples.into_iter().take(count as usize + 1).skip(skip));
        }
        points
    }
}

/// Stateless per-frame evaluator bound to a configuration and gradient.
#[derive(Debug, Clone)]
pub struct FramePlanner {
    config: RevealConfig,
    stops: GradientStops,
    indices: Vec<u16>,
}

impl FramePlanner {
    pub fn new(config: RevealConfig, stops: GradientStops) -> Result<Self> {
        config.validate()?;
        let indices = stroke_indices(config.subdivisions_per_segment)?;
        Ok(Self {
            config,
            stops,
            indices,
        })
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn stops(&self) -> &GradientStops {
        &self.stops
    }

    /// Index buffer for one segment, uploaded once and reused for every instance.
    pub fn index_buffer(&self) -> &[u16] {
        &self.indices
    }

    /// Evaluate one frame of `path` on a surface of size `surface`.
    ///
    /// Fails when the surface is not positive, the path has no segments, or the
    /// path does not validate under the configured tolerance. Progress within
    /// that tolerance of 0 or 1 is snapped onto the bound.
    #[tracing::instrument(skip(self, path), fields(segments = path.len()))]
    pub fn plan(&self, path: &CurvePath, surface: Size2, progress: f64) -> Result<FramePlan> {
        if !surface.is_positive() {
            return Err(RevealError::configuration(format!(
                "surface must be positive, got {}x{}",
                surface.width, surface.height
            )));
        }
        if path.is_empty() {
            return Err(RevealError::geometry("cannot plan a frame for a path without segments"));
        }
        let tolerance = self.config.tolerance;
        path.validate_with(tolerance)?;
        let progress = tolerance.snap_progress(progress);

        let segments = normalize_with_inset(path, surface, self.config.device_inset);
        let stroke_width = normalized_stroke_width(path, surface);
        let subdivisions = self.config.subdivisions_per_segment;
        let counts = draw_counts(segments.len(), progress, subdivisions);

        let (start_marker, end_marker) = if progress > 0.0 {
            let radius = stroke_width * self.config.marker_radius_factor;
            let start = Marker {
                center: segments[0].a,
                color: self.stops.first(),
                radius,
            };
            let end = endpoint_position(progress, &segments).map(|center| Marker {
                center,
                color: self.stops.sample(progress),
                radius,
            });
            (Some(start), end)
        } else {
            (None, None)
        };

        let plan = FramePlan {
            progress,
            segments,
            stroke_width,
            subdivisions_per_segment: subdivisions,
            draw_counts: counts,
            start_marker,
            end_marker,
            colors: self.stops.as_slice().to_vec(),
        };
        tracing::trace!(drawn = plan.total_drawn(), markers = plan.markers().len(), "frame planned");
        Ok(plan)
    }

    /// Evaluate several independent frames in parallel.
    ///
    /// Each job is a path and its progress; results keep the job order.
    #[tracing::instrument(skip(self, jobs), fields(jobs = jobs.len()))]
    pub fn plan_frames(&self, jobs: &[(&CurvePath, f64)], surface: Size2) -> Result<Vec<FramePlan>> {
        jobs.par_iter()
            .map(|&(path, progress)| self.plan(path, surface, progress))
            .collect()
    }
}
