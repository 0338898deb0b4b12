//! Curve paths and their construction protocol.
//!
//! A [`CurvePath`] is built once through [`CurvePath::move_to`],
//! [`CurvePath::add_curve`] and [`CurvePath::normalize_last_connection`], then
//! read every frame by the normalizer. Segment `i`'s `b` always equals segment
//! `i + 1`'s `a`: `add_curve` takes its start point from the path, never from
//! the caller.
//!
//! Smooth joins are not detected automatically. A caller who supplies a `p1`
//! that does not mirror the previous segment's `p2`, but wants the join to look
//! continuous, must call `normalize_last_connection` right after that
//! `add_curve`.

use reveal_core::traits::{BoundingBox, Validate};
use reveal_core::{RevealConfig, RevealError, Result, Tolerance};
use reveal_math::{Aabb2, Point2, Size2};
use serde::{Deserialize, Serialize};

use crate::curve::BezierSegment;

/// Construction state of a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathState {
    /// Nothing recorded yet.
    Empty,
    /// `move_to` was called, no segment exists.
    PendingStart(Point2),
    /// At least one segment, never empty.
    Built(Vec<BezierSegment>),
}

/// An ordered run of connected cubic bezier segments plus design-space metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    state: PathState,
    view_box: Size2,
    stroke_width: f64,
    scale: f64,
}

impl CurvePath {
    /// Create an empty path with display scale 1.
    ///
    /// # Arguments
    /// * `view_box` - Design-space bounding box the control points are authored in
    /// * `stroke_width` - Stroke width in design units
    pub fn new(view_box: Size2, stroke_width: f64) -> Self {
        Self::with_scale(view_box, stroke_width, 1.0)
    }

    pub fn with_scale(view_box: Size2, stroke_width: f64, scale: f64) -> Self {
        Self {
            state: PathState::Empty,
            view_box,
            stroke_width,
            scale,
        }
    }

    /// Create an empty path using the configured display scale.
    pub fn with_config(view_box: Size2, stroke_width: f64, config: &RevealConfig) -> Self {
        Self::with_scale(view_box, stroke_width, config.display_scale)
    }

    /// Create a path from an existing segment list. Continuity is not checked here,
    /// use [`Validate::validate`] for that.
    pub fn from_segments(
        segments: Vec<BezierSegment>,
        view_box: Size2,
        stroke_width: f64,
        scale: f64,
    ) -> Self {
        let state = if segments.is_empty() {
            PathState::Empty
        } else {
            PathState::Built(segments)
        };
        Self {
            state,
            view_box,
            stroke_width,
            scale,
        }
    }

    pub fn state(&self) -> &PathState {
        &self.state
    }

    pub fn segments(&self) -> &[BezierSegment] {
        match &self.state {
            PathState::Built(segments) => segments,
            PathState::Empty | PathState::PendingStart(_) => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.segments().len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }

    pub fn view_box(&self) -> Size2 {
        self.view_box
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the start point of the path.
    ///
    /// Before any segment exists this records (or replaces) the pending start
    /// point. Once segments exist the path cannot jump, so a bridge segment is
    /// appended from the current end to `point`, leaving the current end along
    /// its tangent and arriving at the midpoint of the jump.
    pub fn move_to(&mut self, point: Point2) -> &mut Self {
        match &mut self.state {
            PathState::Empty | PathState::PendingStart(_) => {
                self.state = PathState::PendingStart(point);
            }
            PathState::Built(segments) => match segments.last().copied() {
                Some(last) => {
                    tracing::debug!(from = ?last.b, to = ?point, "move_to on built path, bridging");
                    segments.push(BezierSegment::new(
                        last.b,
                        point,
                        last.mirrored_p2(),
                        (last.b + point) / 2.0,
                    ));
                }
                None => self.state = PathState::PendingStart(point),
            },
        }
        self
    }

    /// Append a cubic segment ending at `b`.
    ///
    /// The segment starts at the previous segment's end, or at the pending
    /// start point for the first segment. Without either the call is ignored.
    pub fn add_curve(&mut self, b: Point2, p1: Point2, p2: Point2) -> &mut Self {
        if let Err(err) = self.try_add_curve(b, p1, p2) {
            tracing::debug!(%err, "add_curve ignored");
        }
        self
    }

    /// Like [`CurvePath::add_curve`] but reports a call on an empty path as an error.
    pub fn try_add_curve(&mut self, b: Point2, p1: Point2, p2: Point2) -> Result<&mut Self> {
        match &mut self.state {
            PathState::Empty => {
                return Err(RevealError::invalid_operation(
                    "add_curve called before move_to",
                ));
            }
            PathState::PendingStart(a) => {
                let segment = BezierSegment::new(*a, b, p1, p2);
                self.state = PathState::Built(vec![segment]);
            }
            PathState::Built(segments) => {
                let a = segments.last().map(|last| last.b).ok_or_else(|| {
                    RevealError::invalid_operation("built path has no segments")
                })?;
                segments.push(BezierSegment::new(a, b, p1, p2));
            }
        }
        Ok(self)
    }

    /// Overwrite the last segment's `p1` with the previous segment's `p2`
    /// mirrored through their shared point, making the last join C1 smooth.
    ///
    /// Does nothing with fewer than three segments.
    pub fn normalize_last_connection(&mut self) -> &mut Self {
        if let PathState::Built(segments) = &mut self.state {
            let n = segments.len();
            if n > 2 {
                segments[n - 1].p1 = segments[n - 2].mirrored_p2();
            }
        }
        self
    }

    /// Check that consecutive segments share their join point within `tolerance`.
    pub fn is_connected(&self, tolerance: Tolerance) -> bool {
        self.segments().windows(2).all(|pair| {
            tolerance.linear_eq(pair[0].b.x, pair[1].a.x)
                && tolerance.linear_eq(pair[0].b.y, pair[1].a.y)
        })
    }
}

impl CurvePath {
    /// Check the metadata and that every join closes within `tolerance`.
    pub fn validate_with(&self, tolerance: Tolerance) -> Result<()> {
        if !self.view_box.is_positive() {
            return Err(RevealError::geometry(format!(
                "view box must be positive, got {}x{}",
                self.view_box.width, self.view_box.height
            )));
        }
        if !(self.stroke_width >= 0.0) {
            return Err(RevealError::geometry(format!(
                "stroke width must be non-negative, got {}",
                self.stroke_width
            )));
        }
        if !(self.scale > 0.0) {
            return Err(RevealError::geometry(format!(
                "display scale must be positive, got {}",
                self.scale
            )));
        }
        if !self.is_connected(tolerance) {
            return Err(RevealError::geometry("segments are not connected"));
        }
        Ok(())
    }
}

impl Validate for CurvePath {
    fn validate(&self) -> Result<()> {
        self.validate_with(Tolerance::default())
    }
}

impl BoundingBox for CurvePath {
    type Bounds = Aabb2;

    /// Bounds of all control points, which contain the curves themselves.
    fn bounding_box(&self) -> Option<Aabb2> {
        let points: Vec<Point2> = self
            .segments()
            .iter()
            .flat_map(|segment| segment.points())
            .collect();
        Aabb2::from_points(&points)
    }
}
