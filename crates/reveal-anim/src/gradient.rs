//! Color along the stroke as a function of progress.

use reveal_core::{RevealError, Result};
use reveal_math::Rgba;
use serde::{Deserialize, Serialize};

/// Ordered, non-empty list of gradient stops spread evenly over progress `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgba>", into = "Vec<Rgba>")]
pub struct GradientStops(Vec<Rgba>);

impl GradientStops {
    /// Fails with [`RevealError::Configuration`] when `stops` is empty.
    pub fn new(stops: Vec<Rgba>) -> Result<Self> {
        if stops.is_empty() {
            return Err(RevealError::configuration(
                "gradient needs at least one color stop",
            ));
        }
        Ok(Self(stops))
    }

    /// A gradient that is the same color everywhere.
    pub fn solid(color: Rgba) -> Self {
        Self(vec![color])
    }

    pub fn as_slice(&self) -> &[Rgba] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Rgba {
        self.0[0]
    }

    pub fn last(&self) -> Rgba {
        self.0[self.0.len() - 1]
    }

    /// Interpolated color at `progress`.
    ///
    /// Exactly the first stop at 0 and the last stop at 1. A single stop is a
    /// constant color. Progress outside `[0, 1]` extrapolates the outer pair.
    pub fn sample(&self, progress: f64) -> Rgba {
        let stops = &self.0;
        if stops.len() == 1 || progress == 1.0 {
            return self.last();
        }

        let ratio = progress * (stops.len() - 1) as f64;
        let bucket = ratio.floor().clamp(0.0, (stops.len() - 2) as f64) as usize;
        stops[bucket].lerp(stops[bucket + 1], ratio - bucket as f64)
    }
}

impl TryFrom<Vec<Rgba>> for GradientStops {
    type Error = RevealError;

    fn try_from(stops: Vec<Rgba>) -> Result<Self> {
        Self::new(stops)
    }
}

impl From<GradientStops> for Vec<Rgba> {
    fn from(stops: GradientStops) -> Self {
        stops.0
    }
}

/// Sample a raw stop list. Fails on an empty list instead of producing a color.
pub fn sample_color(progress: f64, stops: &[Rgba]) -> Result<Rgba> {
    let gradient = GradientStops::new(stops.to_vec())?;
    Ok(gradient.sample(progress))
}
