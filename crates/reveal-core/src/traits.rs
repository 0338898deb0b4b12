use crate::error::Result;

/// Validate that a value is usable before it enters the per-frame pipeline.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Bounds;
    fn bounding_box(&self) -> Option<Self::Bounds>;
}
