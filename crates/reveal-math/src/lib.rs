pub mod aabb;
pub mod color;
pub mod size;
pub mod transform;

pub use glam::{dvec2, DVec2, DVec4};
pub use aabb::Aabb2;
pub use color::Rgba;
pub use size::Size2;
pub use transform::DeviceTransform;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
