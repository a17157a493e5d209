// Re-export glam for convenience
pub use glam::*;

// Cubo math types
mod aabb;
mod interval;
mod ray;
pub use aabb::{Aabb, AabbHit};
pub use interval::Interval;
pub use ray::Ray;
