//! Shape trait and Hit record for ray-surface intersection.

use glint_math::{Interval, Ray, Vec3};

/// Geometric record of a ray-shape intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection (unit length, fixed outward)
    pub normal: Vec3,
}

/// Trait for shapes that rays can intersect.
pub trait Shape: Send + Sync {
    /// Test the ray against this shape.
    ///
    /// Returns the hit with the smallest accepted t, or `None` when no
    /// hit falls inside `range` (half-open: `range.min <= t < range.max`).
    /// Pure: no side effects, no dependence on anything but the inputs.
    fn intersect(&self, ray: &Ray, range: Interval) -> Option<Hit>;
}
