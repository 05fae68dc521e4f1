//! Sphere primitive for ray tracing.

use crate::shape::{Hit, Shape};
use glint_math::{Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Get the sphere's center.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Get the sphere's radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray, range: Interval) -> Option<Hit> {
        let oc = ray.origin() - self.center;
        let q = oc.dot(ray.direction());
        let disc = self.radius * self.radius - oc.length_squared() + q * q;
        if disc < 0.0 {
            return None;
        }

        let d = disc.sqrt();

        // Near root first; fall back to the far root when the near one is
        // behind the origin (origin inside the sphere or sphere behind).
        let mut t = -d - q;
        if t < 0.0 {
            t = d - q;
        }
        if !range.contains(t) {
            return None;
        }

        let point = ray.at(t);
        Some(Hit {
            t,
            point,
            // Unit length because of the division by radius
            normal: (point - self.center) / self.radius,
        })
    }
}
