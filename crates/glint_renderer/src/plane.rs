//! Infinite plane primitive for ray tracing.

use crate::shape::{Hit, Shape};
use glint_math::{Interval, Ray, Vec3};

/// An infinite one-sided plane.
///
/// Defined by a unit normal and a signed distance from the origin; the
/// plane contains every point p with `normal . p = -dist`. Only rays whose
/// direction opposes the normal can hit (back-face culled).
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: Vec3,
    dist: f32,
}

impl Plane {
    /// Create a new plane; the normal is normalized here.
    pub fn new(normal: Vec3, dist: f32) -> Self {
        Self {
            normal: normal.normalize(),
            dist,
        }
    }

    /// Get the plane's unit normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Get the plane's signed distance from the origin.
    pub fn dist(&self) -> f32 {
        self.dist
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray, range: Interval) -> Option<Hit> {
        let d = self.normal.dot(ray.direction());
        // One-sided: rays along or toward the normal never hit
        if d >= 0.0 {
            return None;
        }

        // TODO: apply range.min here the way Sphere does; today only the
        // upper bound is enforced for planes.
        let t = (self.dist + self.normal.dot(ray.origin())) / -d;
        if t >= range.max {
            return None;
        }

        Some(Hit {
            t,
            point: ray.at(t),
            normal: self.normal,
        })
    }
}
