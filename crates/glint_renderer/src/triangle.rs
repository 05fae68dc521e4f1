//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::shape::{Hit, Shape};
use glint_math::{Interval, Ray, Vec3};

/// Determinant threshold below which the ray counts as parallel.
const DET_EPS: f32 = 1e-8;

/// A triangle primitive.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// Vertices
    a: Vec3,
    b: Vec3,
    c: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The face normal follows the winding `(b - a) x (c - a)` and is not
    /// flipped toward incoming rays; both faces report the same normal.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Self { a, b, c, normal }
    }

    /// Get the triangle's face normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Shape for Triangle {
    /// Möller-Trumbore ray-triangle intersection.
    fn intersect(&self, ray: &Ray, range: Interval) -> Option<Hit> {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;

        let pvec = ray.direction().cross(edge2);
        let det = edge1.dot(pvec);

        // Ray is parallel to the triangle plane
        if det.abs() < DET_EPS {
            return None;
        }

        let det_inv = 1.0 / det;
        let tvec = ray.origin() - self.a;
        let u = tvec.dot(pvec) * det_inv;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = ray.direction().dot(qvec) * det_inv;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * det_inv;
        if !range.contains(t) {
            return None;
        }

        Some(Hit {
            t,
            point: ray.at(t),
            normal: self.normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        // Triangle straddling the z = -1 plane
        Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = tri
            .intersect(&ray, Interval::FORWARD)
            .expect("ray at triangle center should hit");
        assert!((hit.t - 1.0).abs() < 1e-5);
        assert!((hit.normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangle_miss_outside_edges() {
        let tri = unit_triangle();

        // Passes the plane but outside the barycentric bounds
        let ray = Ray::new(Vec3::new(2.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(tri.intersect(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_triangle_miss_parallel() {
        let tri = unit_triangle();

        // Ray running inside the z = 0 plane never reaches the triangle
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert!(tri.intersect(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_triangle_behind_origin_rejected() {
        let tri = unit_triangle();

        // Triangle is at z = -1; looking the other way puts it at t = -1
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(tri.intersect(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_triangle_range_rejection() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(tri.intersect(&ray, Interval::new(0.0, 1.0)).is_none());
        assert!(tri.intersect(&ray, Interval::new(0.0, 1.5)).is_some());
    }
}
