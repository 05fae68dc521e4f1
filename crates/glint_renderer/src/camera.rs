//! Camera for ray generation.

use glint_math::{Ray, Vec3};

/// Camera mapping normalized image-plane coordinates to world-space rays.
///
/// The view is a position plus a direction; `initialize()` derives the
/// image-plane basis and must be called before `cast_ray`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    direction: Vec3,

    // Lens settings
    fov: f32,        // Vertical field of view in degrees
    z_near: f32,     // Ray origins start this far along the ray
    aspect: f32,     // Width over height
    focus_dist: f32, // Distance to the image plane

    // Cached basis (set by initialize())
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a camera at `position` looking along `direction`.
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
            fov: 90.0,
            z_near: 0.1,
            aspect: 1.0,
            focus_dist: 1.0,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set the near offset applied to ray origins.
    pub fn with_z_near(mut self, z_near: f32) -> Self {
        self.z_near = z_near;
        self
    }

    /// Set the aspect ratio (width / height).
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Set the image plane distance.
    pub fn with_focus_dist(mut self, focus_dist: f32) -> Self {
        self.focus_dist = focus_dist;
        self
    }

    /// Initialize the camera basis (must be called before casting rays).
    pub fn initialize(&mut self) {
        let size = self.focus_dist * (self.fov.to_radians() / 2.0).tan();
        self.direction = self.direction.normalize();

        let mut right = self.direction.cross(Vec3::Y);
        if right.length_squared() < 1e-8 {
            // Looking straight up or down; any horizontal axis works
            right = Vec3::Z;
        }
        self.up = right.cross(self.direction).normalize() * size;
        self.right = right.normalize() * (self.aspect * size);
    }

    /// Get the camera position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Get the (normalized after initialize) view direction.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Cast a ray through normalized image coordinates.
    ///
    /// `xx` runs right and `yy` up, both roughly in [-0.5, 0.5]; the ray
    /// direction is unit length and the origin sits `z_near` along it.
    pub fn cast_ray(&self, xx: f32, yy: f32) -> Ray {
        let dir = (self.direction + self.right * xx + self.up * yy).normalize();
        Ray::new(self.position + dir * self.z_near, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_center_ray_matches_view() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)).with_z_near(1.0);
        camera.initialize();

        let ray = camera.cast_ray(0.0, 0.0);
        assert!((ray.direction() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);

        // Origin offset z_near along the view ray
        assert!((ray.origin() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_camera_ray_directions_unit_length() {
        let mut camera = Camera::new(Vec3::new(-2.0, 0.8, 2.0), Vec3::new(0.3, -0.1, -1.0));
        camera.initialize();

        for &(xx, yy) in &[(0.0, 0.0), (-0.5, -0.5), (0.5, 0.25)] {
            let ray = camera.cast_ray(xx, yy);
            assert!((ray.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_camera_image_plane_orientation() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        camera.initialize();

        // Positive yy tilts the ray up, positive xx tilts it right
        assert!(camera.cast_ray(0.0, 0.5).direction().y > 0.0);
        assert!(camera.cast_ray(0.5, 0.0).direction().x > 0.0);
    }

    #[test]
    fn test_camera_straight_down_has_valid_basis() {
        let mut camera = Camera::new(Vec3::new(1.0, 4.0, -5.0), Vec3::new(0.0, -1.0, 0.0));
        camera.initialize();

        let ray = camera.cast_ray(0.25, 0.25);
        assert!((ray.direction().length() - 1.0).abs() < 1e-5);
        assert!(ray.direction().y < 0.0);
    }
}
