//! Light sources: point lights and the directional sun.

use crate::shader::Color;
use glint_math::Vec3;

/// A point light with inverse-square falloff.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    pub color: Color,
}

impl PointLight {
    /// Create a white point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
            color: Color::ONE,
        }
    }

    /// Set the light color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A directional sun light.
///
/// `direction` points from the source toward the scene (light travels
/// along it) and is normalized on construction. The ambient term is added
/// to every shaded surface without occlusion testing.
#[derive(Debug, Clone, Copy)]
pub struct Sun {
    pub direction: Vec3,
    pub intensity: f32,
    pub color: Color,
    pub ambient: f32,
}

impl Sun {
    /// Create a sun with the default warm white color.
    pub fn new(direction: Vec3) -> Self {
        Self {
            direction: direction.normalize(),
            intensity: 0.8,
            color: Color::new(1.0, 0.99, 0.95),
            ambient: 0.1,
        }
    }

    /// Set the intensity.
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set the light color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the ambient term.
    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient;
        self
    }
}
