//! Gradient sky environment.

use crate::shader::Color;
use glint_math::Vec3;

/// A three-band vertical gradient sampled by ray direction.
///
/// Rays pointing up blend mid to top with the vertical component; rays
/// pointing down blend mid to bottom.
#[derive(Debug, Clone, Copy)]
pub struct Sky {
    top: Color,
    mid: Color,
    bottom: Color,
}

impl Sky {
    /// Create a sky from its top, mid and bottom band colors.
    pub fn new(top: Color, mid: Color, bottom: Color) -> Self {
        Self { top, mid, bottom }
    }

    /// Sample the gradient for a ray direction.
    pub fn color(&self, dir: Vec3) -> Color {
        let cos = dir.dot(Vec3::Y);
        if cos >= 0.0 {
            self.top * cos + self.mid * (1.0 - cos)
        } else {
            self.bottom * -cos + self.mid * (1.0 + cos)
        }
    }
}
