//! Film: the output pixel surface and its PNG encoding.

use std::path::Path;

use thiserror::Error;

use crate::shader::Color;
use glint_math::Vec3;

/// Exponent for gamma encoding linear light (inverse of 2.2 display gamma).
pub const GAMMA_EXPONENT: f32 = 1.0 / 2.2;

/// Errors that can occur when persisting a film.
#[derive(Error, Debug)]
pub enum FilmError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("film buffer of {count} pixels does not fit {width}x{height}")]
    BufferMismatch {
        width: u32,
        height: u32,
        count: usize,
    },
}

/// A linear-light pixel buffer written to by the render loop.
pub struct Film {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Film {
    /// Create a film filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the film width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the film height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y); row 0 is the top of the image.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Raw pixel storage, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Overwrite a rectangular region from row-major `pixels`.
    ///
    /// Used by the bucket renderer to splat finished tiles.
    pub fn blit(&mut self, x: u32, y: u32, width: u32, height: u32, pixels: &[Color]) {
        for row in 0..height {
            for col in 0..width {
                let color = pixels[(row * width + col) as usize];
                self.set(x + col, y + row, color);
            }
        }
    }

    /// Quantize to 8-bit RGB, optionally gamma encoding each channel.
    pub fn to_rgb8(&self, gamma_correct: bool) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            let rgb = color_to_rgb8(*color, gamma_correct);
            bytes.extend_from_slice(&rgb);
        }
        bytes
    }

    /// Encode the film as PNG at `path`.
    pub fn save_png<P: AsRef<Path>>(&self, path: P, gamma_correct: bool) -> Result<(), FilmError> {
        let bytes = self.to_rgb8(gamma_correct);
        let buffer = image::RgbImage::from_raw(self.width, self.height, bytes).ok_or(
            FilmError::BufferMismatch {
                width: self.width,
                height: self.height,
                count: self.pixels.len(),
            },
        )?;
        buffer.save(path.as_ref())?;
        Ok(())
    }
}

/// Convert one linear color to 8-bit RGB.
pub fn color_to_rgb8(color: Color, gamma_correct: bool) -> [u8; 3] {
    let encoded = if gamma_correct {
        Vec3::new(
            color.x.max(0.0).powf(GAMMA_EXPONENT),
            color.y.max(0.0).powf(GAMMA_EXPONENT),
            color.z.max(0.0).powf(GAMMA_EXPONENT),
        )
    } else {
        color
    };
    let clamped = encoded.clamp(Vec3::ZERO, Vec3::ONE);
    [
        (clamped.x * 255.0) as u8,
        (clamped.y * 255.0) as u8,
        (clamped.z * 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_get_set() {
        let mut film = Film::new(4, 3);
        assert_eq!(film.get(2, 1), Color::ZERO);

        film.set(2, 1, Color::new(0.5, 0.25, 1.0));
        assert_eq!(film.get(2, 1), Color::new(0.5, 0.25, 1.0));
        assert_eq!(film.get(1, 2), Color::ZERO);
    }

    #[test]
    fn test_color_to_rgb8_linear() {
        assert_eq!(color_to_rgb8(Color::ZERO, false), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::ONE, false), [255, 255, 255]);
        assert_eq!(
            color_to_rgb8(Color::new(0.5, 0.0, 1.0), false),
            [127, 0, 255]
        );
    }

    #[test]
    fn test_color_to_rgb8_clamps_out_of_range() {
        assert_eq!(
            color_to_rgb8(Color::new(2.0, -1.0, 1.5), false),
            [255, 0, 255]
        );
    }

    #[test]
    fn test_color_to_rgb8_gamma_brightens_midtones() {
        // 0.25^(1/2.2) ~= 0.533
        let [r, _, _] = color_to_rgb8(Color::new(0.25, 0.25, 0.25), true);
        assert!((135..=137).contains(&r), "gamma encoded 0.25 gave {r}");
    }

    #[test]
    fn test_film_blit() {
        let mut film = Film::new(4, 4);
        let tile = vec![Color::ONE; 4];
        film.blit(1, 2, 2, 2, &tile);

        assert_eq!(film.get(1, 2), Color::ONE);
        assert_eq!(film.get(2, 3), Color::ONE);
        assert_eq!(film.get(0, 0), Color::ZERO);
        assert_eq!(film.get(3, 3), Color::ZERO);
    }

    #[test]
    fn test_film_to_rgb8_length() {
        let film = Film::new(5, 3);
        assert_eq!(film.to_rgb8(false).len(), 5 * 3 * 3);
    }
}
