//! Render loops: per-pixel tracing over a film, sequential and parallel.

use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::shader::Color;
use crate::{Camera, Film, Scene, Trace};
use glint_math::Vec3;

/// Render configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Maximum reflection bounces per primary ray
    pub bounce_max: u32,
    /// Render hit depth instead of shaded color (debug aid)
    pub depth_map: bool,
    /// Far distance where the depth map fades to black
    pub z_far: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bounce_max: 1,
            depth_map: false,
            z_far: 10.0,
        }
    }
}

/// Compute the color for one film pixel.
///
/// Maps the pixel center to normalized image coordinates (row 0 at the
/// top, `yy` up), casts the camera ray and shades the nearest hit.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    image_width: u32,
    image_height: u32,
    config: &RenderConfig,
) -> Color {
    let xx = (x as f32 + 0.5 - image_width as f32 / 2.0) / image_width as f32;
    let yy = -(y as f32 + 0.5 - image_height as f32 / 2.0) / image_height as f32;

    let ray = camera.cast_ray(xx, yy);
    let trace = scene.ray_trace(&ray, None);

    if config.depth_map {
        return depth_color(&trace, config.z_far);
    }

    scene.shade(&trace, config.bounce_max)
}

/// Grayscale depth value: white at the camera fading to black at z_far.
fn depth_color(trace: &Trace, z_far: f32) -> Color {
    if !trace.is_hit() {
        return Color::ZERO;
    }
    Vec3::ONE * (1.0 - (trace.t / z_far).min(1.0))
}

/// Render the scene to the film, one pixel at a time.
pub fn render(scene: &Scene, camera: &Camera, film: &mut Film, config: &RenderConfig) {
    for y in 0..film.height() {
        for x in 0..film.width() {
            let color = render_pixel(scene, camera, x, y, film.width(), film.height(), config);
            film.set(x, y, color);
        }
    }
}

/// Render the scene to the film with buckets distributed across rayon
/// workers.
///
/// Pixels are independent, so tiles render in any order with no shared
/// mutable state; results are blitted back on the calling thread.
pub fn render_parallel(scene: &Scene, camera: &Camera, film: &mut Film, config: &RenderConfig) {
    let width = film.width();
    let height = film.height();
    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);
    log::debug!(
        "rendering {}x{} in {} buckets of {}px",
        width,
        height,
        buckets.len(),
        DEFAULT_BUCKET_SIZE
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, scene, camera, width, height, config);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    for result in results {
        let b = result.bucket;
        film.blit(b.x, b.y, b.width, b.height, &result.pixels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PointLight, Sky, Sphere, Surface};

    fn demo_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_surface(Surface::new(
            Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0),
            Color::new(1.0, 1.0, 1.0),
        ));
        scene.add_light(PointLight::new(Vec3::new(0.0, 3.0, -5.0), 20.0));
        scene
    }

    fn demo_camera() -> Camera {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)).with_z_near(0.1);
        camera.initialize();
        camera
    }

    #[test]
    fn test_render_pixel_hits_sphere() {
        // A pixel just above center sees the sphere's lit upper face
        let scene = demo_scene();
        let camera = demo_camera();
        let config = RenderConfig::default();

        let color = render_pixel(&scene, &camera, 32, 24, 64, 64, &config);
        assert!(color.length() > 0.0, "expected a lit sphere pixel");
    }

    #[test]
    fn test_render_pixel_miss_is_black_without_sky() {
        let scene = demo_scene();
        let camera = demo_camera();
        let config = RenderConfig::default();

        // Top-left corner ray misses everything
        let color = render_pixel(&scene, &camera, 0, 0, 64, 64, &config);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_render_pixel_miss_samples_sky() {
        let mut scene = demo_scene();
        scene.set_sky(Sky::new(Color::ONE, Color::ONE, Color::ONE));
        let camera = demo_camera();
        let config = RenderConfig::default();

        let color = render_pixel(&scene, &camera, 0, 0, 64, 64, &config);
        assert_eq!(color, Color::ONE);
    }

    #[test]
    fn test_depth_map_mode() {
        let scene = demo_scene();
        let camera = demo_camera();
        let config = RenderConfig {
            depth_map: true,
            ..Default::default()
        };

        // Center pixel hits at t ~= 3.9 (near plane offsets the origin),
        // well inside z_far = 10
        let center = render_pixel(&scene, &camera, 32, 32, 64, 64, &config);
        assert!(center.x > 0.0 && center.x < 1.0);

        // Miss stays black
        let corner = render_pixel(&scene, &camera, 0, 0, 64, 64, &config);
        assert_eq!(corner, Color::ZERO);
    }

    #[test]
    fn test_render_fills_film() {
        let mut scene = demo_scene();
        scene.set_sky(Sky::new(Color::ONE, Color::ONE, Color::ONE));
        let camera = demo_camera();
        let mut film = Film::new(16, 16);

        render(&scene, &camera, &mut film, &RenderConfig::default());

        // Sky-lit background means no pixel is left at the initial black
        let lit = film.pixels().iter().filter(|c| c.length() > 0.0).count();
        assert!(lit > 200, "only {lit} of 256 pixels were written");
    }

    #[test]
    fn test_render_parallel_matches_sequential() {
        let mut scene = demo_scene();
        scene.set_sky(Sky::new(
            Color::new(0.35, 0.55, 0.7),
            Color::new(0.97, 0.95, 0.95),
            Color::new(0.0, 0.0, 0.15),
        ));
        let camera = demo_camera();
        let config = RenderConfig::default();

        let mut sequential = Film::new(96, 80);
        render(&scene, &camera, &mut sequential, &config);

        let mut parallel = Film::new(96, 80);
        render_parallel(&scene, &camera, &mut parallel, &config);

        for (a, b) in sequential.pixels().iter().zip(parallel.pixels()) {
            assert_eq!(a, b);
        }
    }
}
