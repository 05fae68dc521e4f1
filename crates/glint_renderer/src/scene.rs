//! Scene: surface and light collections, ray queries, recursive shading.

use glint_math::{Interval, Ray, Vec3};

use crate::light::{PointLight, Sun};
use crate::shader::{Color, Shader};
use crate::shape::Shape;
use crate::sky::Sky;

/// Diffuse/specular gate: grazing contributions below this are dropped.
pub const SHADE_EPS: f32 = 1e-2;

/// Index of a surface within its scene; stable because surfaces are
/// append-only.
pub type SurfaceId = usize;

/// A renderable scene entry: a shape with its base color and shader.
pub struct Surface {
    pub shape: Box<dyn Shape>,
    pub color: Color,
    pub shader: Shader,
}

impl Surface {
    /// Create a surface with the default shader.
    pub fn new(shape: impl Shape + 'static, color: Color) -> Self {
        Self {
            shape: Box::new(shape),
            color,
            shader: Shader::default(),
        }
    }

    /// Set the surface's shader.
    pub fn with_shader(mut self, shader: Shader) -> Self {
        self.shader = shader;
        self
    }
}

/// Result of tracing a ray into the scene.
///
/// On a miss `surface` is `None` and only `dir` is meaningful (the sky is
/// sampled with it). The surface back-reference is an index so it stays
/// valid if the surface vector reallocates.
#[derive(Debug, Clone, Copy)]
pub struct Trace {
    pub surface: Option<SurfaceId>,
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
    /// Direction of the ray that produced this trace
    pub dir: Vec3,
}

impl Trace {
    /// A trace that hit nothing, keeping the ray direction for sky lookup.
    pub fn miss(dir: Vec3) -> Self {
        Self {
            surface: None,
            t: f32::INFINITY,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            dir,
        }
    }

    /// Whether the trace hit a surface.
    pub fn is_hit(&self) -> bool {
        self.surface.is_some()
    }
}

/// A scene of surfaces and lights.
///
/// Surfaces and point lights are append-only and iterated in insertion
/// order by every query; at most one sun and one sky exist (setting a new
/// one replaces the old). Read-only during rendering.
#[derive(Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
    lights: Vec<PointLight>,
    sun: Option<Sun>,
    sky: Option<Sky>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface and return its id.
    pub fn add_surface(&mut self, surface: Surface) -> SurfaceId {
        self.surfaces.push(surface);
        self.surfaces.len() - 1
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Set the sun, replacing any previous one.
    pub fn set_sun(&mut self, sun: Sun) {
        self.sun = Some(sun);
    }

    /// Set the sky, replacing any previous one.
    pub fn set_sky(&mut self, sky: Sky) {
        self.sky = Some(sky);
    }

    /// Get the scene's surfaces.
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Get the number of surfaces.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Get the number of point lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Find the nearest surface hit by the ray.
    ///
    /// Scans surfaces in insertion order, skipping `ignore` (used by
    /// secondary rays to avoid re-hitting the surface they leave). Each
    /// accepted hit shrinks the upper bound handed to the remaining
    /// shapes, so later surfaces only win with a strictly smaller t.
    pub fn ray_trace(&self, ray: &Ray, ignore: Option<SurfaceId>) -> Trace {
        let mut trace = Trace::miss(ray.direction());
        let mut nearest = f32::INFINITY;

        for (id, surface) in self.surfaces.iter().enumerate() {
            if Some(id) == ignore {
                continue;
            }
            if let Some(hit) = surface.shape.intersect(ray, Interval::new(0.0, nearest)) {
                nearest = hit.t;
                trace = Trace {
                    surface: Some(id),
                    t: hit.t,
                    point: hit.point,
                    normal: hit.normal,
                    dir: ray.direction(),
                };
            }
        }

        trace
    }

    /// Occlusion query: true when nothing blocks the ray within `z_max`.
    ///
    /// Short-circuits on the first blocking surface. Used for shadow
    /// testing toward a light.
    pub fn unoccluded(&self, ray: &Ray, ignore: Option<SurfaceId>, z_max: f32) -> bool {
        for (id, surface) in self.surfaces.iter().enumerate() {
            if Some(id) == ignore {
                continue;
            }
            if surface
                .shape
                .intersect(ray, Interval::new(0.0, z_max))
                .is_some()
            {
                return false;
            }
        }
        true
    }

    /// Shade a trace, recursing on reflection while `bounce_max` lasts.
    ///
    /// A miss resolves to the sky (black without one). A hit accumulates
    /// ambient, diffuse and specular terms from the lights, each gated by
    /// `SHADE_EPS` and a shadow query, and blends in the reflected color
    /// by the surface's reflectivity. A pure mirror (reflectivity 1)
    /// short-circuits to the reflected color alone. Always terminates:
    /// the bounce budget strictly decreases and is never replenished.
    pub fn shade(&self, trace: &Trace, bounce_max: u32) -> Color {
        let Some(id) = trace.surface else {
            return match &self.sky {
                Some(sky) => sky.color(trace.dir),
                None => Color::ZERO,
            };
        };

        let surface = &self.surfaces[id];
        let reflectivity = surface.shader.reflectivity;

        let mut reflect_rgb = Color::ZERO;
        if reflectivity > 0.0 && bounce_max > 0 {
            let bounce_ray = Ray::new(trace.point, reflect(trace.dir, trace.normal));
            let bounce_trace = self.ray_trace(&bounce_ray, Some(id));
            reflect_rgb = self.shade(&bounce_trace, bounce_max - 1) * reflectivity;
            if reflectivity == 1.0 {
                return reflect_rgb;
            }
        }

        let mut ambient_rgb = Color::ZERO;
        let mut diffuse_rgb = Color::ZERO;
        let mut specular_rgb = Color::ZERO;

        for light in &self.lights {
            let to_light = light.position - trace.point;
            let light_dist = to_light.length();
            let light_dir = to_light / light_dist;

            let diffuse_frac = light_dir.dot(trace.normal);
            if diffuse_frac > SHADE_EPS
                && self.unoccluded(&Ray::new(trace.point, light_dir), Some(id), light_dist)
            {
                let diffuse_amt = light.intensity * diffuse_frac / (light_dist * light_dist);
                diffuse_rgb += light.color * diffuse_amt;

                let spec_frac = light_dir.dot(reflect(trace.dir, trace.normal));
                if spec_frac > SHADE_EPS {
                    specular_rgb +=
                        light.color * (light.intensity * spec_frac.powi(surface.shader.specular_exp));
                }
            }
        }

        if let Some(sun) = &self.sun {
            // Ambient fill is never shadow-tested
            ambient_rgb += sun.color * sun.ambient;

            let light_dir = -sun.direction;
            let diffuse_frac = light_dir.dot(trace.normal);
            if diffuse_frac > SHADE_EPS
                && self.unoccluded(&Ray::new(trace.point, light_dir), Some(id), f32::INFINITY)
            {
                diffuse_rgb += sun.color * (sun.intensity * diffuse_frac);

                let spec_frac = light_dir.dot(reflect(trace.dir, trace.normal));
                if spec_frac > SHADE_EPS {
                    specular_rgb +=
                        sun.color * (sun.intensity * spec_frac.powi(surface.shader.specular_exp));
                }
            }
        }

        let mut rgb = ambient_rgb + diffuse_rgb * surface.color;
        rgb = rgb * (1.0 - reflectivity) + reflect_rgb * reflectivity;
        // Highlights keep the light color: not tinted by the base color
        // and not dimmed by the reflectivity blend
        rgb += specular_rgb * surface.shader.specular;
        saturate(rgb)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Clamp each channel to [0, 1].
#[inline]
fn saturate(c: Color) -> Color {
    c.clamp(Color::ZERO, Color::ONE)
}
