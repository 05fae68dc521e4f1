//! Scene description types.
//!
//! This module defines the on-disk scene representation. It stays
//! renderer-agnostic: vectors are plain `[f32; 3]` triples and every
//! field maps one-to-one onto a renderer builder call.

use serde::{Deserialize, Serialize};

/// A complete scene description: geometry, lights, environment and the
/// views to render.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneDesc {
    /// Scene name (usually from filename)
    #[serde(default)]
    pub name: String,

    /// Surfaces in draw-independent insertion order
    #[serde(default)]
    pub surfaces: Vec<SurfaceDesc>,

    /// Point lights
    #[serde(default)]
    pub lights: Vec<LightDesc>,

    /// Directional sun, at most one
    #[serde(default)]
    pub sun: Option<SunDesc>,

    /// Gradient sky, at most one
    #[serde(default)]
    pub sky: Option<SkyDesc>,

    /// Views rendered by the driver, one output image each
    #[serde(default)]
    pub views: Vec<ViewDesc>,
}

/// A shape plus its base color and shader overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SurfaceDesc {
    pub shape: ShapeDesc,

    /// Base color in linear RGB
    #[serde(default = "default_surface_color")]
    pub color: [f32; 3],

    #[serde(default)]
    pub shader: ShaderDesc,
}

fn default_surface_color() -> [f32; 3] {
    [1.0, 0.0, 0.0]
}

/// Geometric shape variants.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDesc {
    Sphere {
        center: [f32; 3],
        radius: f32,
    },
    Triangle {
        a: [f32; 3],
        b: [f32; 3],
        c: [f32; 3],
    },
    Plane {
        normal: [f32; 3],
        distance: f32,
    },
}

/// Shader weights; every field falls back to the renderer defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderDesc {
    pub diffuse: f32,
    pub diffuse_exp: f32,
    pub specular: f32,
    pub specular_exp: i32,
    pub reflectivity: f32,
}

impl Default for ShaderDesc {
    fn default() -> Self {
        Self {
            diffuse: 0.18,
            diffuse_exp: 4.0,
            specular: 0.05,
            specular_exp: 24,
            reflectivity: 0.0,
        }
    }
}

/// A point light.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightDesc {
    pub position: [f32; 3],

    #[serde(default = "default_light_intensity")]
    pub intensity: f32,

    #[serde(default = "default_white")]
    pub color: [f32; 3],
}

fn default_light_intensity() -> f32 {
    100.0
}

fn default_white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// The directional sun.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SunDesc {
    /// Travel direction of the light (normalized by the renderer)
    pub direction: [f32; 3],

    #[serde(default = "default_sun_intensity")]
    pub intensity: f32,

    #[serde(default = "default_sun_color")]
    pub color: [f32; 3],

    #[serde(default = "default_sun_ambient")]
    pub ambient: f32,
}

fn default_sun_intensity() -> f32 {
    0.8
}

fn default_sun_color() -> [f32; 3] {
    [1.0, 0.99, 0.95]
}

fn default_sun_ambient() -> f32 {
    0.1
}

/// The gradient sky.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkyDesc {
    pub top: [f32; 3],
    pub mid: [f32; 3],
    pub bottom: [f32; 3],
}

/// Camera parameters for one view.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraDesc {
    pub position: [f32; 3],
    pub direction: [f32; 3],

    #[serde(default = "default_fov")]
    pub fov: f32,

    #[serde(default = "default_z_near")]
    pub z_near: f32,

    #[serde(default = "default_aspect")]
    pub aspect: f32,

    #[serde(default = "default_focus_dist")]
    pub focus_dist: f32,
}

fn default_fov() -> f32 {
    90.0
}

fn default_z_near() -> f32 {
    0.1
}

fn default_aspect() -> f32 {
    1.0
}

fn default_focus_dist() -> f32 {
    1.0
}

/// One rendered output: a named camera/film pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewDesc {
    /// Output files are written as `<name>.png`
    pub name: String,

    pub camera: CameraDesc,

    #[serde(default = "default_view_size")]
    pub width: u32,

    #[serde(default = "default_view_size")]
    pub height: u32,

    /// Gamma encode the output instead of writing linear values
    #[serde(default)]
    pub gamma_correct: bool,
}

fn default_view_size() -> u32 {
    512
}

impl SceneDesc {
    /// Create an empty scene description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get the surface count.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Get the view count.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }
}
