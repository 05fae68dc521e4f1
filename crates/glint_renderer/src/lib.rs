//! Glint Renderer - CPU ray tracing
//!
//! A deterministic Whitted-style ray tracer: nearest-hit resolution over
//! spheres, triangles and infinite planes, shadow-tested point and
//! directional lighting, bounded-depth mirror reflection, and a gradient
//! sky for rays that escape the scene.

mod bucket;
mod camera;
mod film;
mod light;
mod plane;
mod renderer;
mod scene;
mod shader;
mod shape;
mod sky;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use film::{Film, FilmError, GAMMA_EXPONENT};
pub use light::{PointLight, Sun};
pub use plane::Plane;
pub use renderer::{render, render_parallel, render_pixel, RenderConfig};
pub use scene::{Scene, Surface, SurfaceId, Trace, SHADE_EPS};
pub use shader::{Color, Shader};
pub use shape::{Hit, Shape};
pub use sky::Sky;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
