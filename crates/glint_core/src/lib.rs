//! Glint Core - scene descriptions for the Glint renderer.
//!
//! This crate provides:
//!
//! - **Description types**: `SceneDesc`, `SurfaceDesc`, `ShapeDesc`,
//!   `LightDesc`, `SunDesc`, `SkyDesc`, `ViewDesc`
//! - **JSON loading**: `load_scene` / `parse_scene`
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let desc = load_scene("scene.json")?;
//! println!("Loaded {} surfaces, {} views",
//!     desc.surfaces.len(),
//!     desc.views.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, parse_scene, LoadError, LoadResult};
pub use scene::{
    CameraDesc, LightDesc, SceneDesc, ShaderDesc, ShapeDesc, SkyDesc, SunDesc, SurfaceDesc,
    ViewDesc,
};
