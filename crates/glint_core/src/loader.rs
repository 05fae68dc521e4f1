//! Scene description loading.
//!
//! Scenes are stored as JSON documents that deserialize straight into
//! [`SceneDesc`]; see `demos/` in the repository root for examples.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDesc;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scene defines no views to render")]
    NoViews,
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDesc> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mut desc = parse_scene(&text)?;

    if desc.name.is_empty() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            desc.name = stem.to_string();
        }
    }

    log::info!(
        "loaded scene '{}': {} surfaces, {} lights, {} views",
        desc.name,
        desc.surfaces.len(),
        desc.lights.len(),
        desc.views.len()
    );
    Ok(desc)
}

/// Parse a scene description from a JSON string.
pub fn parse_scene(text: &str) -> LoadResult<SceneDesc> {
    let desc: SceneDesc = serde_json::from_str(text)?;
    if desc.views.is_empty() {
        return Err(LoadError::NoViews);
    }
    Ok(desc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ShapeDesc;

    const MINIMAL: &str = r#"{
        "surfaces": [
            { "shape": { "type": "sphere", "center": [0, 0, -5], "radius": 1.0 },
              "color": [0.3, 0.5, 1.0],
              "shader": { "reflectivity": 1.0 } },
            { "shape": { "type": "plane", "normal": [0, 1, 0], "distance": 2.0 },
              "color": [0.7, 0.8, 0.1] }
        ],
        "lights": [
            { "position": [3, 3, -5], "intensity": 20 }
        ],
        "sky": { "top": [0.35, 0.55, 0.7], "mid": [0.97, 0.95, 0.95], "bottom": [0, 0, 0.15] },
        "views": [
            { "name": "render",
              "camera": { "position": [-2, 0.8, 2], "direction": [0.3, -0.1, -1], "z_near": 1.0 } }
        ]
    }"#;

    #[test]
    fn test_parse_scene_minimal() {
        let desc = parse_scene(MINIMAL).expect("valid scene should parse");

        assert_eq!(desc.surface_count(), 2);
        assert_eq!(desc.lights.len(), 1);
        assert!(desc.sun.is_none());
        assert!(desc.sky.is_some());
        assert_eq!(desc.view_count(), 1);

        match &desc.surfaces[0].shape {
            ShapeDesc::Sphere { center, radius } => {
                assert_eq!(*center, [0.0, 0.0, -5.0]);
                assert_eq!(*radius, 1.0);
            }
            other => panic!("expected a sphere, got {other:?}"),
        }
        assert_eq!(desc.surfaces[0].shader.reflectivity, 1.0);

        // Unspecified shader fields keep their defaults
        assert_eq!(desc.surfaces[0].shader.specular_exp, 24);
        assert_eq!(desc.surfaces[1].shader.reflectivity, 0.0);

        // Light color defaults to white
        assert_eq!(desc.lights[0].color, [1.0, 1.0, 1.0]);

        // View falls back to 512x512, linear output
        assert_eq!(desc.views[0].width, 512);
        assert_eq!(desc.views[0].height, 512);
        assert!(!desc.views[0].gamma_correct);
        assert_eq!(desc.views[0].camera.fov, 90.0);
    }

    #[test]
    fn test_parse_scene_rejects_invalid_json() {
        assert!(matches!(
            parse_scene("{ not json"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_parse_scene_rejects_unknown_shape() {
        let text = r#"{
            "surfaces": [ { "shape": { "type": "torus", "center": [0,0,0] } } ],
            "views": [ { "name": "v", "camera": { "position": [0,0,0], "direction": [0,0,-1] } } ]
        }"#;
        assert!(matches!(parse_scene(text), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_parse_scene_requires_views() {
        assert!(matches!(
            parse_scene(r#"{ "surfaces": [] }"#),
            Err(LoadError::NoViews)
        ));
    }

    #[test]
    fn test_load_scene_missing_file() {
        assert!(matches!(
            load_scene("/nonexistent/scene.json"),
            Err(LoadError::Io(_))
        ));
    }
}
