//! Glint command line renderer.
//!
//! Renders a JSON scene description (or the built-in demo scene when no
//! path is given) and writes one PNG per view.
//!
//! Run with: `glint [scene.json]`

use std::env;
use std::time::Instant;

use anyhow::{Context, Result};

use glint_core::SceneDesc;
use glint_renderer::{render_parallel, Film, RenderConfig};

mod demo;
mod stage;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        println!("Usage: glint [scene.json]");
        println!("\nRenders every view in the scene description to <view>.png.");
        println!("Without an argument the built-in demo scene is rendered.");
        return Ok(());
    }

    let desc: SceneDesc = match args.get(1) {
        Some(path) => {
            glint_core::load_scene(path).with_context(|| format!("loading scene '{path}'"))?
        }
        None => {
            log::info!("no scene file given, rendering the built-in demo");
            demo::scene()
        }
    };

    let scene = stage::build_scene(&desc);
    log::info!(
        "scene '{}': {} surfaces, {} point lights",
        desc.name,
        scene.surface_count(),
        scene.light_count()
    );

    let config = RenderConfig::default();
    for view in &desc.views {
        let camera = stage::build_camera(&view.camera);
        let mut film = Film::new(view.width, view.height);

        let start = Instant::now();
        render_parallel(&scene, &camera, &mut film, &config);
        log::info!(
            "rendered view '{}' ({}x{}) in {:?}",
            view.name,
            view.width,
            view.height,
            start.elapsed()
        );

        let filename = format!("{}.png", view.name);
        film.save_png(&filename, view.gamma_correct)
            .with_context(|| format!("writing '{filename}'"))?;
        log::info!("wrote {filename}");
    }

    Ok(())
}
