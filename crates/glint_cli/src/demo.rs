//! Built-in demo scene: a mirror sphere in a five-walled color box.

use glint_core::{
    CameraDesc, LightDesc, SceneDesc, ShaderDesc, ShapeDesc, SkyDesc, SurfaceDesc, ViewDesc,
};

fn surface(shape: ShapeDesc, color: [f32; 3]) -> SurfaceDesc {
    SurfaceDesc {
        shape,
        color,
        shader: ShaderDesc::default(),
    }
}

/// The demo scene description: one mirror sphere, five walls, a lamp, a
/// three-band sky, and three views of the box.
pub fn scene() -> SceneDesc {
    let mut desc = SceneDesc::new("demo");

    desc.sky = Some(SkyDesc {
        top: [0.35, 0.55, 0.7],
        mid: [0.97, 0.95, 0.95],
        bottom: [0.0, 0.0, 0.15],
    });

    desc.lights.push(LightDesc {
        position: [3.0, 3.0, -5.0],
        intensity: 20.0,
        color: [1.0, 1.0, 1.0],
    });

    desc.surfaces.push(SurfaceDesc {
        shader: ShaderDesc {
            reflectivity: 1.0,
            ..Default::default()
        },
        ..surface(
            ShapeDesc::Sphere {
                center: [0.0, 0.0, -5.0],
                radius: 1.0,
            },
            [0.3, 0.5, 1.0],
        )
    });

    // The box: floor, side walls, ceiling, back
    desc.surfaces.push(surface(
        ShapeDesc::Plane {
            normal: [0.0, 1.0, 0.0],
            distance: 2.0,
        },
        [0.7, 0.8, 0.1],
    ));
    desc.surfaces.push(surface(
        ShapeDesc::Plane {
            normal: [-1.0, 0.0, 0.0],
            distance: 6.0,
        },
        [0.9, 0.1, 0.1],
    ));
    desc.surfaces.push(surface(
        ShapeDesc::Plane {
            normal: [1.0, 0.0, 0.0],
            distance: 6.0,
        },
        [0.9, 0.6, 0.1],
    ));
    desc.surfaces.push(surface(
        ShapeDesc::Plane {
            normal: [0.0, -1.0, 0.0],
            distance: 5.0,
        },
        [0.6, 0.3, 0.1],
    ));
    desc.surfaces.push(surface(
        ShapeDesc::Plane {
            normal: [0.0, 0.0, 1.0],
            distance: 12.0,
        },
        [0.2, 0.4, 1.0],
    ));

    desc.views.push(ViewDesc {
        name: "render".to_string(),
        camera: CameraDesc {
            position: [-2.0, 0.8, 2.0],
            direction: [0.3, -0.1, -1.0],
            fov: 90.0,
            z_near: 1.0,
            aspect: 1.0,
            focus_dist: 1.0,
        },
        width: 512,
        height: 512,
        gamma_correct: false,
    });
    desc.views.push(ViewDesc {
        name: "render_left".to_string(),
        camera: CameraDesc {
            position: [-4.0, 0.5, -4.0],
            direction: [1.0, -0.2, -0.25],
            fov: 90.0,
            z_near: 0.1,
            aspect: 1.0,
            focus_dist: 1.0,
        },
        width: 128,
        height: 128,
        gamma_correct: false,
    });
    desc.views.push(ViewDesc {
        name: "render_up".to_string(),
        camera: CameraDesc {
            position: [1.0, 4.0, -5.0],
            direction: [0.0, -1.0, 0.0],
            fov: 90.0,
            z_near: 0.0,
            aspect: 1.0,
            focus_dist: 2.0,
        },
        width: 128,
        height: 128,
        gamma_correct: false,
    });

    desc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_contents() {
        let desc = scene();

        assert_eq!(desc.surface_count(), 6);
        assert_eq!(desc.lights.len(), 1);
        assert!(desc.sky.is_some());
        assert!(desc.sun.is_none());

        let names: Vec<&str> = desc.views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["render", "render_left", "render_up"]);
    }

    #[test]
    fn test_demo_sphere_is_pure_mirror() {
        let desc = scene();
        assert_eq!(desc.surfaces[0].shader.reflectivity, 1.0);
    }
}
