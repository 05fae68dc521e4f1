//! Build runtime renderer objects from a scene description.

use glint_core::{CameraDesc, SceneDesc, ShaderDesc, ShapeDesc};
use glint_renderer::{
    Camera, Plane, PointLight, Scene, Shader, Sky, Sphere, Sun, Surface, Triangle, Vec3,
};

#[inline]
fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::from(v)
}

/// Instantiate the runtime scene from its description.
///
/// Surfaces and lights are added in description order, which fixes the
/// iteration (and therefore tie-break) order of the scene queries.
pub fn build_scene(desc: &SceneDesc) -> Scene {
    let mut scene = Scene::new();

    for surface in &desc.surfaces {
        let built = match &surface.shape {
            ShapeDesc::Sphere { center, radius } => {
                Surface::new(Sphere::new(vec3(*center), *radius), vec3(surface.color))
            }
            ShapeDesc::Triangle { a, b, c } => Surface::new(
                Triangle::new(vec3(*a), vec3(*b), vec3(*c)),
                vec3(surface.color),
            ),
            ShapeDesc::Plane { normal, distance } => {
                Surface::new(Plane::new(vec3(*normal), *distance), vec3(surface.color))
            }
        };
        scene.add_surface(built.with_shader(build_shader(&surface.shader)));
    }

    for light in &desc.lights {
        scene.add_light(
            PointLight::new(vec3(light.position), light.intensity).with_color(vec3(light.color)),
        );
    }

    if let Some(sun) = &desc.sun {
        scene.set_sun(
            Sun::new(vec3(sun.direction))
                .with_intensity(sun.intensity)
                .with_color(vec3(sun.color))
                .with_ambient(sun.ambient),
        );
    }

    if let Some(sky) = &desc.sky {
        scene.set_sky(Sky::new(vec3(sky.top), vec3(sky.mid), vec3(sky.bottom)));
    }

    scene
}

fn build_shader(desc: &ShaderDesc) -> Shader {
    Shader {
        diffuse: desc.diffuse,
        diffuse_exp: desc.diffuse_exp,
        specular: desc.specular,
        specular_exp: desc.specular_exp,
        reflectivity: desc.reflectivity,
    }
}

/// Instantiate an initialized camera from its description.
pub fn build_camera(desc: &CameraDesc) -> Camera {
    let mut camera = Camera::new(vec3(desc.position), vec3(desc.direction))
        .with_fov(desc.fov)
        .with_z_near(desc.z_near)
        .with_aspect(desc.aspect)
        .with_focus_dist(desc.focus_dist);
    camera.initialize();
    camera
}
