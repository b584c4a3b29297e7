// Copyright @yucwang 2026

use crate::core::material::Material;
use crate::core::object::Geometry;
use crate::core::scene::Scene;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::sensors::perspective::PerspectiveCamera;
use crate::shapes::plane::Plane;
use crate::shapes::sphere::Sphere;

fn sphere(center: Vector3f, radius: Float) -> Geometry {
    Geometry::Sphere(Sphere::new(center, radius))
}

fn plane(normal: Vector3f, offset: Float) -> Geometry {
    Geometry::Plane(Plane::new(normal, offset))
}

/// Closed room with tinted side walls, a white and a mirror sphere, lit
/// by one small spherical light under the ceiling.
pub fn default_scene() -> Scene {
    let white = RGBSpectrum::ones();
    let mut scene = Scene::new();

    scene.add_named_object("Light",
                           sphere(Vector3f::new(0.0, 60.0, 0.0), 5.0),
                           Material::diffuse(white).with_radiance(RGBSpectrum::splat(500.0)));

    scene.add_named_object("Floor", plane(Vector3f::new(0.0, 1.0, 0.0), 0.0), Material::diffuse(white));
    scene.add_named_object("Front", plane(Vector3f::new(0.0, 0.0, 1.0), 90.0), Material::diffuse(white));
    scene.add_named_object("Back", plane(Vector3f::new(0.0, 0.0, -1.0), 90.0), Material::diffuse(white));
    scene.add_named_object("Ceiling", plane(Vector3f::new(0.0, -1.0, 0.0), 180.0), Material::diffuse(white));
    scene.add_named_object("Left", plane(Vector3f::new(1.0, 0.0, 0.0), 90.0),
                           Material::diffuse(RGBSpectrum::new(1.0, 0.5, 0.5)));
    scene.add_named_object("Right", plane(Vector3f::new(-1.0, 0.0, 0.0), 90.0),
                           Material::diffuse(RGBSpectrum::new(0.5, 0.5, 1.0)));

    scene.add_named_object("White sphere",
                           sphere(Vector3f::new(-40.0, 30.0, -40.0), 30.0),
                           Material::diffuse(white));
    scene.add_named_object("Mirror sphere",
                           sphere(Vector3f::new(40.0, 20.0, -20.0), 20.0),
                           Material::reflective(white));

    scene
}

/// Camera inside the room looking at the far wall.
pub fn default_camera(width: usize, height: usize) -> PerspectiveCamera {
    let origin = Vector3f::new(0.0, 90.0, 80.0);
    let target = Vector3f::new(0.0, 90.0, 0.0);
    let up = Vector3f::new(0.0, 1.0, 0.0);
    let aspect = width as Float / height.max(1) as Float;
    PerspectiveCamera::new(origin, target, up, (60.0 as Float).to_radians(), aspect, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sensor::Sensor;
    use crate::math::constants::Vector2f;

    #[test]
    fn test_default_scene_layout() {
        let scene = default_scene();
        assert_eq!(scene.object_count(), 9);
        assert_eq!(scene.light_count(), 1);
        let light = scene.lights().next().expect("one light");
        assert_eq!(light.name(), Some("Light"));
        assert_eq!(light.id(), 0);
    }

    #[test]
    fn test_default_camera_sees_inside_the_room() {
        let scene = default_scene();
        let camera = default_camera(64, 48);
        for u in [0.0, 0.25, 0.5, 0.75, 1.0].iter() {
            for v in [0.0, 0.5, 1.0].iter() {
                let ray = camera.sample_ray(&Vector2f::new(*u, *v));
                assert!(scene.ray_intersection(&ray).is_some());
            }
        }
    }
}
