// Copyright @yucwang 2026

use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::LcgRng;
use crate::core::shape::{ face_forward, Shape };
use crate::math::constants::{ Float, PI, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::warp::sample_uniform_sphere;

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float) -> Self {
        Self { center, radius }
    }
}

impl Shape for Sphere {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let oc = ray.origin() - self.center;
        let half_b = oc.dot(&ray.dir());
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let t = [-half_b - root, -half_b + root]
            .iter()
            .cloned()
            .find(|t| ray.test_segment(*t))?;

        let p = ray.at(t);
        let outward = (p - self.center) / self.radius;
        Some(SurfaceIntersection::new(t, p, face_forward(outward, &ray.dir())))
    }

    fn sample_point(&self, rng: &mut LcgRng) -> Vector3f {
        self.center + sample_uniform_sphere(&rng.next_2d()) * self.radius
    }

    fn surface_area(&self) -> Float {
        4.0 * PI * self.radius * self.radius
    }
}
