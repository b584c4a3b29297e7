// Copyright @yucwang 2023

use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::LcgRng;
use crate::math::constants::{ Float, Vector3f };
use crate::math::ray::Ray3f;

pub trait Shape: Send + Sync {
    /// Nearest intersection inside the ray segment, with the normal facing
    /// against the ray direction.
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection>;
    /// Point on the surface, consuming the invocation's random stream.
    fn sample_point(&self, rng: &mut LcgRng) -> Vector3f;
    fn surface_area(&self) -> Float;
}

/// Flips `normal` so that it faces against `dir`.
pub fn face_forward(normal: Vector3f, dir: &Vector3f) -> Vector3f {
    if normal.dot(dir) > 0.0 {
        -normal
    } else {
        normal
    }
}
