// Copyright @yucwang 2026

use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::LcgRng;
use crate::core::shape::{ face_forward, Shape };
use crate::math::constants::{ EPSILON, Float, Vector3f };
use crate::math::ray::Ray3f;

/// Infinite plane of points `p` with `normal . p + offset = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vector3f,
    offset: Float,
}

impl Plane {
    pub fn new(normal: Vector3f, offset: Float) -> Self {
        Self { normal: normal.normalize(), offset }
    }
}

impl Shape for Plane {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let n_dot_dir = self.normal.dot(&ray.dir());
        if n_dot_dir.abs() < EPSILON {
            return None;
        }

        let t = -(self.normal.dot(&ray.origin()) + self.offset) / n_dot_dir;
        if !ray.test_segment(t) {
            return None;
        }

        Some(SurfaceIntersection::new(t, ray.at(t), face_forward(self.normal, &ray.dir())))
    }

    // An infinite plane has no uniform surface distribution, so scenes never
    // register it as a light. The point closest to the origin stands in.
    fn sample_point(&self, _rng: &mut LcgRng) -> Vector3f {
        -self.normal * self.offset
    }

    fn surface_area(&self) -> Float {
        std::f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_hit_both_sides() {
        let floor = Plane::new(Vector3f::new(0.0, 1.0, 0.0), 0.0);
        let down = Ray3f::new(Vector3f::new(0.0, 5.0, 0.0), Vector3f::new(0.0, -1.0, 0.0), None, None);
        let hit = floor.ray_intersection(&down).expect("expected hit");
        assert!((hit.t - 5.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vector3f::new(0.0, 1.0, 0.0));

        let up = Ray3f::new(Vector3f::new(0.0, -5.0, 0.0), Vector3f::new(0.0, 1.0, 0.0), None, None);
        let hit = floor.ray_intersection(&up).expect("expected hit");
        assert_eq!(hit.normal, Vector3f::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_plane_offset_and_parallel_miss() {
        let ceiling = Plane::new(Vector3f::new(0.0, -1.0, 0.0), 180.0);
        let up = Ray3f::new(Vector3f::new(0.0, 90.0, 0.0), Vector3f::new(0.0, 1.0, 0.0), None, None);
        let hit = ceiling.ray_intersection(&up).expect("expected hit");
        assert!((hit.p.y - 180.0).abs() < 1e-3);

        let parallel = Ray3f::new(Vector3f::new(0.0, 90.0, 0.0), Vector3f::new(1.0, 0.0, 0.0), None, None);
        assert!(ceiling.ray_intersection(&parallel).is_none());
        let mut rng = LcgRng::new(0);
        assert_eq!(ceiling.sample_point(&mut rng), Vector3f::new(0.0, 180.0, 0.0));
    }
}
