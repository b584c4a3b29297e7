// Copyright @yucwang 2023

use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::LcgRng;
use crate::core::shape::{ face_forward, Shape };
use crate::math::constants::{ EPSILON, Float, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::warp::square_to_triangle;

#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    p0: Vector3f,
    p1: Vector3f,
    p2: Vector3f
}

impl Shape for Triangle {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let geo_normal = self.geometric_normal();
        let n_dot_dir = geo_normal.dot(&ray.dir());

        if n_dot_dir > -EPSILON && n_dot_dir < EPSILON {
            return None;
        }

        let plane_d = geo_normal.dot(&self.p0);
        let t = (plane_d - geo_normal.dot(&ray.origin())) / n_dot_dir;
        if !ray.test_segment(t) {
            return None;
        }

        let intersection_p = ray.origin() + t * ray.dir();
        if self.is_in_triangle(&intersection_p) {
            Some(SurfaceIntersection::new(t, intersection_p, face_forward(geo_normal, &ray.dir())))
        } else {
            None
        }
    }

    fn sample_point(&self, rng: &mut LcgRng) -> Vector3f {
        let bary = square_to_triangle(&rng.next_2d());
        self.p0 * bary.x + self.p1 * bary.y + self.p2 * bary.z
    }

    fn surface_area(&self) -> Float {
        0.5 * ((self.p1 - self.p0).cross(&(self.p2 - self.p0))).norm()
    }
}

impl Triangle {
    pub fn new(new_p0: Vector3f, new_p1: Vector3f, new_p2: Vector3f) -> Self {
        Triangle {
            p0: new_p0,
            p1: new_p1,
            p2: new_p2,
        }
    }

    fn is_in_triangle(&self, p: &Vector3f) -> bool {
        let edge0 = self.p1 - self.p0;
        let edge1 = self.p2 - self.p0;
        let geo_normal = edge0.cross(&edge1);

        let n0 = (self.p1 - self.p0).cross(&(p - self.p0));
        let n1 = (self.p2 - self.p1).cross(&(p - self.p1));
        let n2 = (self.p0 - self.p2).cross(&(p - self.p2));

        (n0.dot(&geo_normal) >= 0.0) && (n1.dot(&geo_normal) >= 0.0) && (n2.dot(&geo_normal) >= 0.0)
    }

    pub fn geometric_normal(&self) -> Vector3f {
        let edge0 = self.p1 - self.p0;
        let edge1 = self.p2 - self.p0;
        edge0.cross(&edge1).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(Vector3f::new(1.0, 1.0, 0.0),
                      Vector3f::new(2.0, 2.0, 0.0),
                      Vector3f::new(2.0, 1.0, 0.0))
    }

    #[test]
    fn test_is_in_triangle1() {
        let triangle = unit_triangle();

        let p0 = Vector3f::new(1.5, 1.1, 0.0);
        let p1 = Vector3f::new(1.5, 2.0, 0.0);

        assert_eq!(triangle.is_in_triangle(&p0), true);
        assert_eq!(triangle.is_in_triangle(&p1), false);
    }

    #[test]
    fn test_ray_intersection() {
        let triangle = unit_triangle();

        let ray1 = Ray3f::new(Vector3f::new(1.5, 1.1, 3.0),
            Vector3f::new(0.0, 0.0, -1.0),
            None,
            None);
        let ray2 = Ray3f::new(Vector3f::new(1.5, 1.1, 3.0),
            Vector3f::new(0.0, 0.0, 1.0),
            None,
            None);

        let hit = triangle.ray_intersection(&ray1).expect("expected hit");
        assert!((hit.t - 3.0).abs() < 1e-5);
        assert!(hit.normal.dot(&ray1.dir()) < 0.0);
        assert!(triangle.ray_intersection(&ray2).is_none());
    }

    #[test]
    fn test_sample_point_inside() {
        let triangle = unit_triangle();
        let mut rng = LcgRng::new(11);
        for _ in 0..100 {
            let p = triangle.sample_point(&mut rng);
            assert!(p.z.abs() < 1e-6);
            assert!(p.x >= 1.0 - 1e-5 && p.x <= 2.0 + 1e-5);
            assert!(p.y >= 1.0 - 1e-5 && p.y <= p.x + 1e-5);
        }
        assert!((triangle.surface_area() - 0.5).abs() < 1e-6);
    }
}
