// Copyright @yucwang 2023

use crate::core::object::SceneObject;
use crate::math::constants::{ Float, Vector3f };

/// Geometric hit of a single shape, before it is attributed to an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceIntersection {
    pub t: Float,
    pub p: Vector3f,
    pub normal: Vector3f,
}

impl SurfaceIntersection {
    pub fn new(t: Float, p: Vector3f, normal: Vector3f) -> Self {
        Self { t, p, normal }
    }
}

/// Nearest hit of a trace. Borrows the hit object for the lifetime of
/// the scene it was traced against.
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult<'a> {
    pub distance: Float,
    pub position: Vector3f,
    pub normal: Vector3f,
    pub object: &'a SceneObject,
}

impl<'a> CollisionResult<'a> {
    pub fn new(intersection: SurfaceIntersection, object: &'a SceneObject) -> Self {
        Self {
            distance: intersection.t,
            position: intersection.p,
            normal: intersection.normal,
            object,
        }
    }

    /// Point just above the surface, used as the origin of spawned rays.
    pub fn offset_position(&self, bias: Float) -> Vector3f {
        self.position + self.normal * bias
    }
}

/// Keeps the closer of two candidate hits. A miss never beats a hit and
/// equal distances keep the current candidate.
pub fn nearest<'a>(current: Option<CollisionResult<'a>>,
                   candidate: Option<CollisionResult<'a>>) -> Option<CollisionResult<'a>> {
    match (current, candidate) {
        (None, candidate) => candidate,
        (current, None) => current,
        (Some(current), Some(candidate)) => {
            if candidate.distance >= 0.0 && candidate.distance < current.distance {
                Some(candidate)
            } else {
                Some(current)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::material::Material;
    use crate::core::object::{Geometry, SceneObject};
    use crate::math::spectrum::RGBSpectrum;
    use crate::shapes::sphere::Sphere;

    fn object(id: u32) -> SceneObject {
        SceneObject::new(id,
                         Geometry::Sphere(Sphere::new(Vector3f::zeros(), 1.0)),
                         Material::diffuse(RGBSpectrum::ones()))
    }

    fn hit(t: Float, object: &SceneObject) -> Option<CollisionResult<'_>> {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        Some(CollisionResult::new(SurfaceIntersection::new(t, Vector3f::zeros(), n), object))
    }

    #[test]
    fn test_miss_never_wins() {
        let a = object(0);
        assert_eq!(nearest(None, hit(5.0, &a)).map(|h| h.distance), Some(5.0));
        assert_eq!(nearest(hit(5.0, &a), None).map(|h| h.distance), Some(5.0));
        assert!(nearest(None, None).is_none());
    }

    #[test]
    fn test_closer_hit_wins_and_ties_keep_first() {
        let a = object(0);
        let b = object(1);
        assert_eq!(nearest(hit(5.0, &a), hit(2.0, &b)).map(|h| h.object.id()), Some(1));
        assert_eq!(nearest(hit(2.0, &a), hit(5.0, &b)).map(|h| h.object.id()), Some(0));
        assert_eq!(nearest(hit(2.0, &a), hit(2.0, &b)).map(|h| h.object.id()), Some(0));
        assert_eq!(nearest(hit(2.0, &a), hit(-1.0, &b)).map(|h| h.object.id()), Some(0));
    }

    #[test]
    fn test_offset_position() {
        let a = object(0);
        let h = hit(1.0, &a).unwrap();
        assert_eq!(h.offset_position(0.5), Vector3f::new(0.0, 0.0, 0.5));
    }
}
