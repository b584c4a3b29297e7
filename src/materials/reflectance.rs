// Copyright @yucwang 2026

use crate::core::interaction::CollisionResult;
use crate::core::material::MaterialKind;
use crate::math::constants::{ Float, INV_PI };
use crate::math::ray::Ray3f;

/// Scalar directional response of a material kind at a hit. This is the
/// simplified per-kind table; the path integrator weights bounces with
/// the full BSDF of the material instead.
pub fn calculate_brdf(kind: MaterialKind, collision: &CollisionResult<'_>, ray: &Ray3f) -> Float {
    match kind {
        MaterialKind::Diffuse => {
            let cos_theta = ray.dir().dot(&collision.normal);
            2.0 * cos_theta * INV_PI
        }
        MaterialKind::Reflective => 1.0,
    }
}
