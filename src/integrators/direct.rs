// Copyright @yucwang 2026

use crate::core::interaction::CollisionResult;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::shape::Shape;
use crate::math::constants::BIAS;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Next-event estimate at a hit: one light pick, one point on that light
/// and one occlusion trace. Blocked or escaping samples see the
/// environment; visible ones receive the light's radiance with
/// inverse-square falloff.
pub fn shadow_ray(scene: &Scene, collision: &CollisionResult<'_>, rng: &mut LcgRng) -> RGBSpectrum {
    let start = collision.offset_position(BIAS);
    let light = match scene.random_light(rng) {
        Some(light) => light,
        None => return scene.environment().radiance(&Ray3f::new(start, collision.normal, None, None)),
    };

    let light_sample = light.geometry().sample_point(rng);
    let ray = Ray3f::new(start, light_sample - start, None, None);

    match scene.ray_intersection(&ray) {
        Some(hit) if hit.object.id() == light.id() => {
            let dist_squared = (start - light_sample).norm_squared();
            light.radiance() / dist_squared
        }
        _ => scene.environment().radiance(&ray),
    }
}
