// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector2f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub trait Integrator: Sync {
    /// Radiance estimate along one primary ray.
    fn radiance(&self, scene: &Scene, ray: Ray3f, rng: &mut LcgRng) -> RGBSpectrum;
    fn samples_per_pixel(&self) -> u32;
    fn max_depth(&self) -> u32;

    /// One invocation for a pixel: jitter a film position, generate the
    /// primary ray and estimate its radiance.
    fn trace_ray_forward(&self, scene: &Scene, sensor: &dyn Sensor, pixel: Vector2f, rng: &mut LcgRng) -> RGBSpectrum {
        let (width, height) = {
            let bmp = sensor.bitmap();
            (bmp.width() as Float, bmp.height() as Float)
        };
        let jitter = rng.next_2d();
        let u = Vector2f::new((pixel.x + jitter.x) / width, (pixel.y + jitter.y) / height);
        self.radiance(scene, sensor.sample_ray(&u), rng)
    }
}
