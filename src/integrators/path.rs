// Copyright @yucwang 2026

use crate::core::bsdf::BSDF;
use crate::core::integrator::Integrator;
use crate::core::material::MaterialKind;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::tangent_frame::{build_tangent_frame, local_to_world, reflect};
use crate::integrators::direct::shadow_ray;
use crate::math::constants::{UInt, Vector3f, BIAS};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::sample_uniform_hemisphere;

/// Why a path stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Nothing was hit; the environment closed the path.
    Escaped,
    HitLight,
    /// Throughput fell below `BIAS`.
    LowThroughput,
    MaxDepth,
}

/// Everything a bounce needs to know about the path so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathState {
    pub origin: Vector3f,
    pub direction: Vector3f,
    pub depth: UInt,
    pub throughput: RGBSpectrum,
    pub value: RGBSpectrum,
    /// Still on the camera ray or a chain of mirror bounces from it.
    pub primary: bool,
}

impl PathState {
    pub fn from_ray(ray: &Ray3f) -> Self {
        Self {
            origin: ray.origin(),
            direction: ray.dir(),
            depth: ray.depth,
            throughput: RGBSpectrum::ones(),
            value: RGBSpectrum::default(),
            primary: true,
        }
    }

    pub fn ray(&self) -> Ray3f {
        Ray3f::new(self.origin, self.direction, None, None).with_depth(self.depth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathResult {
    pub radiance: RGBSpectrum,
    pub termination: Termination,
    pub depth: UInt,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathStep {
    Continue(PathState),
    Finished(PathResult),
}

pub struct PathIntegrator {
    pub max_depth: u32,
    pub samples_per_pixel: u32,
}

impl PathIntegrator {
    pub fn new(max_depth: u32, samples_per_pixel: u32) -> Self {
        Self { max_depth, samples_per_pixel }
    }

    /// Advances a path by one bounce.
    pub fn step(&self, scene: &Scene, state: &PathState, rng: &mut LcgRng) -> PathStep {
        let ray = state.ray();
        let finished = |radiance, termination| PathStep::Finished(PathResult {
            radiance,
            termination,
            depth: state.depth,
        });

        let collision = match scene.ray_intersection(&ray) {
            Some(collision) => collision,
            None => {
                let environment = scene.environment().radiance(&ray);
                return finished(state.value + environment * state.throughput, Termination::Escaped);
            }
        };

        let object = collision.object;
        if object.is_light() {
            // Non-primary hits were already counted by the shadow ray of
            // the previous bounce.
            if state.primary {
                let radiance = object.radiance();
                return finished(radiance / radiance.max_component() * state.throughput, Termination::HitLight);
            }
            return finished(state.value, Termination::HitLight);
        }

        let material = object.material();
        let n = collision.normal;
        let (next_direction, primary) = match material.kind() {
            MaterialKind::Reflective => (reflect(&ray.dir(), &n), state.primary),
            MaterialKind::Diffuse => (sample_hemisphere(&n, rng), false),
        };

        let bsdf = material.eval(&ray.dir(), &next_direction, &n);
        let cos_theta = material.cos_theta(&next_direction, &n);
        let pdf = material.pdf(&next_direction, &n);
        let multiplier = bsdf * cos_theta / pdf;

        let shadow = shadow_ray(scene, &collision, rng);

        let value = state.value + shadow * multiplier * state.throughput;
        let throughput = state.throughput * multiplier;
        if throughput.max_component() < BIAS {
            return finished(value, Termination::LowThroughput);
        }

        PathStep::Continue(PathState {
            origin: collision.offset_position(BIAS),
            direction: next_direction,
            depth: state.depth + 1,
            throughput,
            value,
            primary,
        })
    }

    /// Folds bounces until the path terminates or reaches `max_depth`.
    pub fn trace_path(&self, scene: &Scene, ray: &Ray3f, rng: &mut LcgRng) -> PathResult {
        let mut state = PathState::from_ray(ray);
        while state.depth < self.max_depth {
            match self.step(scene, &state, rng) {
                PathStep::Continue(next) => state = next,
                PathStep::Finished(result) => return result,
            }
        }

        PathResult { radiance: state.value, termination: Termination::MaxDepth, depth: state.depth }
    }
}

impl Integrator for PathIntegrator {
    fn radiance(&self, scene: &Scene, ray: Ray3f, rng: &mut LcgRng) -> RGBSpectrum {
        self.trace_path(scene, &ray, rng).radiance
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

fn sample_hemisphere(n: &Vector3f, rng: &mut LcgRng) -> Vector3f {
    let local = sample_uniform_hemisphere(&rng.next_2d());
    let (tangent, bitangent) = build_tangent_frame(n);
    local_to_world(&local, &tangent, &bitangent, n)
}
