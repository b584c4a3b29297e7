// Copyright @yucwang 2026

use crate::core::environment::Environment;
use crate::core::interaction::{nearest, CollisionResult};
use crate::core::material::Material;
use crate::core::object::{Geometry, SceneObject};
use crate::core::rng::LcgRng;
use crate::core::shape::Shape;
use crate::math::ray::Ray3f;

/// Flat object array plus the light subset, shared read-only by every
/// invocation of a render.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<usize>,
    environment: Environment,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(environment: Environment) -> Self {
        Self { environment, ..Self::default() }
    }

    /// Appends an object and returns its id. Emissive objects with a finite
    /// surface are also registered in the light list; an emissive infinite
    /// plane is still visible to camera rays but is never sampled as a light.
    pub fn add_object(&mut self, geometry: Geometry, material: Material) -> u32 {
        let id = self.objects.len() as u32;
        self.push(SceneObject::new(id, geometry, material))
    }

    pub fn add_named_object(&mut self, name: &str, geometry: Geometry, material: Material) -> u32 {
        let id = self.objects.len() as u32;
        self.push(SceneObject::new(id, geometry, material).with_name(name))
    }

    fn push(&mut self, object: SceneObject) -> u32 {
        let id = object.id();
        if object.is_light() {
            if object.geometry().surface_area().is_finite() {
                self.lights.push(self.objects.len());
            } else {
                log::warn!("Emissive object {} has no finite surface to sample; not registered as a light.", id);
            }
        }
        self.objects.push(object);
        id
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn lights(&self) -> impl Iterator<Item = &SceneObject> + '_ {
        self.lights.iter().map(move |idx| &self.objects[*idx])
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest hit over every object, by linear scan.
    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<CollisionResult<'_>> {
        self.objects.iter().fold(None, |best, object| {
            let candidate = object
                .geometry()
                .ray_intersection(ray)
                .map(|hit| CollisionResult::new(hit, object));
            nearest(best, candidate)
        })
    }

    /// Picks one light with a single draw from the stream. The drawn value
    /// is scaled to the light range, rounded and clamped.
    pub fn random_light(&self, rng: &mut LcgRng) -> Option<&SceneObject> {
        let u = rng.next_f32();
        if self.lights.is_empty() {
            return None;
        }

        let last = self.lights.len() - 1;
        let index = ((u * last as f32).round() as usize).min(last);
        Some(&self.objects[self.lights[index]])
    }
}
