// Copyright @yucwang 2026

use crate::core::interaction::SurfaceIntersection;
use crate::core::material::Material;
use crate::core::rng::LcgRng;
use crate::core::shape::Shape;
use crate::math::constants::{ Float, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::shapes::plane::Plane;
use crate::shapes::sphere::Sphere;
use crate::shapes::triangle::Triangle;

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Geometry {
    fn as_shape(&self) -> &dyn Shape {
        match self {
            Geometry::Sphere(sphere) => sphere as &dyn Shape,
            Geometry::Plane(plane) => plane,
            Geometry::Triangle(triangle) => triangle,
        }
    }
}

impl Shape for Geometry {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        self.as_shape().ray_intersection(ray)
    }

    fn sample_point(&self, rng: &mut LcgRng) -> Vector3f {
        self.as_shape().sample_point(rng)
    }

    fn surface_area(&self) -> Float {
        self.as_shape().surface_area()
    }
}

/// Entry of the flat object array. The id is unique within a scene and
/// is what shadow rays compare against.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    id: u32,
    geometry: Geometry,
    material: Material,
    name: Option<String>,
}

impl SceneObject {
    pub fn new(id: u32, geometry: Geometry, material: Material) -> Self {
        Self { id, geometry, material, name: None }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    // Derived from the emission so the two can never disagree.
    pub fn is_light(&self) -> bool {
        self.material.is_emissive()
    }

    pub fn radiance(&self) -> RGBSpectrum {
        self.material.radiance()
    }
}
