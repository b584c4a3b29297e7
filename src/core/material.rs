// Copyright @yucwang 2026

use crate::core::bsdf::{BSDFValue, BSDF};
use crate::materials::lambertian_diffuse::LambertianDiffuseBSDF;
use crate::materials::mirror::MirrorBSDF;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Diffuse,
    Reflective,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceBSDF {
    Diffuse(LambertianDiffuseBSDF),
    Reflective(MirrorBSDF),
}

/// Surface description embedded in every scene object: how it reflects
/// and how much it emits.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    bsdf: SurfaceBSDF,
    radiance: RGBSpectrum,
}

impl Material {
    pub fn diffuse(color: RGBSpectrum) -> Self {
        Self { bsdf: SurfaceBSDF::Diffuse(LambertianDiffuseBSDF::new(color)), radiance: RGBSpectrum::default() }
    }

    pub fn reflective(color: RGBSpectrum) -> Self {
        Self { bsdf: SurfaceBSDF::Reflective(MirrorBSDF::new(color)), radiance: RGBSpectrum::default() }
    }

    pub fn with_radiance(mut self, radiance: RGBSpectrum) -> Self {
        self.radiance = radiance;
        self
    }

    pub fn kind(&self) -> MaterialKind {
        match self.bsdf {
            SurfaceBSDF::Diffuse(_) => MaterialKind::Diffuse,
            SurfaceBSDF::Reflective(_) => MaterialKind::Reflective,
        }
    }

    pub fn radiance(&self) -> RGBSpectrum {
        self.radiance
    }

    /// Emits when any channel of the radiance is positive. Zero or
    /// negative radiance never makes a light.
    pub fn is_emissive(&self) -> bool {
        self.radiance.has_positive_component()
    }

    fn as_bsdf(&self) -> &dyn BSDF {
        match &self.bsdf {
            SurfaceBSDF::Diffuse(bsdf) => bsdf as &dyn BSDF,
            SurfaceBSDF::Reflective(bsdf) => bsdf,
        }
    }
}

impl BSDF for Material {
    fn name(&self) -> &'static str {
        self.as_bsdf().name()
    }

    fn eval(&self, wi: &Vector3f, wo: &Vector3f, n: &Vector3f) -> BSDFValue {
        self.as_bsdf().eval(wi, wo, n)
    }

    fn cos_theta(&self, wo: &Vector3f, n: &Vector3f) -> Float {
        self.as_bsdf().cos_theta(wo, n)
    }

    fn pdf(&self, wo: &Vector3f, n: &Vector3f) -> Float {
        self.as_bsdf().pdf(wo, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_constructor() {
        assert_eq!(Material::diffuse(RGBSpectrum::ones()).kind(), MaterialKind::Diffuse);
        assert_eq!(Material::reflective(RGBSpectrum::ones()).kind(), MaterialKind::Reflective);
    }

    #[test]
    fn test_emission() {
        let plain = Material::diffuse(RGBSpectrum::ones());
        assert!(!plain.is_emissive());
        let light = plain.with_radiance(RGBSpectrum::new(500.0, 500.0, 500.0));
        assert!(light.is_emissive());
        assert_eq!(light.radiance()[1], 500.0);
    }

    #[test]
    fn test_non_positive_radiance_is_not_emissive() {
        let negative = Material::diffuse(RGBSpectrum::ones()).with_radiance(RGBSpectrum::new(0.0, 0.0, -1.0));
        assert!(!negative.is_emissive());
        let mixed = Material::diffuse(RGBSpectrum::ones()).with_radiance(RGBSpectrum::new(-1.0, 0.0, 0.5));
        assert!(mixed.is_emissive());
    }

    #[test]
    fn test_dispatch_reaches_surface_bsdf() {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let mirror = Material::reflective(RGBSpectrum::splat(0.5));
        assert_eq!(mirror.pdf(&n, &n), 1.0);
        assert_eq!(mirror.eval(&-n, &n, &n), RGBSpectrum::splat(0.5));
        assert!(mirror.name().ends_with("MirrorBSDF"));
    }
}
