// Copyright @yucwang 2023

use crate::core::bsdf::{BSDFValue, BSDF};
use crate::math::constants::{ Float, INV_PI, Vector3f };
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::sample_uniform_hemisphere_pdf;

/// Lambertian reflector whose outgoing directions are drawn uniformly
/// from the hemisphere around the normal.
#[derive(Debug, Clone, PartialEq)]
pub struct LambertianDiffuseBSDF {
    color: RGBSpectrum
}

impl BSDF for LambertianDiffuseBSDF {
    fn eval(&self, _wi: &Vector3f, _wo: &Vector3f, _n: &Vector3f) -> BSDFValue {
        self.color * INV_PI
    }

    fn cos_theta(&self, wo: &Vector3f, n: &Vector3f) -> Float {
        wo.dot(n).max(0.0)
    }

    fn pdf(&self, _wo: &Vector3f, _n: &Vector3f) -> Float {
        sample_uniform_hemisphere_pdf()
    }
}

impl LambertianDiffuseBSDF {
    pub fn new(rgb: RGBSpectrum) -> Self {
        Self {
            color: rgb,
        }
    }
}
