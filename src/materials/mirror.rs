// Copyright @yucwang 2026

use crate::core::bsdf::{BSDFValue, BSDF};
use crate::math::constants::{ Float, Vector3f };
use crate::math::spectrum::RGBSpectrum;

/// Perfect specular reflector. The lobe is a delta in the mirror
/// direction, so the cosine is folded into the reflectance and the
/// sampling density is one.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorBSDF {
    color: RGBSpectrum
}

impl BSDF for MirrorBSDF {
    fn eval(&self, _wi: &Vector3f, _wo: &Vector3f, _n: &Vector3f) -> BSDFValue {
        self.color
    }

    fn cos_theta(&self, _wo: &Vector3f, _n: &Vector3f) -> Float {
        1.0
    }

    fn pdf(&self, _wo: &Vector3f, _n: &Vector3f) -> Float {
        1.0
    }
}

impl MirrorBSDF {
    pub fn new(rgb: RGBSpectrum) -> Self {
        Self { color: rgb }
    }
}
