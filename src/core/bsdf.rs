// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector3f };
use crate::math::spectrum::RGBSpectrum;

pub type BSDFValue = RGBSpectrum;

/// Reflectance model of a surface. `wi` is the incoming ray direction
/// (pointing at the surface), `wo` the sampled outgoing direction and `n`
/// the surface normal.
pub trait BSDF: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
    fn eval(&self, wi: &Vector3f, wo: &Vector3f, n: &Vector3f) -> BSDFValue;
    fn cos_theta(&self, wo: &Vector3f, n: &Vector3f) -> Float;
    fn pdf(&self, wo: &Vector3f, n: &Vector3f) -> Float;
}
