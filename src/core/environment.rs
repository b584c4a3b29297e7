// Copyright @yucwang 2026

use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Background radiance seen by rays that leave the scene, and by shadow
/// rays that do not reach their light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Black,
    Constant(RGBSpectrum),
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Black
    }
}

impl Environment {
    pub fn radiance(&self, _ray: &Ray3f) -> RGBSpectrum {
        match self {
            Environment::Black => RGBSpectrum::default(),
            Environment::Constant(radiance) => *radiance,
        }
    }
}
