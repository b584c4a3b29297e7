// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

use std::ops;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RGBSpectrum {
    rgb: Vector3f
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self { rgb: Vector3f::new(0.0f32, 0.0f32, 0.0f32) }
    }
}

impl RGBSpectrum {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { rgb: Vector3f::new(r, g, b) }
    }

    pub fn from_vector(rgb: Vector3f) -> Self {
        Self { rgb }
    }

    pub fn splat(v: Float) -> Self {
        Self::new(v, v, v)
    }

    pub fn ones() -> Self {
        Self::splat(1.0)
    }

    pub fn to_vector(&self) -> Vector3f {
        self.rgb
    }

    /// True when at least one channel is strictly positive.
    pub fn has_positive_component(&self) -> bool {
        self.rgb.iter().any(|c| *c > 0.0)
    }

    pub fn max_component(&self) -> Float {
        self.rgb.x.max(self.rgb.y).max(self.rgb.z)
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, index: usize) -> &Float {
        &self.rgb[index]
    }
}

impl ops::Add for RGBSpectrum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { rgb: self.rgb + rhs.rgb }
    }
}

impl ops::AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: Self) {
        self.rgb += rhs.rgb;
    }
}

impl ops::Mul for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { rgb: self.rgb.component_mul(&rhs.rgb) }
    }
}

impl ops::MulAssign for RGBSpectrum {
    fn mul_assign(&mut self, rhs: Self) {
        self.rgb.component_mul_assign(&rhs.rgb);
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        Self { rgb: self.rgb * rhs }
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = Self;

    fn div(self, rhs: Float) -> Self {
        Self { rgb: self.rgb / rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::RGBSpectrum;

    #[test]
    fn test_has_positive_component() {
        assert!(!RGBSpectrum::default().has_positive_component());
        assert!(!RGBSpectrum::new(0.0, 0.0, -1.0).has_positive_component());
        assert!(RGBSpectrum::new(-2.0, 0.0, 0.1).has_positive_component());
    }

    #[test]
    fn test_component_ops() {
        let a = RGBSpectrum::new(1.0, 2.0, 4.0);
        let b = RGBSpectrum::new(0.5, 0.5, 0.25);
        assert_eq!(a * b, RGBSpectrum::new(0.5, 1.0, 1.0));
        assert_eq!(a / 2.0, RGBSpectrum::new(0.5, 1.0, 2.0));
        assert_eq!(a.max_component(), 4.0);

        let mut c = a;
        c += b;
        c *= RGBSpectrum::splat(2.0);
        assert_eq!(c, RGBSpectrum::new(3.0, 5.0, 8.5));
    }
}
