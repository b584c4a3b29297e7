// Copyright 2020 @TwoCookingMice

use super::constants::{Float, UInt, Vector3f};

#[derive(Debug, Clone, PartialEq)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    pub min_t: Float,
    pub max_t: Float,
    pub depth: UInt,
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f,
               min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self { origin: o, dir: d.normalize(),
               min_t: min_t.unwrap_or(0.0),
               max_t: max_t.unwrap_or(std::f32::MAX),
               depth: 0 }
    }

    pub fn with_depth(mut self, depth: UInt) -> Self {
        self.depth = depth;
        self
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }

    pub fn test_segment(&self, t: Float) -> bool {
        t >= self.min_t && t <= self.max_t
    }
}

/* Tests for Ray */

#[cfg(test)]
mod tests {
    use super::Vector3f;
    use super::Ray3f;

    #[test]
    fn test_ray3f() {
        let o = Vector3f::new(0.0, 0.0, 0.0);
        let d = Vector3f::new(1.0, 0.0, 1.0);
        let ray = Ray3f::new(o, d, None, Some(100.0));
        assert_eq!(o, ray.origin());
        assert_eq!(ray.depth, 0);

        let v1 = ray.at(2.0);
        assert!((v1[0] - std::f32::consts::SQRT_2).abs() < 1e-5);
        assert!((v1[1] - 0.0).abs() < 1e-5);
        assert!((v1[2] - std::f32::consts::SQRT_2).abs() < 1e-5);

        assert!(ray.test_segment(50.0));
        assert!(!ray.test_segment(105.0));
        assert!(!ray.test_segment(-1.0));
    }

    #[test]
    fn test_ray3f_with_depth() {
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 2.0, 0.0), None, None)
            .with_depth(3);
        assert_eq!(ray.depth, 3);
        assert!((ray.dir().norm() - 1.0).abs() < 1e-6);
    }
}
