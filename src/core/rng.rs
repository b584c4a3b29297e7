// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};

/// Random stream owned by a single path invocation.
#[derive(Debug, Clone)]
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds the stream of one (pixel, sample) invocation. The seed only
    /// depends on its own coordinates, never on other invocations.
    pub fn for_invocation(seed: u64, pixel_index: u64, sample_index: u64) -> Self {
        let key = splitmix64(seed ^ splitmix64(pixel_index ^ splitmix64(sample_index)));
        Self::new(key)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Uniform value in [0, 1).
    pub fn next_f32(&mut self) -> Float {
        (self.next_u32() >> 8) as Float * (1.0 / 16_777_216.0)
    }

    pub fn next_2d(&mut self) -> Vector2f {
        let u = self.next_f32();
        let v = self.next_f32();
        Vector2f::new(u, v)
    }
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::LcgRng;

    #[test]
    fn test_next_f32_range() {
        let mut rng = LcgRng::new(7);
        for _ in 0..10_000 {
            let u = rng.next_f32();
            assert!(u >= 0.0 && u < 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = LcgRng::for_invocation(42, 10, 3);
        let mut b = LcgRng::for_invocation(42, 10, 3);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_invocations_are_decorrelated() {
        let mut a = LcgRng::for_invocation(42, 10, 3);
        let mut b = LcgRng::for_invocation(42, 10, 4);
        let same = (0..32).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(same < 4);
    }
}
