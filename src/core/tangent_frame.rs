// Copyright @yucwang 2026

use crate::math::constants::Vector3f;

pub fn build_tangent_frame(n: &Vector3f) -> (Vector3f, Vector3f) {
    let up = if n.z.abs() < 0.999 {
        Vector3f::new(0.0, 0.0, 1.0)
    } else {
        Vector3f::new(1.0, 0.0, 0.0)
    };
    let tangent = n.cross(&up).normalize();
    let bitangent = n.cross(&tangent).normalize();
    (tangent, bitangent)
}

pub fn local_to_world(v: &Vector3f, t: &Vector3f, b: &Vector3f, n: &Vector3f) -> Vector3f {
    t * v.x + b * v.y + n * v.z
}

pub fn reflect(dir: &Vector3f, n: &Vector3f) -> Vector3f {
    dir - n * (2.0 * dir.dot(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tangent_frame_is_orthonormal() {
        for n in [Vector3f::new(0.0, 0.0, 1.0),
                  Vector3f::new(0.0, 1.0, 0.0),
                  Vector3f::new(1.0, 2.0, -3.0).normalize()].iter() {
            let (t, b) = build_tangent_frame(n);
            assert!(t.dot(n).abs() < 1e-5);
            assert!(b.dot(n).abs() < 1e-5);
            assert!(t.dot(&b).abs() < 1e-5);
            let up = local_to_world(&Vector3f::new(0.0, 0.0, 1.0), &t, &b, n);
            assert!((up - n).norm() < 1e-5);
        }
    }

    #[test]
    fn test_reflect() {
        let d = Vector3f::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(&d, &Vector3f::new(0.0, 1.0, 0.0));
        assert!((r - Vector3f::new(1.0, 1.0, 0.0).normalize()).norm() < 1e-6);
    }
}
