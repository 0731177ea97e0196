//! Vector math utilities for shadow calculations
//!
//! Helpers over fixed-size 3-component vectors expressed in kilometres in a
//! common Earth-centered inertial frame.

/// 3D vector [x, y, z] in km (ECI)
pub type Vector3 = [f64; 3];

/// Calculate the dot product of two 3D vectors
///
/// # Arguments
/// * `a` - First vector [x, y, z]
/// * `b` - Second vector [x, y, z]
///
/// # Returns
/// Scalar dot product a·b
pub fn dot_product(a: &Vector3, b: &Vector3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Cross product a × b
pub fn cross_product(a: &Vector3, b: &Vector3) -> Vector3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn negate(v: &Vector3) -> Vector3 {
    [-v[0], -v[1], -v[2]]
}

/// Euclidean length of a 3D vector
///
/// The zero vector has norm 0. Non-finite components propagate NaN/Inf.
pub fn norm(v: &Vector3) -> f64 {
    dot_product(v, v).sqrt()
}

/// Scale a 3D vector to unit length
///
/// The input must have non-zero magnitude: a zero vector yields NaN
/// components (0/0) rather than an error.
pub fn unit_vector(v: &Vector3) -> Vector3 {
    let mag = norm(v);
    [v[0] / mag, v[1] / mag, v[2] / mag]
}

/// Angle between two vectors in radians, in [0, π]
///
/// The cosine is clamped to [-1, 1] before `acos`, so parallel and
/// antiparallel inputs give exactly 0 and π instead of NaN.
///
/// # Arguments
/// * `a` - First vector, non-zero
/// * `b` - Second vector, non-zero
pub fn angle_between_vectors_rad(a: &Vector3, b: &Vector3) -> f64 {
    let cos_angle = dot_product(&unit_vector(a), &unit_vector(b));
    cos_angle.clamp(-1.0, 1.0).acos()
}

/// Angle between two vectors in degrees, in [0, 180]
pub fn angle_between_vectors_deg(a: &Vector3, b: &Vector3) -> f64 {
    angle_between_vectors_rad(a, b).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_norm_of_zero_vector_is_zero() {
        assert_eq!(norm(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_norm_pythagorean() {
        assert_approx_eq!(norm(&[3.0, 4.0, 12.0]), 13.0);
    }

    #[test]
    fn test_unit_vector_has_unit_length() {
        let u = unit_vector(&[-42164.0, 1200.5, 7.25]);
        assert_approx_eq!(norm(&u), 1.0, 1e-12);
    }

    #[test]
    fn test_unit_vector_of_zero_is_nan() {
        let u = unit_vector(&[0.0, 0.0, 0.0]);
        assert!(u.iter().all(|c| c.is_nan()));
    }

    #[test]
    fn test_cross_product_right_handed() {
        assert_eq!(cross_product(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross_product(&[0.0, 1.0, 0.0], &[1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_angle_to_self_is_zero() {
        let a = [0.1, 0.2, 0.3];
        let angle = angle_between_vectors_rad(&a, &a);
        assert!(!angle.is_nan());
        assert_approx_eq!(angle, 0.0, 1e-7);
        let b = [1.496e8, 1.0, -3.0];
        assert_approx_eq!(angle_between_vectors_rad(&b, &b), 0.0, 1e-7);
    }

    #[test]
    fn test_angle_to_opposite_is_pi() {
        let a = [0.1, 0.2, 0.3];
        let angle = angle_between_vectors_rad(&a, &negate(&a));
        assert!(!angle.is_nan());
        assert_approx_eq!(angle, PI, 1e-7);
    }

    #[test]
    fn test_angle_orthogonal() {
        let x = [5.0, 0.0, 0.0];
        let y = [0.0, 2.0, 0.0];
        assert_approx_eq!(angle_between_vectors_rad(&x, &y), FRAC_PI_2);
        assert_approx_eq!(angle_between_vectors_deg(&x, &y), 90.0);
    }
}
