//! Property tests for the vector helpers and the shadow test
use earth_shadow::utils::config::AU_TO_KM;
use earth_shadow::utils::vector_math::{
    angle_between_vectors_rad, dot_product, negate, norm, unit_vector, Vector3,
};
use earth_shadow::{check_eclipse, check_umbra_penumbra, ShadowStatus};
use proptest::prelude::*;
use std::f64::consts::PI;

fn any_vector(bound: f64) -> impl Strategy<Value = Vector3> {
    [-bound..bound, -bound..bound, -bound..bound]
}

fn nonzero_vector(bound: f64) -> impl Strategy<Value = Vector3> {
    any_vector(bound).prop_filter("non-zero magnitude", move |v| norm(v) > bound * 1e-3)
}

/// Sun position between 0.98 and 1.02 AU in an arbitrary direction
fn sun_position() -> impl Strategy<Value = Vector3> {
    (nonzero_vector(1.0), 0.98..1.02f64)
        .prop_map(|(dir, au)| unit_vector(&dir).map(|c| c * au * AU_TO_KM))
}

/// Body positions from LEO out past the umbral cone apex
fn body_position() -> impl Strategy<Value = Vector3> {
    nonzero_vector(2.0e6)
}

proptest! {
    #[test]
    fn unit_vector_has_unit_norm(v in nonzero_vector(1.0e9)) {
        prop_assert!((norm(&unit_vector(&v)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn angle_is_within_range(a in nonzero_vector(1.0e8), b in nonzero_vector(1.0e8)) {
        let angle = angle_between_vectors_rad(&a, &b);
        prop_assert!((0.0..=PI).contains(&angle), "angle = {}", angle);
    }

    #[test]
    fn angle_to_self_and_opposite(a in nonzero_vector(1.0e8)) {
        prop_assert!(angle_between_vectors_rad(&a, &a).abs() < 1e-6);
        prop_assert!((angle_between_vectors_rad(&a, &negate(&a)) - PI).abs() < 1e-6);
    }

    #[test]
    fn sunlit_half_space_is_never_shadowed(body in body_position(), sun in sun_position()) {
        prop_assume!(dot_product(&body, &sun) >= 0.0);
        prop_assert_eq!(check_umbra_penumbra(&body, &sun), ShadowStatus::SUNLIT);
    }

    #[test]
    fn umbra_is_inside_penumbra(body in body_position(), sun in sun_position()) {
        let status = check_umbra_penumbra(&body, &sun);
        prop_assert!(!status.in_umbra || status.in_penumbra, "{:?}", status);
    }

    #[test]
    fn check_eclipse_matches_negated_test(body in body_position(), sun in sun_position()) {
        let status = check_umbra_penumbra(&body, &negate(&sun));
        prop_assert_eq!(check_eclipse(&body, &sun), status.in_penumbra || status.in_umbra);
    }
}
