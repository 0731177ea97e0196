//! Earth shadow test for an orbiting body
//!
//! Implements the conical umbra/penumbra test of Vallado, *Fundamentals of
//! Astrodynamics and Applications*, Algorithm 34 (SHADOW), assuming a
//! spherical, opaque Earth and Sun. All vectors are Earth-centered, in km, in
//! the same inertial frame and at the same epoch.

use crate::error::{Result, ShadowError};
use crate::utils::config::{EARTH_RADIUS_KM, SUN_RADIUS_KM};
use crate::utils::vector_math::{angle_between_vectors_rad, dot_product, negate, norm, Vector3};

/// Umbra/penumbra membership of a body at one instant
///
/// The umbra lies inside the penumbral cone, so `in_umbra` implies `in_penumbra`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadowStatus {
    pub in_penumbra: bool,
    pub in_umbra: bool,
}

impl ShadowStatus {
    pub const SUNLIT: ShadowStatus = ShadowStatus {
        in_penumbra: false,
        in_umbra: false,
    };

    /// True when the body is in either shadow region
    pub fn is_eclipsed(&self) -> bool {
        self.in_penumbra || self.in_umbra
    }
}

impl From<ShadowStatus> for (bool, bool) {
    fn from(status: ShadowStatus) -> Self {
        (status.in_penumbra, status.in_umbra)
    }
}

impl From<(bool, bool)> for ShadowStatus {
    fn from((in_penumbra, in_umbra): (bool, bool)) -> Self {
        ShadowStatus {
            in_penumbra,
            in_umbra,
        }
    }
}

/// Half-angles (radians) of the umbral and penumbral cones for a given Earth-Sun distance
fn cone_half_angles(earth_sun_distance: f64) -> (f64, f64) {
    let umbra_angle = ((SUN_RADIUS_KM - EARTH_RADIUS_KM) / earth_sun_distance).atan();
    let penumbra_angle = ((SUN_RADIUS_KM + EARTH_RADIUS_KM) / earth_sun_distance).atan();
    (umbra_angle, penumbra_angle)
}

/// Determine whether a body is in Earth's penumbra and/or umbra
///
/// # Arguments
/// * `body_pos` - Earth-centered position of the body (km)
/// * `sun_pos` - Earth-centered position of the Sun (km)
///
/// # Returns
/// [`ShadowStatus`]; both flags are false when the body is on the sunlit side
/// of the plane through Earth's center perpendicular to the Sun direction.
///
/// Degenerate input is not rejected: a zero `sun_pos` or non-finite
/// components yield NaN intermediates and the comparisons fall through to
/// "sunlit". Use [`try_check_umbra_penumbra`] to reject such input instead.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn check_umbra_penumbra(body_pos: &Vector3, sun_pos: &Vector3) -> ShadowStatus {
    let earth_sun_distance = norm(sun_pos);
    let (umbra_angle, penumbra_angle) = cone_half_angles(earth_sun_distance);

    // NaN input fails every comparison below and ends up sunlit.
    if dot_product(body_pos, sun_pos) >= 0.0 {
        return ShadowStatus::SUNLIT;
    }

    let angle = angle_between_vectors_rad(&negate(sun_pos), body_pos);
    let body_dist = norm(body_pos);
    let horiz = body_dist * angle.cos();
    let vert = body_dist * angle.sin();

    // Penumbral cone apex lies between Earth and Sun; radius grows with horiz.
    let x = EARTH_RADIUS_KM / penumbra_angle.sin();
    let pen_vert = penumbra_angle.tan() * (x + horiz);
    if !(vert <= pen_vert) {
        return ShadowStatus::SUNLIT;
    }

    // Umbral cone apex lies behind Earth; radius shrinks with horiz and goes
    // negative past the apex.
    let y = EARTH_RADIUS_KM / umbra_angle.sin();
    let umb_vert = umbra_angle.tan() * (y - horiz);

    ShadowStatus {
        in_penumbra: true,
        in_umbra: vert <= umb_vert,
    }
}

/// Return true if the body is in Earth's umbra or penumbra
///
/// The Sun vector is negated before delegating to [`check_umbra_penumbra`],
/// so `sun_pos` here is the Sun-to-Earth vector (the Earth's position relative
/// to the Sun). Passing the Earth-to-Sun vector inverts the classification.
pub fn check_eclipse(body_pos: &Vector3, sun_pos: &Vector3) -> bool {
    check_umbra_penumbra(body_pos, &negate(sun_pos)).is_eclipsed()
}

fn validate_finite(name: &'static str, v: &Vector3) -> Result<()> {
    match v.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(ShadowError::NonFiniteComponent {
            name,
            index,
            value: v[index],
        }),
        None => Ok(()),
    }
}

fn validate_inputs(body_pos: &Vector3, sun_pos: &Vector3) -> Result<()> {
    validate_finite("body_pos", body_pos)
        .and_then(|_| validate_finite("sun_pos", sun_pos))
        .and_then(|_| {
            if norm(sun_pos) > 0.0 {
                Ok(())
            } else {
                Err(ShadowError::ZeroMagnitude { name: "sun_pos" })
            }
        })
        .inspect_err(|err| tracing::debug!(error = %err, "rejected shadow test input"))
}

/// [`check_umbra_penumbra`] that rejects non-finite components and a zero Sun vector
///
/// A zero body vector is accepted and classified as sunlit.
pub fn try_check_umbra_penumbra(body_pos: &Vector3, sun_pos: &Vector3) -> Result<ShadowStatus> {
    validate_inputs(body_pos, sun_pos)?;
    Ok(check_umbra_penumbra(body_pos, sun_pos))
}

/// [`check_eclipse`] with the same input validation as [`try_check_umbra_penumbra`]
pub fn try_check_eclipse(body_pos: &Vector3, sun_pos: &Vector3) -> Result<bool> {
    validate_inputs(body_pos, sun_pos)?;
    Ok(check_eclipse(body_pos, sun_pos))
}
