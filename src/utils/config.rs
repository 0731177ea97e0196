//! Physical constants used by the shadow model
//!
//! All lengths are in kilometres.

/// Earth equatorial radius (WGS-84)
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Nominal solar radius (IAU 2015 Resolution B3)
pub const SUN_RADIUS_KM: f64 = 695_700.0;

/// Astronomical unit in kilometres
pub const AU_TO_KM: f64 = 149_597_870.7;
