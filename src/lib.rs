//! Earth shadow (umbra/penumbra) determination for orbiting bodies
//!
//! Given Earth-centered inertial positions of a body and of the Sun (km),
//! decide whether the body lies in Earth's umbra or penumbra using a
//! spherical Earth and Sun.
//!
//! ```
//! use earth_shadow::{check_umbra_penumbra, utils::config::AU_TO_KM};
//!
//! let status = check_umbra_penumbra(&[-42164.0, 0.0, 0.0], &[AU_TO_KM, 0.0, 0.0]);
//! assert!(status.in_umbra && status.in_penumbra);
//! ```

// Module declarations
pub mod constraints;
pub mod eclipse;
pub mod error;
pub mod utils;

#[cfg(feature = "python")]
mod python;

// Re-export public API
pub use constraints::{ConstraintConfig, ConstraintEvaluator, EclipseConfig, EclipseEvaluator};
pub use eclipse::{
    check_eclipse, check_umbra_penumbra, try_check_eclipse, try_check_umbra_penumbra,
    ShadowStatus,
};
pub use error::{Result, ShadowError};
pub use utils::vector_math::Vector3;
