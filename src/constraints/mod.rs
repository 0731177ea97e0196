//! Shadow constraint configuration and evaluation
//!
//! A constraint is described by a serializable configuration and evaluated
//! for one instant from Earth-centered body and Sun positions.

pub mod eclipse;

use crate::utils::vector_math::Vector3;
use std::fmt;

pub use eclipse::{EclipseConfig, EclipseEvaluator};

/// Configuration for a constraint
///
/// Configurations are serializable and build an evaluator on demand.
pub trait ConstraintConfig: fmt::Debug + Send + Sync {
    /// Create a constraint evaluator from this configuration
    fn to_evaluator(&self) -> Box<dyn ConstraintEvaluator>;

    /// Get a human-readable name for this constraint
    fn name(&self) -> String;

    /// Serialize to JSON
    fn to_json(&self) -> String;
}

/// Trait for evaluating constraints
pub trait ConstraintEvaluator: Send + Sync {
    /// Return true if the constraint is violated at this instant
    ///
    /// # Arguments
    /// * `body_pos` - Earth-centered body position (km)
    /// * `sun_pos` - Earth-centered Sun position (km)
    fn is_violated(&self, body_pos: &Vector3, sun_pos: &Vector3) -> bool;

    /// Get constraint name
    fn name(&self) -> String;
}
