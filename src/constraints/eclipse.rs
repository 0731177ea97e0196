//! Eclipse constraint implementation
use super::{ConstraintConfig, ConstraintEvaluator};
use crate::eclipse::check_umbra_penumbra;
use crate::utils::vector_math::Vector3;
use serde::{Deserialize, Serialize};

/// Configuration for eclipse constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EclipseConfig {
    /// Umbra only (true) or include penumbra (false)
    #[serde(default)]
    pub umbra_only: bool,
}

impl EclipseConfig {
    pub fn new(umbra_only: bool) -> Self {
        Self { umbra_only }
    }

    /// Parse a configuration such as `{"umbra_only": true}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Concrete evaluator, for callers that don't need a trait object
    pub fn evaluator(&self) -> EclipseEvaluator {
        EclipseEvaluator {
            umbra_only: self.umbra_only,
        }
    }
}

impl ConstraintConfig for EclipseConfig {
    fn to_evaluator(&self) -> Box<dyn ConstraintEvaluator> {
        Box::new(self.evaluator())
    }

    fn name(&self) -> String {
        self.evaluator().name()
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Evaluator for eclipse constraint
#[derive(Debug, Clone, Copy)]
pub struct EclipseEvaluator {
    umbra_only: bool,
}

impl EclipseEvaluator {
    /// True if the body is shadowed, counting the penumbra unless `umbra_only`
    ///
    /// `sun_pos` is the Earth-to-Sun vector.
    pub fn in_shadow(&self, body_pos: &Vector3, sun_pos: &Vector3) -> bool {
        let status = check_umbra_penumbra(body_pos, sun_pos);
        let in_shadow = if self.umbra_only {
            status.in_umbra
        } else {
            status.is_eclipsed()
        };
        tracing::trace!(
            in_penumbra = status.in_penumbra,
            in_umbra = status.in_umbra,
            umbra_only = self.umbra_only,
            in_shadow,
            "evaluated eclipse constraint"
        );
        in_shadow
    }
}

impl ConstraintEvaluator for EclipseEvaluator {
    fn is_violated(&self, body_pos: &Vector3, sun_pos: &Vector3) -> bool {
        self.in_shadow(body_pos, sun_pos)
    }

    fn name(&self) -> String {
        format!(
            "Eclipse({})",
            if self.umbra_only {
                "umbra"
            } else {
                "umbra+penumbra"
            }
        )
    }
}
