//! Error type for validated shadow evaluation

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShadowError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShadowError {
    #[error("{name}[{index}] is not finite ({value})")]
    NonFiniteComponent {
        name: &'static str,
        index: usize,
        value: f64,
    },
    #[error("{name} has zero magnitude")]
    ZeroMagnitude { name: &'static str },
}

#[cfg(feature = "python")]
impl From<ShadowError> for pyo3::PyErr {
    fn from(err: ShadowError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
