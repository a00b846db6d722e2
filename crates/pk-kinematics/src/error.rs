//! Error types for geometry validation and kinematic evaluation.

use pk_core::error::PkError;
use thiserror::Error;

/// Errors raised while validating configuration or building a mechanism.
#[derive(Error, Debug, Clone)]
pub enum KinError {
    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    #[error("Invalid operating condition: {what}")]
    InvalidCondition { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type KinResult<T> = Result<T, KinError>;

impl From<KinError> for PkError {
    fn from(e: KinError) -> Self {
        match e {
            KinError::InvalidGeometry { what } => PkError::InvalidArg { what },
            KinError::InvalidCondition { what } => PkError::InvalidArg { what },
            KinError::NonPhysical { what } => PkError::Invariant { what },
        }
    }
}
