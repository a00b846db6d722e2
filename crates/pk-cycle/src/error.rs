//! Error types for cycle sampling.

use pk_core::error::PkError;
use pk_kinematics::KinError;
use thiserror::Error;

/// Errors encountered while setting up a cycle sweep.
#[derive(Error, Debug)]
pub enum CycleError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Kinematics error: {0}")]
    Kinematics(#[from] KinError),
}

pub type CycleResult<T> = Result<T, CycleError>;

impl From<CycleError> for PkError {
    fn from(e: CycleError) -> Self {
        match e {
            CycleError::InvalidArg { what } => PkError::InvalidArg { what },
            CycleError::Kinematics(k) => k.into(),
        }
    }
}
