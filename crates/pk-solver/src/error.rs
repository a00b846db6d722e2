//! Error types for the phase solve.

use pk_core::error::PkError;
use pk_kinematics::KinError;
use thiserror::Error;

/// Errors that can occur while solving for the valve phase.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Kinematics error: {0}")]
    Kinematics(#[from] KinError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for PkError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ProblemSetup { what: _ } => PkError::InvalidArg {
                what: "problem setup",
            },
            SolverError::ConvergenceFailed { what: _ } => PkError::InvalidArg {
                what: "convergence",
            },
            SolverError::Numeric { what: _ } => PkError::InvalidArg { what: "numeric" },
            SolverError::Kinematics(_) => PkError::InvalidArg { what: "kinematics" },
        }
    }
}
