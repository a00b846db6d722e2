//! Scalar phase solver for the valve drive linkage.
//!
//! The valve's observed position at the time origin over-determines its
//! crank-slider drive unless a phase lead over the piston crank is allowed.
//! This crate finds that lead with a bounded scalar Newton iteration: an
//! explicit iteration cap, explicit tolerances, and errors instead of
//! silently unconverged phases.

pub mod error;
pub mod newton;
pub mod phase;

pub use error::{SolverError, SolverResult};
pub use newton::{NewtonConfig, NewtonResult, newton_solve};
pub use phase::{PhaseSolution, solve_phase};
