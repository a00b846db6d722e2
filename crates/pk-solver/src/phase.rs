//! Phase solve for the valve drive.
//!
//! The observed valve position at the time origin over-determines the drive
//! geometry unless the valve crank is allowed a phase lead over the piston
//! crank. `solve_phase` finds that lead by driving the valve travel law to
//! the observed position with a bounded Newton iteration.

use crate::error::{SolverError, SolverResult};
use crate::newton::{NewtonConfig, newton_solve};
use pk_core::units::{Angle, rad};
use pk_kinematics::{Geometry, OperatingCondition, slider_travel, slider_travel_slope};
use std::f64::consts::PI;

/// Converged phase solution.
#[derive(Clone, Debug)]
pub struct PhaseSolution {
    /// Phase lead of the valve drive over the piston crank.
    pub delta: Angle,
    /// Travel mismatch left at the root, meters.
    pub residual: f64,
    /// Newton iterations spent.
    pub iterations: usize,
}

/// Solve for the phase lead that makes the valve motion law reproduce the
/// observed valve position at `t0`.
///
/// The travel law is strictly increasing on (0, pi), so the root on that
/// branch is unique; the iteration is seeded with the nominal design phase
/// from the operating condition. Non-convergence and roots that leave the
/// monotone branch are reported as errors, never substituted with a default.
pub fn solve_phase(
    geometry: &Geometry,
    condition: &OperatingCondition,
    config: &NewtonConfig,
) -> SolverResult<PhaseSolution> {
    geometry.validate()?;
    condition.validate(geometry)?;

    let crank_r = geometry.valve_crank_radius().value;
    let rod_len = geometry.valve_rod_len().value;
    let target = condition.valve_start_pos.value - geometry.valve_ref_pos.value;

    let guess = condition.design_phase.value;
    if !(0.0..PI).contains(&guess) {
        return Err(SolverError::ProblemSetup {
            what: format!("design_phase guess {guess} rad must lie in (0, pi)"),
        });
    }

    let result = newton_solve(
        guess,
        |delta| slider_travel(delta, crank_r, rod_len) - target,
        |delta| slider_travel_slope(delta, crank_r, rod_len),
        config,
    )?;

    if !(0.0..=PI).contains(&result.x) {
        return Err(SolverError::ConvergenceFailed {
            what: format!("phase {} rad left the monotone branch (0, pi)", result.x),
        });
    }

    tracing::debug!(
        delta_rad = result.x,
        iterations = result.iterations,
        "phase solve converged"
    );

    Ok(PhaseSolution {
        delta: rad(result.x),
        residual: result.residual,
        iterations: result.iterations,
    })
}
