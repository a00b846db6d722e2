//! Scalar Newton solver with a bounded iteration budget.

use crate::error::{SolverError, SolverResult};

/// Newton solver configuration.
#[derive(Clone, Debug)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance for the residual
    pub abs_tol: f64,
    /// Relative tolerance against the initial residual
    pub rel_tol: f64,
    /// Smallest derivative magnitude treated as usable
    pub min_slope: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            abs_tol: 1e-10,
            rel_tol: 1e-9,
            min_slope: 1e-14,
        }
    }
}

/// Newton iteration result.
#[derive(Clone, Debug)]
pub struct NewtonResult {
    /// Converged root
    pub x: f64,
    /// Final residual magnitude
    pub residual: f64,
    /// Number of iterations
    pub iterations: usize,
}

/// Scalar Newton iteration for f(x) = 0.
///
/// Fails with `ConvergenceFailed` when the iteration budget is exhausted and
/// with `Numeric` when the residual turns non-finite or the derivative
/// vanishes; a root is never silently approximated.
pub fn newton_solve<F, D>(
    x0: f64,
    residual_fn: F,
    slope_fn: D,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = x0;
    let mut r = residual_fn(x);
    if !r.is_finite() {
        return Err(SolverError::Numeric {
            what: format!("residual not finite at x0 = {x0}"),
        });
    }
    let r0 = r.abs();

    for iter in 0..config.max_iterations {
        if r.abs() < config.abs_tol || r.abs() < config.rel_tol * r0 {
            tracing::debug!(iterations = iter, residual = r, "newton converged");
            return Ok(NewtonResult {
                x,
                residual: r.abs(),
                iterations: iter,
            });
        }

        let slope = slope_fn(x);
        if !slope.is_finite() || slope.abs() < config.min_slope {
            return Err(SolverError::Numeric {
                what: format!("derivative vanished at x = {x}"),
            });
        }

        x -= r / slope;
        r = residual_fn(x);
        if !r.is_finite() {
            return Err(SolverError::Numeric {
                what: format!("residual not finite at x = {x}"),
            });
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "maximum iterations {} reached, residual = {}",
            config.max_iterations, r
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0 from x0 = 3
        let result = newton_solve(
            3.0,
            |x| x * x - 4.0,
            |x| 2.0 * x,
            &NewtonConfig::default(),
        )
        .unwrap();

        assert!((result.x - 2.0).abs() < 1e-9);
        assert!(result.iterations < 10);
    }

    #[test]
    fn exhausted_budget_is_an_error() {
        let config = NewtonConfig {
            max_iterations: 2,
            ..NewtonConfig::default()
        };
        // A far-off start needs more than two iterations.
        let err = newton_solve(100.0, |x| x * x * x - 2.0, |x| 3.0 * x * x, &config).unwrap_err();
        assert!(matches!(err, SolverError::ConvergenceFailed { .. }));
    }

    #[test]
    fn vanishing_derivative_is_an_error() {
        let err = newton_solve(0.0, |x| x * x + 1.0, |x| 2.0 * x, &NewtonConfig::default())
            .unwrap_err();
        assert!(matches!(err, SolverError::Numeric { .. }));
    }

    #[test]
    fn already_converged_start_returns_immediately() {
        let result = newton_solve(
            2.0,
            |x| x * x - 4.0,
            |x| 2.0 * x,
            &NewtonConfig::default(),
        )
        .unwrap();
        assert_eq!(result.iterations, 0);
    }
}
