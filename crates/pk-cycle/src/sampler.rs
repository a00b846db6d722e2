//! Uniform sampling of one mechanical cycle.

use crate::error::{CycleError, CycleResult};
use pk_core::units::{Angle, deg, s};
use pk_kinematics::{Mechanism, OpeningPair, PistonState, ValveState, openings};
use rayon::prelude::*;

/// One row of the cycle time series.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    /// Crank angle from the time origin.
    pub angle: Angle,
    pub piston: PistonState,
    pub valve: ValveState,
    pub openings: OpeningPair,
}

/// Sweeps piston, valve and port openings over exactly one period.
///
/// The grid covers `[t0, t0 + 1/frequency)` with `n_samples` equally spaced
/// points, in increasing crank-angle order. Samples are independent pure
/// evaluations, so iteration can be restarted any number of times and the
/// grid can be evaluated in parallel.
#[derive(Debug, Clone)]
pub struct CycleSampler {
    mechanism: Mechanism,
    n_samples: usize,
}

impl CycleSampler {
    pub fn new(mechanism: Mechanism, n_samples: usize) -> CycleResult<Self> {
        if n_samples == 0 {
            return Err(CycleError::InvalidArg {
                what: "n_samples must be positive",
            });
        }
        tracing::debug!(n_samples, "cycle sampler ready");
        Ok(Self {
            mechanism,
            n_samples,
        })
    }

    pub fn mechanism(&self) -> &Mechanism {
        &self.mechanism
    }

    /// Number of samples in one sweep.
    pub fn len(&self) -> usize {
        self.n_samples
    }

    pub fn is_empty(&self) -> bool {
        self.n_samples == 0
    }

    fn sample_at(&self, index: usize) -> Sample {
        let condition = self.mechanism.condition();
        let period = condition.period().value;
        let fraction = index as f64 / self.n_samples as f64;
        let t = s(condition.t0.value + period * fraction);
        let (piston, valve) = self.mechanism.position(t);
        Sample {
            angle: deg(360.0 * fraction),
            piston,
            valve,
            openings: openings(&piston, &valve, self.mechanism.geometry()),
        }
    }

    /// Iterate the sweep in increasing crank-angle order.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.n_samples).map(|index| self.sample_at(index))
    }

    /// Evaluate the whole sweep in parallel, preserving angle order.
    pub fn collect_par(&self) -> Vec<Sample> {
        (0..self.n_samples)
            .into_par_iter()
            .map(|index| self.sample_at(index))
            .collect()
    }
}
