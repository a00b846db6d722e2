//! Closed-form motion laws for the piston and the spool valve.
//!
//! The piston lower edge follows a simple harmonic of the crank angle; the
//! valve is driven through a crank-slider with a finite connecting rod, which
//! skews its waveform relative to the piston. Both laws are periodic in time
//! with period `1/frequency` and evaluable at any real `t`.

use crate::error::KinResult;
use crate::geometry::{Geometry, OperatingCondition};
use pk_core::numeric::cycle_fraction;
use pk_core::units::{Angle, Length, Time, m};
use std::f64::consts::TAU;

/// Piston body edges at one instant; `upper - lower` is the body length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PistonState {
    pub lower: Length,
    pub upper: Length,
}

/// One solid land of the spool, bounded below and above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Land {
    pub lower: Length,
    pub upper: Length,
}

impl Land {
    /// Axial thickness of the land.
    pub fn thickness(&self) -> Length {
        self.upper - self.lower
    }
}

/// Spool valve edges at one instant: two lands around an open gap.
///
/// The whole spool translates rigidly, so the four edges stay ordered:
/// `lower_land.lower <= lower_land.upper <= upper_land.lower <= upper_land.upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValveState {
    pub lower_land: Land,
    pub upper_land: Land,
}

impl ValveState {
    /// Open gap between the two lands.
    pub fn gap(&self) -> (Length, Length) {
        (self.lower_land.upper, self.upper_land.lower)
    }

    /// The four edges in ascending order.
    pub fn edges(&self) -> [Length; 4] {
        [
            self.lower_land.lower,
            self.lower_land.upper,
            self.upper_land.lower,
            self.upper_land.upper,
        ]
    }
}

/// Slider displacement of a crank-slider drive, measured from bottom dead
/// center. `phi` in radians; `crank_r < rod_len`, both in meters.
pub fn slider_travel(phi: f64, crank_r: f64, rod_len: f64) -> f64 {
    let sin = phi.sin();
    let root = (rod_len * rod_len - crank_r * crank_r * sin * sin).sqrt();
    crank_r + rod_len - crank_r * phi.cos() - root
}

/// Derivative of [`slider_travel`] with respect to `phi`.
pub fn slider_travel_slope(phi: f64, crank_r: f64, rod_len: f64) -> f64 {
    let (sin, cos) = phi.sin_cos();
    let root = (rod_len * rod_len - crank_r * crank_r * sin * sin).sqrt();
    crank_r * sin + crank_r * crank_r * sin * cos / root
}

/// Evaluates piston and valve edge positions as functions of time.
#[derive(Debug, Clone)]
pub struct Mechanism {
    geometry: Geometry,
    condition: OperatingCondition,
    /// Phase lead of the valve drive over the piston crank.
    delta: Angle,
}

impl Mechanism {
    /// Build a mechanism, validating geometry and operating condition.
    pub fn new(
        geometry: Geometry,
        condition: OperatingCondition,
        delta: Angle,
    ) -> KinResult<Self> {
        geometry.validate()?;
        condition.validate(&geometry)?;
        Ok(Self {
            geometry,
            condition,
            delta,
        })
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn condition(&self) -> &OperatingCondition {
        &self.condition
    }

    /// Phase lead of the valve drive.
    pub fn phase(&self) -> Angle {
        self.delta
    }

    /// Crank angle at time `t` in radians, wrapped onto [0, 2*pi).
    pub fn crank_angle(&self, t: Time) -> f64 {
        let elapsed = t.value - self.condition.t0.value;
        TAU * cycle_fraction(elapsed * self.condition.frequency.value)
    }

    /// Piston and valve edges at time `t`.
    ///
    /// Periodic: the result depends only on `t` modulo one period.
    pub fn position(&self, t: Time) -> (PistonState, ValveState) {
        let theta = self.crank_angle(t);
        (self.piston_at(theta), self.valve_at(theta))
    }

    fn piston_at(&self, theta: f64) -> PistonState {
        let lower = self.condition.piston_start_pos.value
            + self.geometry.piston_amplitude().value * theta.sin();
        PistonState {
            lower: m(lower),
            upper: m(lower + self.geometry.piston_len.value),
        }
    }

    fn valve_at(&self, theta: f64) -> ValveState {
        let phi = theta + self.delta.value;
        let lower = self.geometry.valve_ref_pos.value
            + slider_travel(
                phi,
                self.geometry.valve_crank_radius().value,
                self.geometry.valve_rod_len().value,
            );
        let land = self.geometry.land_len.value;
        let spool = self.geometry.spool_len.value;
        ValveState {
            lower_land: Land {
                lower: m(lower),
                upper: m(lower + land),
            },
            upper_land: Land {
                lower: m(lower + spool - land),
                upper: m(lower + spool),
            },
        }
    }
}
