//! Fixed machine geometry and per-run operating conditions.
//!
//! All axial coordinates are measured from the machine datum, increasing
//! toward the valve end. `Geometry` describes the housing and the two moving
//! bodies; `OperatingCondition` describes one steady-state run. Both are
//! validated eagerly, before any motion is evaluated.

use crate::error::{KinError, KinResult};
use pk_core::numeric::Tolerances;
use pk_core::units::{Angle, Frequency, Length, Time, s};

/// Fixed lengths of the cylinder, piston, spool valve and ports.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Geometry {
    /// Bottom of the piston travel envelope.
    pub piston_ref_pos: Length,
    /// Bottom of the valve travel envelope.
    pub valve_ref_pos: Length,
    /// Lower edge of the lower port.
    pub port1_pos: Length,
    /// Lower edge of the upper port.
    pub port2_pos: Length,
    /// Height of the piston travel envelope.
    pub piston_envelope: Length,
    /// Height of the valve travel envelope.
    pub valve_envelope: Length,
    /// Axial length of the piston body.
    pub piston_len: Length,
    /// Thickness of each spool land; also the primary arm of the valve drive.
    pub land_len: Length,
    /// Overall spool length; also the secondary arm of the valve drive.
    pub spool_len: Length,
    /// Axial length of the lower port.
    pub port1_len: Length,
    /// Axial length of the upper port.
    pub port2_len: Length,
    /// Piston diameter.
    pub piston_diameter: Length,
    /// Valve bore diameter.
    pub valve_outer_diameter: Length,
    /// Spool stem diameter between the lands.
    pub valve_inner_diameter: Length,
}

impl Geometry {
    /// Harmonic amplitude of the piston lower edge.
    pub fn piston_amplitude(&self) -> Length {
        (self.piston_envelope - self.piston_len) * 0.5
    }

    /// Crank radius of the valve drive; the spool sweeps twice this.
    pub fn valve_crank_radius(&self) -> Length {
        (self.valve_envelope - self.spool_len) * 0.5
    }

    /// Effective connecting-rod length of the valve drive.
    pub fn valve_rod_len(&self) -> Length {
        self.spool_len - self.land_len
    }

    /// Top of the piston travel envelope.
    pub fn piston_envelope_top(&self) -> Length {
        self.piston_ref_pos + self.piston_envelope
    }

    /// Top of the valve travel envelope.
    pub fn valve_envelope_top(&self) -> Length {
        self.valve_ref_pos + self.valve_envelope
    }

    /// Check every geometric invariant, returning the first violation.
    pub fn validate(&self) -> KinResult<()> {
        let positive = [
            (self.piston_envelope, "piston_envelope must be positive"),
            (self.valve_envelope, "valve_envelope must be positive"),
            (self.piston_len, "piston_len must be positive"),
            (self.land_len, "land_len must be positive"),
            (self.spool_len, "spool_len must be positive"),
            (self.port1_len, "port1_len must be positive"),
            (self.port2_len, "port2_len must be positive"),
            (self.piston_diameter, "piston_diameter must be positive"),
            (
                self.valve_outer_diameter,
                "valve_outer_diameter must be positive",
            ),
            (
                self.valve_inner_diameter,
                "valve_inner_diameter must be positive",
            ),
        ];
        for (value, what) in positive {
            if !(value.value > 0.0) {
                return Err(KinError::InvalidGeometry { what });
            }
        }

        if self.piston_len.value >= self.piston_envelope.value {
            return Err(KinError::InvalidGeometry {
                what: "piston_len must be shorter than piston_envelope",
            });
        }
        if self.spool_len.value >= self.valve_envelope.value {
            return Err(KinError::InvalidGeometry {
                what: "spool_len must be shorter than valve_envelope",
            });
        }
        if 2.0 * self.land_len.value >= self.spool_len.value {
            return Err(KinError::InvalidGeometry {
                what: "lands must leave an open gap in the spool",
            });
        }
        if self.valve_rod_len().value <= self.valve_crank_radius().value {
            return Err(KinError::InvalidGeometry {
                what: "valve drive rod must be longer than its crank radius",
            });
        }
        if self.valve_inner_diameter.value >= self.valve_outer_diameter.value {
            return Err(KinError::InvalidGeometry {
                what: "valve_inner_diameter must be smaller than valve_outer_diameter",
            });
        }

        // A port no moving edge can ever reach is a configuration mistake;
        // a port that only partially overlaps a travel band is legal.
        let reach_lo = self.piston_ref_pos.value.min(self.valve_ref_pos.value);
        let reach_hi = self
            .piston_envelope_top()
            .value
            .max(self.valve_envelope_top().value);
        if self.port1_pos.value + self.port1_len.value <= reach_lo
            || self.port1_pos.value >= reach_hi
        {
            return Err(KinError::InvalidGeometry {
                what: "port1 lies outside both travel envelopes",
            });
        }
        if self.port2_pos.value + self.port2_len.value <= reach_lo
            || self.port2_pos.value >= reach_hi
        {
            return Err(KinError::InvalidGeometry {
                what: "port2 lies outside both travel envelopes",
            });
        }

        Ok(())
    }
}

/// One steady-state operating point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct OperatingCondition {
    /// Drive frequency.
    pub frequency: Frequency,
    /// Time at which the piston crosses mid-stroke moving upward.
    pub t0: Time,
    /// Piston lower-edge position at `t0`; center of the piston travel.
    pub piston_start_pos: Length,
    /// Measured valve lower-edge position at `t0`.
    pub valve_start_pos: Length,
    /// Nominal design phase lead of the valve drive; seeds the phase solve.
    pub design_phase: Angle,
}

impl OperatingCondition {
    /// Duration of one mechanical cycle.
    pub fn period(&self) -> Time {
        s(1.0 / self.frequency.value)
    }

    /// Check this operating point against a (valid) geometry.
    pub fn validate(&self, geometry: &Geometry) -> KinResult<()> {
        if !(self.frequency.value > 0.0) {
            return Err(KinError::InvalidCondition {
                what: "frequency must be positive",
            });
        }
        if !self.t0.value.is_finite() {
            return Err(KinError::InvalidCondition {
                what: "t0 must be finite",
            });
        }

        let tol = Tolerances::default();
        let amplitude = geometry.piston_amplitude().value;
        let travel_lo = self.piston_start_pos.value - amplitude;
        let travel_hi = self.piston_start_pos.value + amplitude + geometry.piston_len.value;
        if travel_lo < geometry.piston_ref_pos.value - tol.abs
            || travel_hi > geometry.piston_envelope_top().value + tol.abs
        {
            return Err(KinError::InvalidCondition {
                what: "piston travel leaves its envelope",
            });
        }

        let valve_travel = self.valve_start_pos.value - geometry.valve_ref_pos.value;
        if valve_travel <= 0.0 || valve_travel >= 2.0 * geometry.valve_crank_radius().value {
            return Err(KinError::InvalidCondition {
                what: "valve_start_pos is outside the valve stroke",
            });
        }

        Ok(())
    }
}
