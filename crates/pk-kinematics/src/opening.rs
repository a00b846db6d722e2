//! Port opening fractions from piston and valve edge positions.
//!
//! Each port is a fixed axial slot in the cylinder wall. Exposure is a pure
//! 1-D interval overlap: a port inside the piston travel envelope is
//! uncovered by the piston body span, a port reaching above the envelope is
//! gated by the spool lands. Results are clamped to [0, 1]; the computation
//! is total for any real edge positions.

use crate::geometry::Geometry;
use crate::motion::{PistonState, ValveState};
use pk_core::units::{Ratio, unitless};

/// Fractional open area of the two ports, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningPair {
    pub port1: Ratio,
    pub port2: Ratio,
}

/// Linear overlap of two closed intervals, never negative.
pub fn overlap(a_lo: f64, a_hi: f64, b_lo: f64, b_hi: f64) -> f64 {
    (a_hi.min(b_hi) - a_lo.max(b_lo)).max(0.0)
}

/// Fraction of the port span `[pos, pos + len]` inside `[span_lo, span_hi]`.
pub fn exposed_fraction(pos: f64, len: f64, span_lo: f64, span_hi: f64) -> f64 {
    (overlap(pos, pos + len, span_lo, span_hi) / len).clamp(0.0, 1.0)
}

/// Opening degree of both ports for one instantaneous state.
pub fn openings(piston: &PistonState, valve: &ValveState, geometry: &Geometry) -> OpeningPair {
    OpeningPair {
        port1: unitless(port_opening(
            geometry.port1_pos.value,
            geometry.port1_len.value,
            piston,
            valve,
            geometry,
        )),
        port2: unitless(port_opening(
            geometry.port2_pos.value,
            geometry.port2_len.value,
            piston,
            valve,
            geometry,
        )),
    }
}

fn port_opening(
    pos: f64,
    len: f64,
    piston: &PistonState,
    valve: &ValveState,
    geometry: &Geometry,
) -> f64 {
    if pos + len > geometry.piston_envelope_top().value {
        spool_opening(pos, len, valve)
    } else {
        exposed_fraction(pos, len, piston.lower.value, piston.upper.value)
    }
}

/// Fraction of the port not covered by either spool land.
fn spool_opening(pos: f64, len: f64, valve: &ValveState) -> f64 {
    let covered = overlap(
        pos,
        pos + len,
        valve.lower_land.lower.value,
        valve.lower_land.upper.value,
    ) + overlap(
        pos,
        pos + len,
        valve.upper_land.lower.value,
        valve.upper_land.upper.value,
    );
    ((len - covered) / len).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Land;
    use pk_core::units::m;

    fn valve_at(lower: f64) -> ValveState {
        // Reference spool proportions: 0.0335 lands, 0.123 overall.
        ValveState {
            lower_land: Land {
                lower: m(lower),
                upper: m(lower + 0.0335),
            },
            upper_land: Land {
                lower: m(lower + 0.0895),
                upper: m(lower + 0.123),
            },
        }
    }

    #[test]
    fn port_inside_piston_span_is_fully_open() {
        assert!((exposed_fraction(0.085, 0.02, 0.08, 0.15) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn port_outside_piston_span_is_closed() {
        assert_eq!(exposed_fraction(0.085, 0.02, 0.2, 0.3), 0.0);
    }

    #[test]
    fn port_half_covered_is_half_open() {
        assert!((exposed_fraction(0.085, 0.02, 0.095, 0.165) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn overlap_is_never_negative() {
        assert_eq!(overlap(0.0, 1.0, 2.0, 3.0), 0.0);
        assert_eq!(overlap(2.0, 3.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn spool_land_covering_port_closes_it() {
        // Upper land spans [0.2395, 0.273]; the port sits inside it.
        let valve = valve_at(0.15);
        assert_eq!(spool_opening(0.243, 0.02, &valve), 0.0);
    }

    #[test]
    fn spool_clear_of_port_leaves_it_open() {
        let valve = valve_at(0.05901);
        assert!((spool_opening(0.243, 0.02, &valve) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn spool_partially_over_port() {
        // Upper land top edge at 0.253 covers the lower half of [0.243, 0.263].
        let valve = valve_at(0.13);
        assert!((spool_opening(0.243, 0.02, &valve) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn reference_ports_pick_their_controlling_body() {
        let geometry = crate::fixtures::geometry();
        let piston = PistonState {
            lower: m(0.09351),
            upper: m(0.18551),
        };
        // Valve parked clear of the upper port: port2 fully open, port1
        // answers to the piston alone.
        let valve = valve_at(0.05901);
        let pair = openings(&piston, &valve, &geometry);
        assert!((pair.port1.value - 0.5745).abs() < 1e-9);
        assert!((pair.port2.value - 1.0).abs() < 1e-12);
    }
}
