//! Integration test: the reference machine sweeps its housing exactly.
//!
//! Both moving bodies must reproduce the surveyed turning points: the piston
//! body spans its full envelope at the stroke ends, and the spool's outer
//! edges touch the valve envelope at the drive's dead centers.

use pk_core::units::{deg, hz, m, s};
use pk_kinematics::{Geometry, Mechanism, OperatingCondition};
use std::f64::consts::{PI, TAU};

fn reference_geometry() -> Geometry {
    Geometry {
        piston_ref_pos: m(0.09351),
        valve_ref_pos: m(0.05901),
        port1_pos: m(0.085),
        port2_pos: m(0.243),
        piston_envelope: m(0.162),
        valve_envelope: m(0.23),
        piston_len: m(0.092),
        land_len: m(0.0335),
        spool_len: m(0.123),
        port1_len: m(0.02),
        port2_len: m(0.02),
        piston_diameter: m(0.205),
        valve_outer_diameter: m(0.08),
        valve_inner_diameter: m(0.057),
    }
}

fn reference_condition() -> OperatingCondition {
    OperatingCondition {
        frequency: hz(50.0),
        t0: s(0.0),
        piston_start_pos: m(0.12851),
        valve_start_pos: m(0.0954),
        design_phase: deg(55.0),
    }
}

#[test]
fn piston_turning_points_touch_the_envelope() {
    let mech = Mechanism::new(reference_geometry(), reference_condition(), deg(55.0)).unwrap();
    let period = mech.condition().period().value;

    // Crank angle 3*pi/2: piston at bottom dead center.
    let (piston, _) = mech.position(s(0.75 * period));
    assert!((piston.lower.value - 0.09351).abs() < 1e-9);

    // Crank angle pi/2: piston at top dead center.
    let (piston, _) = mech.position(s(0.25 * period));
    assert!((piston.upper.value - 0.25551).abs() < 1e-9);
}

#[test]
fn valve_turning_points_touch_the_envelope() {
    let delta = deg(55.0);
    let mech = Mechanism::new(reference_geometry(), reference_condition(), delta).unwrap();
    let period = mech.condition().period().value;
    let omega = TAU / period;

    // Valve bottom dead center: theta + delta = 2*pi.
    let t_bdc = (TAU - delta.value) / omega;
    let (_, valve) = mech.position(s(t_bdc));
    assert!((valve.lower_land.lower.value - 0.05901).abs() < 1e-9);

    // Valve top dead center: theta + delta = pi.
    let t_tdc = (PI - delta.value) / omega;
    let (_, valve) = mech.position(s(t_tdc));
    assert!((valve.upper_land.upper.value - 0.28901).abs() < 1e-9);
}

#[test]
fn motion_is_periodic_across_many_cycles() {
    let mech = Mechanism::new(reference_geometry(), reference_condition(), deg(55.0)).unwrap();
    let period = mech.condition().period().value;
    let (p_a, v_a) = mech.position(s(0.0137));
    let (p_b, v_b) = mech.position(s(0.0137 + 250.0 * period));
    assert!((p_a.lower.value - p_b.lower.value).abs() < 1e-9);
    assert!((v_a.upper_land.upper.value - v_b.upper_land.upper.value).abs() < 1e-9);
}
