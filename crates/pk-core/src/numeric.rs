use crate::PkError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PkError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PkError::NonFinite { what, value: v })
    }
}

/// Fractional part of a cycle count, wrapped onto [0, 1).
///
/// `cycles` may be any real value, including negative; the result is the
/// same point of the cycle. Rounding in `rem_euclid` can land exactly on
/// 1.0 for tiny negative inputs, hence the fold back to 0.
pub fn cycle_fraction(cycles: Real) -> Real {
    let frac = cycles.rem_euclid(1.0);
    if frac >= 1.0 { 0.0 } else { frac }
}
