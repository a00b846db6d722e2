// pk-core/src/units.rs

use uom::si::f64::{
    Angle as UomAngle, Frequency as UomFrequency, Length as UomLength, Ratio as UomRatio,
    Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Angle = UomAngle;
pub type Frequency = UomFrequency;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type Time = UomTime;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _x = m(0.09351);
        let _t = s(0.02);
        let _f = hz(50.0);
        let _a = rad(1.0);
        let _r = unitless(0.5);
    }

    #[test]
    fn degrees_are_radians_underneath() {
        let half_turn = deg(180.0);
        assert!((half_turn.value - std::f64::consts::PI).abs() < 1e-12);
    }
}
