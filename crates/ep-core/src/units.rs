// ep-core/src/units.rs

use uom::si::f64::{Frequency as UomFrequency, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Frequency = UomFrequency;
pub type Time = UomTime;

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

/// Time in seconds as a plain float.
#[inline]
pub fn seconds(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

/// Period of one tick at the given rate.
#[inline]
pub fn period(rate: Frequency) -> Time {
    use uom::si::frequency::hertz;
    s(1.0 / rate.get::<hertz>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _dt = s(0.1);
        let _fps = hz(60.0);
    }

    #[test]
    fn seconds_round_trip() {
        assert!((seconds(s(20.0)) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn period_of_sixty_hz() {
        assert!((seconds(period(hz(60.0))) - 1.0 / 60.0).abs() < 1e-12);
    }
}
