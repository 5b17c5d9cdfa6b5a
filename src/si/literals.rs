//! Literal-style construction of SI quantities
//!
//! Rust has no user-defined literal suffixes; `3.0_f64.m()` reads closest.

use super::{
    Acceleration, Area, Celsius, Energy, Force, Hertz, Length, Mass, Radian, Speed, Steradian,
    Time, Volt,
};
use crate::Tagged;

/// Extension methods tagging an `f64` with an SI unit
///
/// ```rust
/// use tagged_units::si::{SiLiteral, Speed};
///
/// let v: Speed = 100.0_f64.m() / 20.0_f64.s();
/// assert_eq!(v, 5.0_f64.mps());
/// ```
pub trait SiLiteral {
    fn m(self) -> Length;
    fn kg(self) -> Mass;
    fn s(self) -> Time;
    fn m2(self) -> Area;
    fn mps(self) -> Speed;
    fn mps2(self) -> Acceleration;
    fn n(self) -> Force;
    fn j(self) -> Energy;
    fn hz(self) -> Hertz;
    fn deg_c(self) -> Celsius;
    fn v(self) -> Volt;
    fn rad(self) -> Radian;
    fn sr(self) -> Steradian;
}

impl SiLiteral for f64 {
    fn m(self) -> Length {
        Tagged::new(self)
    }

    fn kg(self) -> Mass {
        Tagged::new(self)
    }

    fn s(self) -> Time {
        Tagged::new(self)
    }

    fn m2(self) -> Area {
        Tagged::new(self)
    }

    fn mps(self) -> Speed {
        Tagged::new(self)
    }

    fn mps2(self) -> Acceleration {
        Tagged::new(self)
    }

    fn n(self) -> Force {
        Tagged::new(self)
    }

    fn j(self) -> Energy {
        Tagged::new(self)
    }

    fn hz(self) -> Hertz {
        Tagged::new(self)
    }

    fn deg_c(self) -> Celsius {
        Tagged::new(self)
    }

    fn v(self) -> Volt {
        Tagged::new(self)
    }

    fn rad(self) -> Radian {
        Tagged::new(self)
    }

    fn sr(self) -> Steradian {
        Tagged::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_chain() {
        let f: Force = 2.0_f64.kg() * 10.0_f64.mps2();
        let e: Energy = f * 3.0_f64.m();
        assert_eq!(e, 60.0_f64.j());
        assert_eq!(1.0_f64 / 0.5_f64.s(), 2.0_f64.hz());
    }

    #[test]
    fn test_temperature_differences_add() {
        let t = 20.5_f64.deg_c() + 1.5_f64.deg_c();
        assert_eq!(t.to_string(), "22 °C");
    }
}
