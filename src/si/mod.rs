//! SI tag catalog
//!
//! A ready-made set of tags and relations, registered through the same public
//! macros a downstream crate would use. Aliases fix the payload to `f64`:
//!
//! ```rust
//! use tagged_units::si::{self, Energy, Force, Length};
//!
//! let work: Energy = Force::new(10.0) * si::meters(3.0);
//! assert_eq!(work, Energy::new(30.0));
//! assert_eq!(work.to_string(), "30 J");
//! ```
//!
//! For other payloads name the tag directly: `Tagged<f32, si::tags::Length>`.

pub mod literals;
mod relations;
pub mod tags;

pub use literals::SiLiteral;

use crate::Tagged;

pub type Length = Tagged<f64, tags::Length>;
pub type Mass = Tagged<f64, tags::Mass>;
pub type Time = Tagged<f64, tags::Time>;
pub type Area = Tagged<f64, tags::Area>;
pub type Speed = Tagged<f64, tags::Speed>;
pub type Acceleration = Tagged<f64, tags::Acceleration>;
pub type Force = Tagged<f64, tags::Force>;
pub type Energy = Tagged<f64, tags::Energy>;
pub type Hertz = Tagged<f64, tags::Hertz>;
pub type Celsius = Tagged<f64, tags::Celsius>;
pub type Volt = Tagged<f64, tags::Volt>;
pub type Radian = Tagged<f64, tags::Radian>;
pub type Steradian = Tagged<f64, tags::Steradian>;

macro_rules! constructors {
    ($($(#[$meta:meta])* $name:ident -> $alias:ident;)*) => {$(
        $(#[$meta])*
        #[inline]
        pub const fn $name(value: f64) -> $alias {
            Tagged::new(value)
        }
    )*};
}

constructors! {
    /// Length in meters
    meters -> Length;
    /// Mass in kilograms
    kilograms -> Mass;
    /// Time in seconds
    seconds -> Time;
    square_meters -> Area;
    meters_per_second -> Speed;
    meters_per_second_squared -> Acceleration;
    newtons -> Force;
    joules -> Energy;
    hertz -> Hertz;
    /// Temperature difference in degrees Celsius
    celsius -> Celsius;
    volts -> Volt;
    radians -> Radian;
    steradians -> Steradian;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimensionless;

    const STRIDE: Length = meters(0.75);

    #[test]
    fn test_kinematics() {
        let v: Speed = meters(100.0) / seconds(20.0);
        assert_eq!(v, meters_per_second(5.0));

        let d: Length = v * seconds(10.0);
        assert_eq!(d, meters(50.0));

        let a: Acceleration = v / seconds(2.5);
        assert_eq!(a.get(), 2.0);
    }

    #[test]
    fn test_dynamics() {
        let f: Force = kilograms(2.0) * meters_per_second_squared(10.0);
        assert_eq!(f, newtons(20.0));

        let e: Energy = f * meters(1.5);
        assert_eq!(e, joules(30.0));
        assert_eq!(e / f, meters(1.5));
    }

    #[test]
    fn test_frequency() {
        let f: Hertz = 1.0 / seconds(0.5);
        assert_eq!(f, hertz(2.0));

        let cycles: Dimensionless<f64> = f * seconds(3.0);
        assert_eq!(cycles.get(), 6.0);
        assert_eq!(cycles.to_string(), "6");

        let period: Time = 1.0 / hertz(4.0);
        assert_eq!(period, seconds(0.25));
    }

    #[test]
    fn test_area_roundtrip() {
        let a: Area = meters(4.0) * meters(2.5);
        assert_eq!(a, square_meters(10.0));
        assert_eq!(a / meters(4.0), meters(2.5));
    }

    #[test]
    fn test_mixed_scalar_operands() {
        let d = meters(4.0);
        assert_eq!(d * 2, meters(8.0));
        assert_eq!(d / 2_u32, meters(2.0));

        let left: Length = 2.5_f32 * d;
        assert_eq!(left, meters(10.0));

        let mut t = seconds(9.0);
        t /= 3;
        t *= 2_i64;
        assert_eq!(t, seconds(6.0));
    }

    #[test]
    fn test_const_stride() {
        assert_eq!((STRIDE * 4.0_f64).get(), 3.0);
        assert_eq!(STRIDE.to_string(), "0.75 m");
    }
}
