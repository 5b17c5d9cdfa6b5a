//! Scalar operands of mixed primitive type
//!
//! A bare scalar multiplying or dividing a tagged value may be any primitive
//! number. It is converted to the payload's lane type with an `as` cast
//! before the payload operator runs, so `Length::new(4.0) * 2` and
//! `2.5_f32 * length` both compute in `f64`. Construction stays exact: only
//! operands are converted, never payloads.
//!
//! Conversions follow `as` semantics: float to integer truncates and
//! saturates, wide integers round to the nearest float.

use crate::aligned::{AlignedVector, Lane};

/// Conversion from the primitive scalar `S` into `Self`
pub trait FromScalar<S>: Sized {
    fn from_scalar(scalar: S) -> Self;
}

/// Payload that can be scaled by a single lane value
///
/// Primitives scale by themselves, aligned vectors by their element type.
/// A user payload opts in by naming its lane and implementing
/// `Mul<Lane>` / `Div<Lane>`:
///
/// ```rust
/// use std::ops::Mul;
/// use tagged_units::Scalable;
///
/// #[derive(Clone, Copy)]
/// struct Pair(f64, f64);
///
/// impl Scalable for Pair {
///     type Lane = f64;
/// }
///
/// impl Mul<f64> for Pair {
///     type Output = Pair;
///     fn mul(self, s: f64) -> Pair {
///         Pair(self.0 * s, self.1 * s)
///     }
/// }
/// ```
pub trait Scalable {
    /// Element type a scalar operand is converted to
    type Lane: Lane;
}

macro_rules! from_scalar {
    (@row $t:ty, [$($s:ty),*]) => {$(
        impl FromScalar<$s> for $t {
            #[inline]
            fn from_scalar(scalar: $s) -> $t {
                scalar as $t
            }
        }
    )*};
    (@each $all:tt $($t:ty),*) => {$(
        from_scalar!(@row $t, $all);

        impl Scalable for $t {
            type Lane = $t;
        }
    )*};
    ($($t:ty),*) => {
        from_scalar!(@each [$($t),*] $($t),*);
    };
}

from_scalar!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Lane, const N: usize> Scalable for AlignedVector<T, N> {
    type Lane = T;
}

/// A scalar becomes a vector by broadcasting, as in `1.0 / v`
impl<S, T: Lane + FromScalar<S>, const N: usize> FromScalar<S> for AlignedVector<T, N> {
    #[inline]
    fn from_scalar(scalar: S) -> Self {
        Self::splat(T::from_scalar(scalar))
    }
}
