//! Operator dispatch for tagged values
//!
//! Every binary operator asks the resolver for the result tag, applies the
//! payload operator to the unwrapped values and wraps the result through
//! [`Outcome`]. Nothing here branches on a tag at runtime; after
//! monomorphization a tagged `*` is the payload `*`.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::aligned::Lane;
use crate::relation::{
    Product, Quotient, Resolved, ScalarDivision, TagDifference, TagProduct, TagQuotient, TagSum,
};
use crate::scalar::{FromScalar, Scalable};
use crate::tag::{NoTag, Outcome};
use crate::tagged::Tagged;

// =============================================================================
// Same-Tag Arithmetic
// =============================================================================

/// Addition: same tag only, and only for tags with a sum relation
impl<T, G> Add for Tagged<T, G>
where
    G: TagSum,
    T: Add<Output = T>,
{
    type Output = Tagged<T, G>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Tagged::from_raw(self.into_inner() + rhs.into_inner())
    }
}

/// Subtraction: same tag only, and only for tags with a difference relation
impl<T, G> Sub for Tagged<T, G>
where
    G: TagDifference,
    T: Sub<Output = T>,
{
    type Output = Tagged<T, G>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Tagged::from_raw(self.into_inner() - rhs.into_inner())
    }
}

/// Negation keeps the tag
impl<T: Neg<Output = T>, G> Neg for Tagged<T, G> {
    type Output = Tagged<T, G>;

    #[inline]
    fn neg(self) -> Self::Output {
        Tagged::from_raw(-self.into_inner())
    }
}

impl<T, G> Sum for Tagged<T, G>
where
    G: TagSum,
    T: Add<Output = T> + Default,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Tagged::from_raw(T::default()), |acc, x| acc + x)
    }
}

// =============================================================================
// Tagged × Tagged through the relation tables
// =============================================================================

impl<T, L, R> Mul<Tagged<T, R>> for Tagged<T, L>
where
    L: TagProduct<R>,
    T: Mul<Output = T>,
{
    type Output = Resolved<Product<L, R>, T>;

    #[inline]
    fn mul(self, rhs: Tagged<T, R>) -> Self::Output {
        <Product<L, R> as Outcome>::wrap(self.into_inner() * rhs.into_inner())
    }
}

impl<T, L, R> Div<Tagged<T, R>> for Tagged<T, L>
where
    L: TagQuotient<R>,
    T: Div<Output = T>,
{
    type Output = Resolved<Quotient<L, R>, T>;

    #[inline]
    fn div(self, rhs: Tagged<T, R>) -> Self::Output {
        <Quotient<L, R> as Outcome>::wrap(self.into_inner() / rhs.into_inner())
    }
}

// =============================================================================
// Compound Assignment
// =============================================================================

// Each compound form exists only when the binary form maps the left operand's
// type back onto itself. `a /= b` with equal tags resolves to a raw payload,
// so it does not type-check.

impl<T, G, Rhs> AddAssign<Rhs> for Tagged<T, G>
where
    Tagged<T, G>: Add<Rhs, Output = Tagged<T, G>> + Copy,
{
    #[inline]
    fn add_assign(&mut self, rhs: Rhs) {
        *self = *self + rhs;
    }
}

impl<T, G, Rhs> SubAssign<Rhs> for Tagged<T, G>
where
    Tagged<T, G>: Sub<Rhs, Output = Tagged<T, G>> + Copy,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Rhs) {
        *self = *self - rhs;
    }
}

impl<T, G, Rhs> MulAssign<Rhs> for Tagged<T, G>
where
    Tagged<T, G>: Mul<Rhs, Output = Tagged<T, G>> + Copy,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Rhs) {
        *self = *self * rhs;
    }
}

impl<T, G, Rhs> DivAssign<Rhs> for Tagged<T, G>
where
    Tagged<T, G>: Div<Rhs, Output = Tagged<T, G>> + Copy,
{
    #[inline]
    fn div_assign(&mut self, rhs: Rhs) {
        *self = *self / rhs;
    }
}

// =============================================================================
// Scalar Operands
// =============================================================================

// A bare scalar takes the `NoTag` side of the tables: scaling goes through the
// built-in identity entries, `scalar / tagged` through the reciprocal table,
// and `tagged / scalar` through the per-payload `ScalarDivision` table. The
// scalar may be any primitive; it is cast to the payload's lane type first.

type LaneOf<T> = <T as Scalable>::Lane;

impl<T, G, S> Mul<S> for Tagged<T, G>
where
    S: Lane,
    G: TagProduct<NoTag>,
    T: Scalable + Mul<LaneOf<T>, Output = T>,
    LaneOf<T>: FromScalar<S>,
{
    type Output = Resolved<Product<G, NoTag>, T>;

    #[inline]
    fn mul(self, rhs: S) -> Self::Output {
        <Product<G, NoTag> as Outcome>::wrap(self.into_inner() * LaneOf::<T>::from_scalar(rhs))
    }
}

impl<T, G, S> Div<S> for Tagged<T, G>
where
    S: Lane,
    G: ScalarDivision<T, LaneOf<T>>,
    T: Scalable + Div<LaneOf<T>, Output = T>,
    LaneOf<T>: FromScalar<S>,
{
    type Output = Resolved<<G as ScalarDivision<T, LaneOf<T>>>::Output, T>;

    #[inline]
    fn div(self, rhs: S) -> Self::Output {
        let value = self.into_inner() / LaneOf::<T>::from_scalar(rhs);
        <<G as ScalarDivision<T, LaneOf<T>>>::Output as Outcome>::wrap(value)
    }
}

// A primitive on the left cannot be generic, so these are stamped out per type.
macro_rules! left_scalar_operands {
    ($($s:ty),* $(,)?) => {$(
        impl<T, G> Mul<Tagged<T, G>> for $s
        where
            NoTag: TagProduct<G>,
            T: Scalable + Mul<LaneOf<T>, Output = T>,
            LaneOf<T>: FromScalar<$s>,
        {
            type Output = Resolved<Product<NoTag, G>, T>;

            #[inline]
            fn mul(self, rhs: Tagged<T, G>) -> Self::Output {
                <Product<NoTag, G> as Outcome>::wrap(rhs.into_inner() * LaneOf::<T>::from_scalar(self))
            }
        }

        impl<T, G> Div<Tagged<T, G>> for $s
        where
            NoTag: TagQuotient<G>,
            T: FromScalar<$s> + Div<Output = T>,
        {
            type Output = Resolved<Quotient<NoTag, G>, T>;

            #[inline]
            fn div(self, rhs: Tagged<T, G>) -> Self::Output {
                <Quotient<NoTag, G> as Outcome>::wrap(T::from_scalar(self) / rhs.into_inner())
            }
        }
    )*};
}

left_scalar_operands!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use crate::tagged::{Dimensionless, Tagged};

    crate::tag! {
        Distance;
        Duration;
        Velocity;
        Rate;
        Weight;
    }

    crate::additive!(Distance, Duration, Velocity);
    crate::product!(Velocity * Duration => Distance, Duration * Velocity => Distance);
    crate::quotient!(Distance / Duration => Velocity);
    crate::reciprocal!(Duration => Rate);

    type D = Tagged<f32, Distance>;
    type T = Tagged<f32, Duration>;
    type V = Tagged<f32, Velocity>;

    #[test]
    fn test_same_tag_addition() {
        let sum = D::new(10.0) + D::new(5.0);
        let diff = D::new(10.0) - D::new(5.0);
        assert_eq!(sum.get(), 15.0);
        assert_eq!(diff.get(), 5.0);
    }

    #[test]
    fn test_negation() {
        assert_eq!((-D::new(3.0)).get(), -3.0);
    }

    #[test]
    fn test_resolved_product_and_quotient() {
        let v: V = D::new(100.0) / T::new(20.0);
        assert_eq!(v.get(), 5.0);

        let d: D = V::new(5.0) * T::new(10.0);
        let commuted: D = T::new(10.0) * V::new(5.0);
        assert_eq!(d, commuted);
        assert_eq!(d.get(), 50.0);
    }

    #[test]
    fn test_cancellation_yields_raw_payload() {
        let ratio: f32 = D::new(50.0) / D::new(100.0);
        assert_eq!(ratio, 0.5);
    }

    #[test]
    fn test_scalar_scaling_keeps_tag() {
        let d = D::new(10.0);
        let scaled: D = d * 2.0_f32;
        let left: D = 2.0_f32 * d;
        let half: D = d / 2.0_f32;
        assert_eq!(scaled.get(), 20.0);
        assert_eq!(left, scaled);
        assert_eq!(half.get(), 5.0);
    }

    #[test]
    fn test_reciprocal_through_no_tag() {
        let rate: Tagged<f32, Rate> = 1.0_f32 / T::new(0.5);
        assert_eq!(rate.get(), 2.0);
    }

    #[test]
    fn test_compound_assignment() {
        let mut d = D::new(3.0);
        d += D::new(2.0);
        d *= 3.0_f32;
        d -= D::new(3.0);
        d /= 2.0_f32;
        assert_eq!(d.get(), 6.0);
    }

    #[test]
    fn test_compound_assignment_with_identity_tag() {
        let mut d = D::new(4.0);
        d *= Dimensionless::new(2.0_f32);
        d /= Dimensionless::new(4.0_f32);
        assert_eq!(d.get(), 2.0);
    }

    #[test]
    fn test_dimensionless_algebra() {
        let a: Dimensionless<i32> = Tagged::new(6);
        let b: Dimensionless<i32> = Tagged::new(3);
        let product: Dimensionless<i32> = a * b;
        let quotient: Dimensionless<i32> = a / b;
        assert_eq!((a + b).get(), 9);
        assert_eq!(product.get(), 18);
        assert_eq!(quotient.get(), 2);

        let x: Dimensionless<f64> = Tagged::new(3.0);
        let y: Dimensionless<f64> = x * 1.0_f64;
        let z: Dimensionless<f64> = 2.0_f64 * x / 4_u8;
        assert_eq!(y, x);
        assert_eq!(z.get(), 1.5);
    }

    #[test]
    fn test_scalar_operand_is_cast_to_payload() {
        let d = D::new(4.0);
        let by_int: D = d * 2;
        let by_unsigned: D = d / 2_u32;
        let by_wider_float: D = 2.5_f64 * d;
        let from_left_int: D = 3_i64 * d;
        assert_eq!(by_int.get(), 8.0);
        assert_eq!(by_unsigned.get(), 2.0);
        assert_eq!(by_wider_float.get(), 10.0);
        assert_eq!(from_left_int.get(), 12.0);

        let w: Tagged<i64, Weight> = Tagged::new(9);
        let scaled: Tagged<i64, Weight> = w * 1.9_f64;
        assert_eq!(scaled.get(), 9);
    }

    #[test]
    fn test_compound_assignment_with_mixed_scalars() {
        let mut d = D::new(3.0);
        d *= 2;
        d *= 2_u8;
        d /= 4;
        d /= 0.5_f64;
        assert_eq!(d.get(), 6.0);

        let mut w: Tagged<i64, Weight> = Tagged::new(10);
        w *= 3_u16;
        w /= 2_i32;
        assert_eq!(w.get(), 15);
    }

    #[test]
    fn test_mixed_scalar_reciprocal() {
        let rate: Tagged<f32, Rate> = 1_u8 / T::new(0.25);
        assert_eq!(rate.get(), 4.0);
    }

    #[test]
    fn test_integer_payload_division_by_scalar() {
        let w: Tagged<i64, Weight> = Tagged::new(9);
        let third: Tagged<i64, Weight> = w / 3_i64;
        assert_eq!(third.get(), 3);
        assert_eq!((w * 2_i64).get(), 18);
    }

    #[test]
    fn test_sum_iterator() {
        let total: D = [1.0_f32, 2.0, 3.5].into_iter().map(D::new).sum();
        assert_eq!(total.get(), 6.5);
    }
}
