//! The tag algebra resolver
//!
//! One trait per operator kind answers "what does combining `L` and `R`
//! produce?" entirely at compile time:
//!
//! | Operator | Table                    | Entry                          |
//! |----------|--------------------------|--------------------------------|
//! | `+`      | [`TagSum`]               | `(G, G) → G`                   |
//! | `-`      | [`TagDifference`]        | `(G, G) → G`                   |
//! | `*`      | [`TagProduct<R>`]        | `(L, R) → Output`              |
//! | `/`      | [`TagQuotient<R>`]       | `(L, R) → Output`              |
//! | `/ s`    | [`ScalarDivision<P, S>`] | `(G, payload, scalar) → Output`|
//!
//! The tables are open: entries are trait impls written next to the tags they
//! relate, usually through [`additive!`](crate::additive!),
//! [`product!`](crate::product!), [`quotient!`](crate::quotient!),
//! [`reciprocal!`](crate::reciprocal!) and
//! [`scalar_division!`](crate::scalar_division!). A pair with no entry is a
//! compile error at the call site.
//!
//! Built-in entries, valid for every tag `G`:
//!
//! - `G * NoTag → G` and `NoTag * G → G` (scaling)
//! - `G / NoTag → G`
//! - `G / G → Raw`, i.e. the bare payload (dimension cancellation)
//! - `NoTag ⊕ NoTag → NoTag` for all four operators, so dimensionless values
//!   stay tagged
//!
//! `NoTag / G` is deliberately left open: it is the reciprocal table.
//!
//! Product and quotient entries are keyed by the ordered pair. The resolver
//! never infers commutativity; `Speed * Time` and `Time * Speed` are two
//! entries.

use crate::tag::{NoTag, Outcome, Raw, Tag};

/// Sum relation: declares `G + G → G`
#[diagnostic::on_unimplemented(
    message = "cannot add `{Self}` quantities: no sum relation is declared for this tag",
    label = "no `TagSum` entry",
    note = "register one with `tagged_units::additive!({Self})`; tags of different dimensions can never be added"
)]
pub trait TagSum {}

/// Difference relation: declares `G - G → G`
#[diagnostic::on_unimplemented(
    message = "cannot subtract `{Self}` quantities: no difference relation is declared for this tag",
    label = "no `TagDifference` entry",
    note = "register one with `tagged_units::additive!({Self})`; tags of different dimensions can never be subtracted"
)]
pub trait TagDifference {}

/// Product relation `(Self, Rhs) → Output`
#[diagnostic::on_unimplemented(
    message = "no product relation is declared for `{Self} * {Rhs}`",
    label = "no `TagProduct` entry for this pair",
    note = "register one with `tagged_units::product!({Self} * {Rhs} => ResultTag)`; commuted pairs need their own entry"
)]
pub trait TagProduct<Rhs> {
    /// Resulting tag, [`NoTag`], or [`Raw`] for a bare payload
    type Output: Outcome;
}

/// Quotient relation `(Self, Rhs) → Output`
#[diagnostic::on_unimplemented(
    message = "no quotient relation is declared for `{Self} / {Rhs}`",
    label = "no `TagQuotient` entry for this pair",
    note = "register one with `tagged_units::quotient!({Self} / {Rhs} => ResultTag)`, or `reciprocal!` when dividing a bare scalar by a quantity"
)]
pub trait TagQuotient<Rhs> {
    /// Resulting tag, [`NoTag`], or [`Raw`] for a bare payload
    type Output: Outcome;
}

/// Override table for dividing a `P` payload tagged `Self` by a bare `S`
///
/// `S` is the payload's [`Scalable::Lane`](crate::Scalable::Lane): a scalar
/// operand of any primitive type is converted to it first. For primitive
/// payloads the entry is built in and follows `TagQuotient<NoTag>`. Aggregate
/// payloads (an [`AlignedVector`](crate::AlignedVector), a user vector struct)
/// divide by their element type instead, and have to state the result
/// explicitly.
#[diagnostic::on_unimplemented(
    message = "dividing a `{P}` payload tagged `{Self}` by `{S}` has no declared result",
    label = "no `ScalarDivision` entry",
    note = "aggregate payloads declare it with `tagged_units::scalar_division!({Self}, {P}, {S})`"
)]
pub trait ScalarDivision<P, S> {
    /// Resulting tag, [`NoTag`], or [`Raw`] for a bare payload
    type Output: Outcome;
}

/// Tag produced by `L * R`
pub type Product<L, R> = <L as TagProduct<R>>::Output;

/// Tag produced by `L / R`
pub type Quotient<L, R> = <L as TagQuotient<R>>::Output;

/// Concrete value type a resolved outcome `O` yields for payload `T`
pub type Resolved<O, T> = <O as Outcome>::Value<T>;

// =============================================================================
// Built-in relations
// =============================================================================

impl TagSum for NoTag {}

impl TagDifference for NoTag {}

impl<G: Tag> TagProduct<NoTag> for G {
    type Output = G;
}

impl<G: Tag> TagProduct<G> for NoTag {
    type Output = G;
}

impl TagProduct<NoTag> for NoTag {
    type Output = NoTag;
}

impl<G: Tag> TagQuotient<NoTag> for G {
    type Output = G;
}

impl<G: Tag> TagQuotient<G> for G {
    type Output = Raw;
}

impl TagQuotient<NoTag> for NoTag {
    type Output = NoTag;
}

macro_rules! primitive_scalar_division {
    ($($s:ty),* $(,)?) => {$(
        impl<G: TagQuotient<NoTag>> ScalarDivision<$s, $s> for G {
            type Output = <G as TagQuotient<NoTag>>::Output;
        }
    )*};
}

primitive_scalar_division!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Registration macros
// =============================================================================

/// Declare tags additive: `G + G → G` and `G - G → G`
///
/// ```rust
/// tagged_units::tag!(pub Distance);
/// tagged_units::additive!(Distance);
///
/// use tagged_units::Tagged;
/// let d = Tagged::<f64, Distance>::new(1.0) + Tagged::new(2.0);
/// assert_eq!(d.get(), 3.0);
/// ```
#[macro_export]
macro_rules! additive {
    ($($tag:ty),+ $(,)?) => {$(
        impl $crate::TagSum for $tag {}
        impl $crate::TagDifference for $tag {}
    )+};
}

/// Register product entries: `L * R => Output`
///
/// ```rust
/// tagged_units::tag!(pub Speed; pub Time; pub Distance);
/// tagged_units::product!(Speed * Time => Distance, Time * Speed => Distance);
/// ```
#[macro_export]
macro_rules! product {
    ($($lhs:ident * $rhs:ident => $out:ty),+ $(,)?) => {$(
        impl $crate::TagProduct<$rhs> for $lhs {
            type Output = $out;
        }
    )+};
}

/// Register quotient entries: `L / R => Output`
///
/// Use [`NoTag`](crate::NoTag) as the output for a cross-tag ratio that is
/// dimensionless, or [`Raw`](crate::Raw) to yield the bare payload.
#[macro_export]
macro_rules! quotient {
    ($($lhs:ident / $rhs:ident => $out:ty),+ $(,)?) => {$(
        impl $crate::TagQuotient<$rhs> for $lhs {
            type Output = $out;
        }
    )+};
}

/// Register reciprocal entries: `scalar / G => Output`
///
/// ```rust
/// tagged_units::tag!(pub Period; pub Rate);
/// tagged_units::reciprocal!(Period => Rate);
///
/// use tagged_units::Tagged;
/// let rate: Tagged<f64, Rate> = 1.0 / Tagged::<f64, Period>::new(0.25);
/// assert_eq!(rate.get(), 4.0);
/// ```
#[macro_export]
macro_rules! reciprocal {
    ($($tag:ty => $out:ty),+ $(,)?) => {$(
        impl $crate::TagQuotient<$tag> for $crate::NoTag {
            type Output = $out;
        }
    )+};
}

/// Register aggregate scalar-division overrides: `(tag, payload, scalar)`
///
/// Without `=> Output` the division keeps the tag.
///
/// ```rust
/// use tagged_units::{AlignedVector, Tagged};
///
/// tagged_units::tag!(pub Offset);
/// tagged_units::scalar_division!(Offset, AlignedVector<f32, 4>, f32);
///
/// let v = Tagged::<_, Offset>::new(AlignedVector::new([2.0_f32, 4.0, 6.0, 8.0]));
/// let half: Tagged<AlignedVector<f32, 4>, Offset> = v / 2.0_f32;
/// assert_eq!(half.get()[3], 4.0);
/// ```
#[macro_export]
macro_rules! scalar_division {
    (@entry $tag:ty, $payload:ty, $scalar:ty) => {
        impl $crate::ScalarDivision<$payload, $scalar> for $tag {
            type Output = $tag;
        }
    };
    (@entry $tag:ty, $payload:ty, $scalar:ty => $out:ty) => {
        impl $crate::ScalarDivision<$payload, $scalar> for $tag {
            type Output = $out;
        }
    };
    ($($tag:ty, $payload:ty, $scalar:ty $(=> $out:ty)?);+ $(;)?) => {$(
        $crate::scalar_division!(@entry $tag, $payload, $scalar $(=> $out)?);
    )+};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    crate::tag! {
        Distance;
        Duration;
        Velocity;
        Rate;
    }

    crate::additive!(Distance, Duration);
    crate::product!(Velocity * Duration => Distance);
    crate::quotient!(Distance / Duration => Velocity, Distance / Velocity => Duration);
    crate::reciprocal!(Duration => Rate);

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn test_registered_entries() {
        assert!(same::<Product<Velocity, Duration>, Distance>());
        assert!(same::<Quotient<Distance, Duration>, Velocity>());
        assert!(same::<Quotient<Distance, Velocity>, Duration>());
        assert!(same::<Quotient<NoTag, Duration>, Rate>());
    }

    #[test]
    fn test_scalar_identity() {
        assert!(same::<Product<Distance, NoTag>, Distance>());
        assert!(same::<Product<NoTag, Distance>, Distance>());
        assert!(same::<Quotient<Distance, NoTag>, Distance>());
        assert!(same::<Product<NoTag, NoTag>, NoTag>());
    }

    #[test]
    fn test_dimension_cancellation() {
        assert!(same::<Quotient<Distance, Distance>, Raw>());
        assert!(same::<Quotient<Velocity, Velocity>, Raw>());
        assert!(same::<Resolved<Quotient<Distance, Distance>, f32>, f32>());
    }

    #[test]
    fn test_dimensionless_stays_tagged() {
        assert!(same::<Quotient<NoTag, NoTag>, NoTag>());
        assert!(same::<Resolved<Product<NoTag, NoTag>, f32>, crate::Tagged<f32, NoTag>>());
        assert!(same::<Resolved<<NoTag as ScalarDivision<f64, f64>>::Output, f64>, crate::Dimensionless<f64>>());
    }

    #[test]
    fn test_primitive_scalar_division_follows_quotient() {
        assert!(same::<<Distance as ScalarDivision<f64, f64>>::Output, Distance>());
        assert!(same::<<NoTag as ScalarDivision<i32, i32>>::Output, NoTag>());
    }
}
