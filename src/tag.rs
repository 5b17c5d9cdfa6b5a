//! Tags: zero-sized markers naming the dimension of a quantity
//!
//! A tag never exists at runtime. It is a type parameter of
//! [`Tagged`](crate::Tagged) and a key into the relation tables of
//! [`relation`](crate::relation). Tags are usually declared with the
//! [`tag!`](crate::tag!) macro as empty enums:
//!
//! ```rust
//! tagged_units::tag!(pub Distance => "m");
//!
//! use tagged_units::Tag;
//! assert_eq!(Distance::NAME, "Distance");
//! assert_eq!(Distance::SYMBOL, "m");
//! ```

use crate::tagged::Tagged;

/// Marker trait for dimension tags (Length, Time, Force, ...)
///
/// The reserved [`NoTag`] marker deliberately does not implement this trait:
/// the built-in identity relations are written as blanket impls over `Tag`,
/// and keeping `NoTag` outside the set is what keeps them disjoint.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a quantity tag",
    label = "not declared as a tag",
    note = "declare tags with `tagged_units::tag!` or implement `tagged_units::Tag`"
)]
pub trait Tag: 'static {
    /// Human-readable name of the dimension
    const NAME: &'static str;

    /// Unit symbol used by `Display`; empty renders the bare value
    const SYMBOL: &'static str = "";
}

/// The reserved "no tag" marker: a dimensionless scalar
///
/// Acts as the identity of the product table and as the right identity of the
/// quotient table. A value tagged `NoTag` stays a
/// [`Dimensionless`](crate::Dimensionless) through scaling and through
/// products and quotients with other dimensionless values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoTag {}

/// Relation result meaning "the bare payload"
///
/// Only dimension cancellation (`G / G`) resolves to it by default. A
/// downstream cross-tag ratio may name it to yield a plain number too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Raw {}

/// What a resolved relation produces for a payload of type `T`
///
/// A tag resolves to `Tagged<T, G>`, [`NoTag`] to `Tagged<T, NoTag>`, and
/// [`Raw`] to the bare `T`, which is how a quotient of equal tags escapes the
/// tag system.
pub trait Outcome {
    /// Result type for payload `T`
    type Value<T>;

    /// Wrap a computed payload into the result type
    fn wrap<T>(value: T) -> Self::Value<T>;
}

impl<G: Tag> Outcome for G {
    type Value<T> = Tagged<T, G>;

    #[inline]
    fn wrap<T>(value: T) -> Tagged<T, G> {
        Tagged::from_raw(value)
    }
}

impl Outcome for NoTag {
    type Value<T> = Tagged<T, NoTag>;

    #[inline]
    fn wrap<T>(value: T) -> Tagged<T, NoTag> {
        Tagged::from_raw(value)
    }
}

impl Outcome for Raw {
    type Value<T> = T;

    #[inline]
    fn wrap<T>(value: T) -> T {
        value
    }
}

/// Declare one or more tags
///
/// Each tag becomes an uninhabited enum implementing [`Tag`]. An optional
/// `=> "symbol"` sets [`Tag::SYMBOL`].
///
/// ```rust
/// tagged_units::tag! {
///     /// Electric charge
///     pub Charge => "C";
///     pub Count;
/// }
/// ```
#[macro_export]
macro_rules! tag {
    () => {};
    ($(#[$meta:meta])* $vis:vis $name:ident => $symbol:literal $(; $($rest:tt)*)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {}

        impl $crate::Tag for $name {
            const NAME: &'static str = stringify!($name);
            const SYMBOL: &'static str = $symbol;
        }

        $($crate::tag!($($rest)*);)?
    };
    ($(#[$meta:meta])* $vis:vis $name:ident $(; $($rest:tt)*)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {}

        impl $crate::Tag for $name {
            const NAME: &'static str = stringify!($name);
        }

        $($crate::tag!($($rest)*);)?
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::tag! {
        Plain;
        Symbolic => "sym";
    }

    #[test]
    fn test_tag_constants() {
        assert_eq!(Plain::NAME, "Plain");
        assert_eq!(Plain::SYMBOL, "");
        assert_eq!(Symbolic::NAME, "Symbolic");
        assert_eq!(Symbolic::SYMBOL, "sym");
    }

    #[test]
    fn test_tags_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Plain>(), 0);
        assert_eq!(std::mem::size_of::<NoTag>(), 0);
        assert_eq!(std::mem::size_of::<Raw>(), 0);
        assert_eq!(
            std::mem::size_of::<Tagged<f64, Plain>>(),
            std::mem::size_of::<f64>()
        );
    }

    #[test]
    fn test_outcome_wrap() {
        let tagged: Tagged<f32, Plain> = <Plain as Outcome>::wrap(2.5_f32);
        assert_eq!(tagged.get(), 2.5);

        let scalar: Tagged<f32, NoTag> = <NoTag as Outcome>::wrap(2.5_f32);
        assert_eq!(scalar.get(), 2.5);

        let raw: f32 = <Raw as Outcome>::wrap(2.5_f32);
        assert_eq!(raw, 2.5);
    }
}
