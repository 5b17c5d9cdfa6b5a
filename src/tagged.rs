//! The Tagged type: a payload bound to a compile-time tag
//!
//! `Tagged<T, G>` owns a payload of type `T` and carries the tag `G` only in
//! its type. Two tagged values interoperate solely through the relations of
//! [`relation`](crate::relation); there is no implicit conversion in either
//! direction, so a unit can never be stripped or attached by accident.

use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::tag::{NoTag, Tag};

/// Capability set a payload must have to be wrapped
///
/// Closed arithmetic (`+ - * /` and unary `-` all yield `Self`), equality and
/// a partial ordering. Plain signed numbers, floats and
/// [`AlignedVector`](crate::AlignedVector) qualify.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a tagged payload",
    note = "payloads need `Copy`, closed `+ - * /`, unary `-`, `PartialEq` and `PartialOrd`"
)]
pub trait Arithmetic:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + PartialOrd
{
}

impl<T> Arithmetic for T where
    T: Copy
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + PartialEq
        + PartialOrd
{
}

/// A payload of type `T` tagged with the dimension `G`
///
/// # Type Parameters
///
/// * `T` - The payload (`f64`, `f32`, `AlignedVector<f32, 8>`, ...)
/// * `G` - The tag (a [`Tag`], or [`NoTag`] for a dimensionless value)
///
/// # Examples
///
/// ```rust
/// use tagged_units::si::{Length, Speed, Time};
///
/// let d = Length::new(100.0);
/// let t = Time::new(20.0);
/// let v: Speed = d / t;
/// assert_eq!(v, Speed::new(5.0));
/// ```
///
/// The payload type is exact: no narrowing and no promotion.
///
/// ```compile_fail
/// use tagged_units::{Tagged, si::tags::Length};
///
/// let _ = Tagged::<f32, Length>::new(1.0_f64);
/// ```
#[repr(transparent)]
pub struct Tagged<T, G> {
    value: T,
    _tag: PhantomData<G>,
}

/// A tagged value carrying no dimension
pub type Dimensionless<T> = Tagged<T, NoTag>;

impl<T, G> Tagged<T, G> {
    /// Wrap a payload without the capability check; used by the resolver
    #[inline]
    pub(crate) const fn from_raw(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Unwrap the payload (consuming)
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Arithmetic, G> Tagged<T, G> {
    /// Create a new tagged value from a payload of exactly type `T`
    #[inline]
    pub const fn new(value: T) -> Self {
        Self::from_raw(value)
    }

    /// Copy of the payload
    #[inline]
    pub const fn get(&self) -> T {
        self.value
    }
}

impl<T: Arithmetic, G: Tag> Tagged<T, G> {
    /// Name of the tag
    #[inline]
    pub fn tag_name() -> &'static str {
        G::NAME
    }

    /// Display symbol of the tag
    #[inline]
    pub fn symbol() -> &'static str {
        G::SYMBOL
    }
}

// =============================================================================
// Structural traits
// =============================================================================

// Written by hand so no bound lands on the tag: tags are uninhabited and
// implement nothing beyond `Tag`.

impl<T: Clone, G> Clone for Tagged<T, G> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_raw(self.value.clone())
    }
}

impl<T: Copy, G> Copy for Tagged<T, G> {}

impl<T: PartialEq, G> PartialEq for Tagged<T, G> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, G> Eq for Tagged<T, G> {}

impl<T: PartialOrd, G> PartialOrd for Tagged<T, G> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, G> Ord for Tagged<T, G> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, G> Hash for Tagged<T, G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Default, G> Default for Tagged<T, G> {
    fn default() -> Self {
        Self::from_raw(T::default())
    }
}

// =============================================================================
// Display and Debug
// =============================================================================

impl<T: fmt::Display, G: Tag> fmt::Display for Tagged<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if G::SYMBOL.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, G::SYMBOL)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tagged<T, NoTag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: fmt::Debug, G> fmt::Debug for Tagged<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tagged")
            .field("value", &self.value)
            .field("tag", &type_name::<G>())
            .finish()
    }
}

// =============================================================================
// Extension Trait for Tagging Values
// =============================================================================

/// Extension trait for tagging a payload in method position
///
/// ```rust
/// use tagged_units::WithTag;
/// use tagged_units::si::tags::Mass;
///
/// let m = 70.0_f64.with_tag::<Mass>();
/// assert_eq!(m.get(), 70.0);
/// ```
pub trait WithTag: Sized {
    /// Tag `self` with `G`
    fn with_tag<G: Tag>(self) -> Tagged<Self, G>;
}

impl<T: Arithmetic> WithTag for T {
    #[inline]
    fn with_tag<G: Tag>(self) -> Tagged<T, G> {
        Tagged::new(self)
    }
}

// =============================================================================
// Float Operations
// =============================================================================

macro_rules! float_helpers {
    ($($f:ty),*) => {$(
        impl<G> Tagged<$f, G> {
            /// Absolute value
            #[inline]
            pub fn abs(self) -> Self {
                Self::from_raw(self.value.abs())
            }

            /// Minimum
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self::from_raw(self.value.min(other.value))
            }

            /// Maximum
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self::from_raw(self.value.max(other.value))
            }

            /// Clamp to range
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self::from_raw(self.value.clamp(min.value, max.value))
            }

            /// Check if NaN
            #[inline]
            pub fn is_nan(&self) -> bool {
                self.value.is_nan()
            }

            /// Check if finite
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.value.is_finite()
            }

            #[inline]
            pub fn is_sign_negative(&self) -> bool {
                self.value.is_sign_negative()
            }
        }
    )*};
}

float_helpers!(f32, f64);

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, G> serde::Serialize for Tagged<T, G> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>, G> serde::Deserialize<'de> for Tagged<T, G> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::from_raw)
    }
}
