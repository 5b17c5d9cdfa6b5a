//! Cache-line aligned fixed-size numeric vectors
//!
//! `AlignedVector<T, N>` is a plain value type: exactly `N` lanes of one
//! primitive numeric type, aligned to [`CACHE_LINE`] bytes so wide SIMD loads
//! over the whole container never straddle a line boundary. It satisfies
//! [`Arithmetic`](crate::Arithmetic) and is the canonical aggregate payload of
//! [`Tagged`](crate::Tagged).
//!
//! Layout:
//! - `data`: `[T; N]`, no header, no heap
//! - total size rounded up to a multiple of 64 bytes

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::VectorError;

/// Alignment of every `AlignedVector`, in bytes
pub const CACHE_LINE: usize = 64;

mod sealed {
    pub trait Sealed {}
}

/// Primitive numeric lane type
///
/// Sealed: only the built-in integer and float types are lanes.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a numeric lane type",
    note = "aligned vectors hold only primitive integers and floats"
)]
pub trait Lane:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

macro_rules! lanes {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Lane for $t {}
    )*};
}

lanes!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Fixed-length numeric aggregate aligned to a cache line
///
/// ```rust
/// use tagged_units::AlignedVector;
///
/// let a = AlignedVector::new([1.0_f32, 2.0, 3.0, 4.0]);
/// let b = AlignedVector::splat(1.0_f32);
/// assert_eq!(a + b, AlignedVector::new([2.0, 3.0, 4.0, 5.0]));
/// assert_eq!((a * 2.0_f32)[3], 8.0);
/// ```
#[repr(C, align(64))]
#[derive(Debug, Clone, Copy, Hash)]
pub struct AlignedVector<T, const N: usize> {
    data: [T; N],
}

const _: () = assert!(std::mem::align_of::<AlignedVector<u8, 1>>() == CACHE_LINE);
const _: () = assert!(std::mem::size_of::<AlignedVector<f32, 8>>() == CACHE_LINE);
const _: () = assert!(std::mem::size_of::<AlignedVector<f64, 9>>() == 2 * CACHE_LINE);

impl<T: Lane, const N: usize> AlignedVector<T, N> {
    /// Create a vector from exactly `N` lanes
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Broadcast one value across all lanes
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Number of lanes
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Lane `index`, or `None` past the end
    #[inline]
    pub const fn get(&self, index: usize) -> Option<&T> {
        if index < N {
            Some(&self.data[index])
        } else {
            None
        }
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub const fn into_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Collect exactly `N` lanes from an iterator
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::LaneCount`] when the iterator yields fewer or
    /// more than `N` items. At most `N + 1` items are pulled, so on overflow
    /// `actual` is `N + 1` and means "at least"; endless iterators are fine.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, VectorError> {
        let mut data = [T::default(); N];
        let mut iter = iter.into_iter();
        let mut filled = 0;
        for slot in data.iter_mut() {
            match iter.next() {
                Some(lane) => {
                    *slot = lane;
                    filled += 1;
                }
                None => break,
            }
        }
        let actual = if filled < N {
            filled
        } else if iter.next().is_some() {
            N + 1
        } else {
            return Ok(Self { data });
        };
        tracing::debug!(expected = N, actual, "rejected iterator with wrong lane count");
        Err(VectorError::LaneCount {
            expected: N,
            actual,
        })
    }
}

impl<T: Lane, const N: usize> Default for AlignedVector<T, N> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Lane, const N: usize> From<[T; N]> for AlignedVector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Lane, const N: usize> TryFrom<&[T]> for AlignedVector<T, N> {
    type Error = VectorError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let data: [T; N] = slice.try_into().map_err(|_| {
            tracing::debug!(
                expected = N,
                actual = slice.len(),
                "rejected slice with wrong lane count"
            );
            VectorError::LaneCount {
                expected: N,
                actual: slice.len(),
            }
        })?;
        Ok(Self { data })
    }
}

impl<T, const N: usize> Index<usize> for AlignedVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for AlignedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const N: usize> IntoIterator for AlignedVector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a AlignedVector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut AlignedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

// =============================================================================
// Comparison
// =============================================================================

/// Exact elementwise equality
impl<T: PartialEq, const N: usize> PartialEq for AlignedVector<T, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, const N: usize> Eq for AlignedVector<T, N> {}

/// Lexicographic over lanes `0..N`; the first lane that is not equal decides,
/// including an unordered (NaN) lane
impl<T: PartialOrd, const N: usize> PartialOrd for AlignedVector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.data.iter().zip(other.data.iter()) {
            match a.partial_cmp(b) {
                Some(Ordering::Equal) => continue,
                decided => return decided,
            }
        }
        Some(Ordering::Equal)
    }
}

// =============================================================================
// Elementwise Arithmetic
// =============================================================================

macro_rules! elementwise {
    ($($op:ident :: $method:ident, $assign:ident :: $assign_method:ident, $sym:tt;)*) => {$(
        impl<T: Lane, const N: usize> $assign for AlignedVector<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                for (a, b) in self.data.iter_mut().zip(rhs.data) {
                    *a = *a $sym b;
                }
            }
        }

        impl<T: Lane, const N: usize> $op for AlignedVector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self {
                <Self as $assign>::$assign_method(&mut self, rhs);
                self
            }
        }
    )*};
}

elementwise! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

// =============================================================================
// Scalar Broadcast
// =============================================================================

impl<T: Lane, const N: usize> MulAssign<T> for AlignedVector<T, N> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        for a in self.data.iter_mut() {
            *a = *a * scalar;
        }
    }
}

impl<T: Lane, const N: usize> DivAssign<T> for AlignedVector<T, N> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        for a in self.data.iter_mut() {
            *a = *a / scalar;
        }
    }
}

impl<T: Lane, const N: usize> Mul<T> for AlignedVector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: Lane, const N: usize> Div<T> for AlignedVector<T, N> {
    type Output = Self;

    #[inline]
    fn div(mut self, scalar: T) -> Self {
        self /= scalar;
        self
    }
}

impl<T: Lane + Neg<Output = T>, const N: usize> Neg for AlignedVector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self {
        for a in self.data.iter_mut() {
            *a = -*a;
        }
        self
    }
}

macro_rules! left_scalar {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<AlignedVector<$t, N>> for $t {
            type Output = AlignedVector<$t, N>;

            #[inline]
            fn mul(self, rhs: AlignedVector<$t, N>) -> AlignedVector<$t, N> {
                rhs * self
            }
        }
    )*};
}

left_scalar!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Constant Evaluation
// =============================================================================

// Trait methods cannot run in `const` items, so each lane type gets inherent
// `const fn` twins of the operators above. They carry a `const_` prefix so a
// method call like `a.add(b)` still reaches the `std::ops` trait.

macro_rules! const_lanes {
    ($($t:ty),*) => {$(
        impl<const N: usize> AlignedVector<$t, N> {
            /// Elementwise sum, usable in `const` items
            pub const fn const_add(self, rhs: Self) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = self.data[i] + rhs.data[i];
                    i += 1;
                }
                Self { data }
            }

            /// Elementwise difference, usable in `const` items
            pub const fn const_sub(self, rhs: Self) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = self.data[i] - rhs.data[i];
                    i += 1;
                }
                Self { data }
            }

            /// Elementwise product, usable in `const` items
            pub const fn const_mul(self, rhs: Self) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = self.data[i] * rhs.data[i];
                    i += 1;
                }
                Self { data }
            }

            /// Elementwise quotient, usable in `const` items
            pub const fn const_div(self, rhs: Self) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = self.data[i] / rhs.data[i];
                    i += 1;
                }
                Self { data }
            }

            pub const fn mul_scalar(self, scalar: $t) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = self.data[i] * scalar;
                    i += 1;
                }
                Self { data }
            }

            pub const fn div_scalar(self, scalar: $t) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = self.data[i] / scalar;
                    i += 1;
                }
                Self { data }
            }

            /// Exact elementwise equality, usable in `const` items
            pub const fn equals(&self, other: &Self) -> bool {
                let mut i = 0;
                while i < N {
                    if self.data[i] != other.data[i] {
                        return false;
                    }
                    i += 1;
                }
                true
            }
        }
    )*};
}

const_lanes!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! const_signed_lanes {
    ($($t:ty),*) => {$(
        impl<const N: usize> AlignedVector<$t, N> {
            /// Elementwise negation, usable in `const` items
            pub const fn const_neg(self) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = -self.data[i];
                    i += 1;
                }
                Self { data }
            }
        }
    )*};
}

const_signed_lanes!(f32, f64, i8, i16, i32, i64, i128, isize);

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{AlignedVector, Lane};

    impl<T: Lane + Serialize, const N: usize> Serialize for AlignedVector<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(N)?;
            for lane in &self.data {
                tuple.serialize_element(lane)?;
            }
            tuple.end()
        }
    }

    struct LaneVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T: Lane + Deserialize<'de>, const N: usize> Visitor<'de> for LaneVisitor<T, N> {
        type Value = AlignedVector<T, N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "an array of {} lanes", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut data = [T::default(); N];
            for (i, slot) in data.iter_mut().enumerate() {
                *slot = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
            }
            Ok(AlignedVector { data })
        }
    }

    impl<'de, T: Lane + Deserialize<'de>, const N: usize> Deserialize<'de> for AlignedVector<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, LaneVisitor(PhantomData))
        }
    }
}
