//! Tagged Units: compile-time tag algebra for unit-safe arithmetic
//!
//! A value is wrapped together with a zero-sized tag naming its dimension.
//! Arithmetic between tagged values is resolved at compile time through open
//! relation tables; an operation whose tag pair has no entry does not
//! compile.
//!
//! # Key Features
//!
//! - **Zero cost**: `Tagged<T, G>` is `#[repr(transparent)]` over `T`
//! - **Open tables**: downstream crates register tags and relations with macros
//! - **Dimension cancellation**: `L / L` yields the raw payload
//! - **Mixed scalars**: `length * 2` casts the scalar to the payload's lane type
//! - **Aggregate payloads**: 64-byte aligned [`AlignedVector`] works as a payload
//! - **Const evaluation**: construction and vector arithmetic in `const` items
//!
//! # Example
//!
//! ```rust
//! use tagged_units::si::{Acceleration, Force, Length, Mass, Speed, Time};
//!
//! let v: Speed = Length::new(100.0) / Time::new(20.0);
//! assert_eq!(v, Speed::new(5.0));
//!
//! let f: Force = Mass::new(2.0) * Acceleration::new(10.0);
//! assert_eq!(f, Force::new(20.0));
//!
//! let ratio: f64 = Length::new(50.0) / Length::new(100.0);
//! assert_eq!(ratio, 0.5);
//! ```
//!
//! # Rejected at compile time
//!
//! Adding different dimensions:
//!
//! ```compile_fail
//! use tagged_units::si::{Length, Time};
//!
//! let _ = Length::new(1.0) + Time::new(1.0);
//! ```
//!
//! A product with no registered entry:
//!
//! ```compile_fail
//! use tagged_units::si::{Speed, Volt};
//!
//! let _ = Speed::new(1.0) * Volt::new(1.0);
//! ```
//!
//! Subtracting different dimensions:
//!
//! ```compile_fail
//! use tagged_units::si::{Length, Time};
//!
//! let _ = Length::new(1.0) - Time::new(1.0);
//! ```
//!
//! A quotient with no registered entry:
//!
//! ```compile_fail
//! use tagged_units::si::{Speed, Volt};
//!
//! let _ = Volt::new(1.0) / Speed::new(1.0);
//! ```
//!
//! Constructing from a payload of another type; only scalar operands convert:
//!
//! ```compile_fail
//! use tagged_units::Tagged;
//! use tagged_units::si::tags::Length;
//!
//! let _ = Tagged::<f32, Length>::new(1.0_f64);
//! ```
//!
//! Compound assignment that would change the type: `L / L` is a raw number.
//!
//! ```compile_fail
//! use tagged_units::si::Length;
//!
//! let mut a = Length::new(4.0);
//! a /= Length::new(2.0);
//! ```
//!
//! Dividing an aggregate payload by its element type without an override:
//!
//! ```compile_fail
//! use tagged_units::{AlignedVector, Tagged};
//!
//! tagged_units::tag!(Offset);
//! let v = Tagged::<_, Offset>::new(AlignedVector::<f32, 4>::splat(2.0));
//! let _ = v / 2.0_f32;
//! ```

pub mod aligned;
pub mod error;
mod ops;
pub mod relation;
pub mod scalar;
#[cfg(feature = "si")]
pub mod si;
pub mod tag;
pub mod tagged;

// Re-exports
pub use aligned::{AlignedVector, Lane, CACHE_LINE};
pub use error::VectorError;
pub use relation::{
    Product, Quotient, Resolved, ScalarDivision, TagDifference, TagProduct, TagQuotient, TagSum,
};
pub use scalar::{FromScalar, Scalable};
pub use tag::{NoTag, Outcome, Raw, Tag};
pub use tagged::{Arithmetic, Dimensionless, Tagged, WithTag};

/// Prelude for common imports
pub mod prelude {
    pub use super::aligned::AlignedVector;
    pub use super::tag::{NoTag, Tag};
    pub use super::tagged::{Dimensionless, Tagged, WithTag};
    pub use super::{additive, product, quotient, reciprocal, scalar_division, tag};

    #[cfg(feature = "si")]
    pub use super::si::SiLiteral;
}
