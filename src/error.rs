//! Runtime errors
//!
//! The tag algebra fails at compile time only. The one runtime failure is
//! building an [`AlignedVector`](crate::AlignedVector) from a slice or an
//! iterator whose length is not the lane count.

use miette::Diagnostic;
use thiserror::Error;

/// Error building an aligned vector from dynamically sized input
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum VectorError {
    /// Input length differs from the lane count
    #[error("expected exactly {expected} lanes, got {actual}")]
    #[diagnostic(
        code(V0001),
        help("an `AlignedVector<_, {}>` needs exactly {} elements; pad or truncate the input first", .expected, .expected)
    )]
    LaneCount { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_count_message() {
        let err = VectorError::LaneCount {
            expected: 8,
            actual: 3,
        };
        assert_eq!(err.to_string(), "expected exactly 8 lanes, got 3");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("V0001".to_string())
        );
        assert!(err.help().is_some());
    }
}
