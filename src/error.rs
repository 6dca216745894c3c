//! Layout error type.

use core::fmt;

use whereat::At;

/// Result alias used throughout the crate.
///
/// Errors carry the location they were raised at via [`whereat::At`].
pub type Result<T> = core::result::Result<T, At<LayoutError>>;

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// An aspect ratio is zero, negative, NaN, or infinite.
    ///
    /// `index` is the position in the supplied sequence (or the leaf index,
    /// in traversal order, when building from a shape).
    InvalidAspect { index: usize },
    /// Padding is negative or not finite, or leaves a slot with no area.
    InvalidPadding,
    /// Bounds have a non-positive or non-finite width, height, or aspect.
    InvalidBounds,
    /// A scoring weight is negative or not finite.
    InvalidWeights,
    /// The number of supplied values differs from the number of leaves.
    AspectCountMismatch { expected: usize, actual: usize },
    /// A rectangulation or group has no children.
    EmptyGroup,
    /// A nested rectangulation has the same orientation as its parent.
    OrientationMismatch,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAspect { index } => {
                write!(f, "aspect ratio at index {index} must be positive and finite")
            }
            Self::InvalidPadding => f.write_str("padding must be non-negative and finite"),
            Self::InvalidBounds => f.write_str("bounds must be positive and finite"),
            Self::InvalidWeights => f.write_str("weights must be non-negative and finite"),
            Self::AspectCountMismatch { expected, actual } => {
                write!(f, "expected {expected} aspect ratios, got {actual}")
            }
            Self::EmptyGroup => f.write_str("rectangulation groups must have children"),
            Self::OrientationMismatch => {
                f.write_str("nested rectangulation must be perpendicular to its parent")
            }
        }
    }
}

impl core::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_problem() {
        let msg = LayoutError::AspectCountMismatch {
            expected: 4,
            actual: 3,
        }
        .to_string();
        assert_eq!(msg, "expected 4 aspect ratios, got 3");
        assert!(
            LayoutError::InvalidAspect { index: 2 }
                .to_string()
                .contains("index 2")
        );
    }
}
