//! Subdivision orientation.

use core::fmt;

/// Direction in which a rectangulation node lays out its children.
///
/// Orientation strictly alternates with depth: every nested rectangulation
/// uses the perpendicular of its parent's orientation.
///
/// ```text
///     Horizontal          Vertical
///     ┌───┬───┬───┐       ┌─────────┐
///     │   │   │   │       ├─────────┤
///     └───┴───┴───┘       └─────────┘
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children sit side by side, left to right, sharing one height.
    #[default]
    Horizontal,
    /// Children are stacked top to bottom, sharing one width.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Whether children are placed left to right.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_alternates() {
        assert_eq!(Orientation::Horizontal.perpendicular(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.perpendicular(), Orientation::Horizontal);
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            assert_eq!(o.perpendicular().perpendicular(), o);
        }
    }

    #[test]
    fn default_is_horizontal() {
        assert_eq!(Orientation::default(), Orientation::Horizontal);
        assert!(Orientation::default().is_horizontal());
        assert!(!Orientation::Vertical.is_horizontal());
    }
}
