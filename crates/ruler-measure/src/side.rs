//! Named box sides.

use ruler_math::{Axis, BoxEdge};

/// A named side of the endpoint box.
///
/// Lets callers say "move this side of the box to this coordinate" without
/// knowing which raw field that touches: each side maps to an (axis, edge)
/// pair.
///
/// # Example
///
/// ```
/// use ruler_math::{Axis, BoxEdge};
/// use ruler_measure::Side;
///
/// assert_eq!(Side::Right.axis(), Axis::X);
/// assert_eq!(Side::Right.edge(), BoxEdge::Max);
/// assert_eq!(Side::Bottom.edge(), BoxEdge::Min);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Minimum X.
    Left,
    /// Maximum X.
    Right,
    /// Maximum Z.
    Front,
    /// Minimum Z.
    Back,
    /// Maximum Y.
    Top,
    /// Minimum Y.
    Bottom,
}

impl Side {
    /// The axis this side's extent lies along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Top | Self::Bottom => Axis::Y,
            Self::Front | Self::Back => Axis::Z,
        }
    }

    /// Which edge of that axis this side is.
    #[must_use]
    pub const fn edge(self) -> BoxEdge {
        match self {
            Self::Back | Self::Bottom | Self::Left => BoxEdge::Min,
            Self::Front | Self::Top | Self::Right => BoxEdge::Max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_axis_mapping() {
        assert_eq!(Side::Left.axis(), Axis::X);
        assert_eq!(Side::Right.axis(), Axis::X);
        assert_eq!(Side::Top.axis(), Axis::Y);
        assert_eq!(Side::Bottom.axis(), Axis::Y);
        assert_eq!(Side::Front.axis(), Axis::Z);
        assert_eq!(Side::Back.axis(), Axis::Z);
    }

    #[test]
    fn test_side_edge_mapping() {
        assert_eq!(Side::Left.edge(), BoxEdge::Min);
        assert_eq!(Side::Back.edge(), BoxEdge::Min);
        assert_eq!(Side::Bottom.edge(), BoxEdge::Min);
        assert_eq!(Side::Right.edge(), BoxEdge::Max);
        assert_eq!(Side::Front.edge(), BoxEdge::Max);
        assert_eq!(Side::Top.edge(), BoxEdge::Max);
    }
}
