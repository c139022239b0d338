//! Coordinate axis tags.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vec3::Vec3;

/// A coordinate axis, used to address a single component of a [`Vec3`] or a
/// single extent of a bounding box.
///
/// # Example
///
/// ```
/// use ruler_math::{Axis, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.value(Axis::Z), 3.0);
/// assert_eq!(Axis::Y.unit(), Vec3::AXIS_Y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The X axis (width, left/right).
    X,
    /// The Y axis (height, up/down).
    Y,
    /// The Z axis (depth, front/back).
    Z,
}

impl Axis {
    /// All three axes in X, Y, Z order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Returns the unit vector along this axis.
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::AXIS_X,
            Self::Y => Vec3::AXIS_Y,
            Self::Z => Vec3::AXIS_Z,
        }
    }
}
