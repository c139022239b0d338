//! Axis-aligned bounding box.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::vec3::Vec3;

/// Which edge of a box extent along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoxEdge {
    /// The minimum edge along an axis.
    Min,
    /// The maximum edge along an axis.
    Max,
}

/// An axis-aligned bounding box in world coordinates.
///
/// A measurement stores its two logical endpoints as opposite corners of one
/// of these. Raw edge writes through [`Aabb::set_edge`] may transiently leave
/// `min > max` along an axis; owners must re-establish ordering with
/// [`Aabb::corrected`] before deriving geometry from the box.
///
/// # Example
///
/// ```
/// use ruler_math::{Aabb, Vec3};
///
/// // Corners can be given in any order.
/// let aabb = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
/// assert_eq!(aabb.min, Vec3::ZERO);
/// assert_eq!(aabb.size(), Vec3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two corners, reordering them if necessary.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self::from_corners(a, b).corrected()
    }

    /// Creates a box from raw corners without ordering correction.
    ///
    /// Used by edge-move code that corrects afterwards.
    #[must_use]
    pub const fn from_corners(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a degenerate box with both corners at `point`.
    #[must_use]
    pub const fn at_point(point: Vec3) -> Self {
        Self::from_corners(point, point)
    }

    /// Re-establishes `min <= max` componentwise.
    ///
    /// Idempotent: correcting twice yields the same box as correcting once.
    #[must_use]
    pub fn corrected(self) -> Self {
        Self {
            min: Vec3::new(
                self.min.x.min(self.max.x),
                self.min.y.min(self.max.y),
                self.min.z.min(self.max.z),
            ),
            max: Vec3::new(
                self.min.x.max(self.max.x),
                self.min.y.max(self.max.y),
                self.min.z.max(self.max.z),
            ),
        }
    }

    /// Returns `max - min`. Componentwise non-negative on a corrected box.
    #[must_use]
    pub fn size(self) -> Vec3 {
        self.max - self.min
    }

    /// Returns the geometric center.
    #[must_use]
    pub fn center(self) -> Vec3 {
        self.min + self.size() * 0.5
    }

    /// Returns true if `point` lies inside the box (inclusive).
    #[must_use]
    pub fn contains(self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.y >= self.min.y
            && point.z >= self.min.z
            && point.x <= self.max.x
            && point.y <= self.max.y
            && point.z <= self.max.z
    }

    /// Maps a normalized location (components conceptually in `[0, 1]`) to
    /// world coordinates: `min + size * normalized`.
    ///
    /// # Example
    ///
    /// ```
    /// use ruler_math::{Aabb, Vec3};
    ///
    /// let aabb = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0));
    /// assert_eq!(aabb.point_in_bounds(Vec3::ZERO), aabb.min);
    /// assert_eq!(aabb.point_in_bounds(Vec3::ONE), aabb.max);
    /// assert_eq!(aabb.point_in_bounds(Vec3::splat(0.5)), aabb.center());
    /// ```
    #[must_use]
    pub fn point_in_bounds(self, normalized: Vec3) -> Vec3 {
        self.min + self.size() * normalized
    }

    /// Reads the coordinate of one named edge.
    #[must_use]
    pub const fn edge(self, axis: Axis, edge: BoxEdge) -> f32 {
        match edge {
            BoxEdge::Min => self.min.value(axis),
            BoxEdge::Max => self.max.value(axis),
        }
    }

    /// Writes the coordinate of one named edge, leaving the rest of the box
    /// untouched.
    ///
    /// May leave the box unordered along `axis`; run [`Aabb::corrected`]
    /// before computing derived geometry.
    pub fn set_edge(&mut self, axis: Axis, edge: BoxEdge, value: f32) {
        match edge {
            BoxEdge::Min => self.min.set_axis(axis, value),
            BoxEdge::Max => self.max.set_axis(axis, value),
        }
    }
}
