//! Rotation quaternions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vec3::Vec3;

/// A rotation quaternion.
///
/// Built from an angle and a rotation axis via the half-angle construction.
/// Passing a unit axis yields a unit quaternion; normalizing the axis is the
/// caller's responsibility.
///
/// # Example
///
/// ```
/// use ruler_math::{Quaternion, Vec3};
///
/// let quarter = Quaternion::from_axis_angle(std::f32::consts::FRAC_PI_2, Vec3::AXIS_Y);
/// let rotated = quarter.rotate(Vec3::AXIS_X);
/// assert!((rotated.z - -1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quaternion {
    /// X component of the vector part.
    pub x: f32,
    /// Y component of the vector part.
    pub y: f32,
    /// Z component of the vector part.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Builds a rotation of `radians` around `axis`.
    ///
    /// `axis` must be normalized for the result to be a unit quaternion.
    #[must_use]
    pub fn from_axis_angle(radians: f32, axis: Vec3) -> Self {
        let half = radians / 2.0;
        let s = half.sin();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    /// Composes two rotations (Hamilton product, non-commutative).
    ///
    /// `a.concatenating(b)` applies `b`'s rotation in `a`'s frame: rotating a
    /// vector by the result is the same as rotating by `b` first, then by `a`.
    ///
    /// # Example
    ///
    /// ```
    /// use ruler_math::{Quaternion, Vec3};
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let x = Quaternion::from_axis_angle(FRAC_PI_2, Vec3::AXIS_X);
    /// let y = Quaternion::from_axis_angle(FRAC_PI_2, Vec3::AXIS_Y);
    /// assert_ne!(x.concatenating(y), y.concatenating(x));
    /// ```
    #[must_use]
    pub fn concatenating(self, other: Self) -> Self {
        Self {
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        }
    }

    /// Returns the norm. Unit for any rotation built from a normalized axis.
    #[must_use]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Rotates a vector by this quaternion.
    ///
    /// Assumes a unit quaternion.
    #[must_use]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let t = qv.cross(v) * 2.0;
        v + t * self.w + qv.cross(t)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_unit_axis_gives_unit_quaternion() {
        let q = Quaternion::from_axis_angle(1.234, Vec3::AXIS_Z);
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_identity_rotation_is_noop() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(Quaternion::IDENTITY.rotate(v), v, epsilon = 1e-6);
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let q = Quaternion::from_axis_angle(FRAC_PI_2, Vec3::AXIS_Y);
        let rotated = q.rotate(Vec3::AXIS_X);
        assert_abs_diff_eq!(rotated, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_concatenating_accumulates_angle() {
        let quarter = Quaternion::from_axis_angle(FRAC_PI_2, Vec3::AXIS_X);
        let half = quarter.concatenating(quarter);
        let expected = Quaternion::from_axis_angle(PI, Vec3::AXIS_X);
        assert_abs_diff_eq!(half.x, expected.x, epsilon = 1e-6);
        assert_abs_diff_eq!(half.w, expected.w, epsilon = 1e-6);
    }

    #[test]
    fn test_concatenating_order_matters() {
        let x = Quaternion::from_axis_angle(FRAC_PI_2, Vec3::AXIS_X);
        let y = Quaternion::from_axis_angle(FRAC_PI_2, Vec3::AXIS_Y);

        let xy = x.concatenating(y).rotate(Vec3::AXIS_Z);
        let yx = y.concatenating(x).rotate(Vec3::AXIS_Z);
        assert!((xy - yx).length() > 0.5);
    }

    #[test]
    fn test_concatenating_applies_rhs_first() {
        let x = Quaternion::from_axis_angle(FRAC_PI_2, Vec3::AXIS_X);
        let y = Quaternion::from_axis_angle(FRAC_PI_2, Vec3::AXIS_Y);

        // b first, then a.
        let combined = x.concatenating(y).rotate(Vec3::AXIS_X);
        let stepwise = x.rotate(y.rotate(Vec3::AXIS_X));
        assert_abs_diff_eq!(combined, stepwise, epsilon = 1e-6);
    }
}
