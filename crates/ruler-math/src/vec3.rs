//! Single-precision 3D vector.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// A 3D vector with single-precision components.
///
/// Arithmetic operators are componentwise; scalar multiplication and division
/// apply to every component. Division by a zero scalar or zero component is
/// the caller's responsibility to avoid, as in any unchecked numeric kernel.
///
/// # Example
///
/// ```
/// use ruler_math::Vec3;
///
/// let a = Vec3::new(1.0, 2.0, 3.0);
/// let b = Vec3::new(4.0, 5.0, 6.0);
///
/// assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
/// assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
/// assert_eq!(a.dot(b), 32.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::splat(0.0);

    /// The all-ones vector.
    pub const ONE: Self = Self::splat(1.0);

    /// Unit vector along X.
    pub const AXIS_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along Y.
    pub const AXIS_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along Z.
    pub const AXIS_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with the same value in every component.
    #[must_use]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the Euclidean norm.
    ///
    /// Never negative; zero if and only if the vector is exactly zero.
    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns a unit-length vector in the same direction.
    ///
    /// The zero vector is returned unchanged; there is no division by zero.
    ///
    /// # Example
    ///
    /// ```
    /// use ruler_math::Vec3;
    ///
    /// let v = Vec3::new(3.0, 0.0, 4.0).normalized();
    /// assert!((v.length() - 1.0).abs() < 1e-6);
    /// assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    /// ```
    #[must_use]
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return self;
        }
        self / length
    }

    /// Normalizes in place. See [`Vec3::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Clamps the length to `max_length`.
    ///
    /// A no-op when the vector is already within the limit; otherwise the
    /// result points in the same direction with length exactly `max_length`.
    ///
    /// # Example
    ///
    /// ```
    /// use ruler_math::Vec3;
    ///
    /// let v = Vec3::new(3.0, 4.0, 0.0).clamp_length(2.5);
    /// assert!((v.length() - 2.5).abs() < 1e-6);
    /// assert_eq!(Vec3::AXIS_X.clamp_length(2.0), Vec3::AXIS_X);
    /// ```
    #[must_use]
    pub fn clamp_length(self, max_length: f32) -> Self {
        if self.length() <= max_length {
            self
        } else {
            self.normalized() * max_length
        }
    }

    /// Returns the dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product.
    ///
    /// Anti-commutative; zero for parallel inputs.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Reads the component selected by `axis`.
    #[must_use]
    pub const fn value(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Writes the component selected by `axis`, leaving the others untouched.
    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

/// Arithmetic mean over a sequence of vectors.
///
/// Returns `None` for an empty sequence. Used to smooth noisy hit-test
/// samples before feeding them into a measurement.
///
/// # Example
///
/// ```
/// use ruler_math::{Vec3, average};
///
/// let mean = average([Vec3::new(1.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)]);
/// assert_eq!(mean, Some(Vec3::new(2.0, 0.0, 0.0)));
/// assert_eq!(average([]), None);
/// ```
#[must_use]
pub fn average<I>(vectors: I) -> Option<Vec3>
where
    I: IntoIterator<Item = Vec3>,
{
    let mut sum = Vec3::ZERO;
    let mut count: u32 = 0;
    for v in vectors {
        sum += v;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = count as f32;
    Some(sum / count)
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Componentwise product.
impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

/// Componentwise quotient.
impl Div for Vec3 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec3 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(components: [f32; 3]) -> Self {
        Self::new(components[0], components[1], components[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<f32>> for Vec3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for nalgebra::Vector3<f32> {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f32>> for Vec3 {
    fn from(p: nalgebra::Point3<f32>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vec3> for nalgebra::Point3<f32> {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl approx::AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl approx::RelativeEq for Vec3 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_componentwise_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_assign_operators() {
        let mut v = Vec3::new(1.0, 1.0, 1.0);
        v += Vec3::ONE;
        v *= 3.0;
        assert_eq!(v, Vec3::splat(6.0));
        v /= 2.0;
        assert_eq!(v, Vec3::splat(3.0));
        v -= Vec3::ONE;
        assert_eq!(v, Vec3::splat(2.0));
        v *= Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vec3::new(2.0, 4.0, 6.0));
        v /= Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_length() {
        assert_abs_diff_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn test_normalized_unit_length() {
        let v = Vec3::new(10.0, -3.0, 0.5).normalized();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalized_zero_is_identity() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_in_place() {
        let mut v = Vec3::new(0.0, 2.0, 0.0);
        v.normalize();
        assert_eq!(v, Vec3::AXIS_Y);
    }

    #[test]
    fn test_clamp_within_limit_unchanged() {
        let v = Vec3::new(0.3, 0.0, 0.4);
        assert_eq!(v.clamp_length(1.0), v);
    }

    #[test]
    fn test_clamp_rescales_to_limit() {
        let v = Vec3::new(3.0, 4.0, 0.0).clamp_length(1.0);
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-6);
        // Same direction as the input.
        assert_abs_diff_eq!(v, Vec3::new(0.6, 0.8, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_dot() {
        assert_eq!(Vec3::AXIS_X.dot(Vec3::AXIS_Y), 0.0);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn test_cross_anti_commutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn test_cross_parallel_is_zero() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a.cross(a), Vec3::ZERO);
        assert_eq!(a.cross(a * 2.0), Vec3::ZERO);
    }

    #[test]
    fn test_cross_right_handed() {
        assert_eq!(Vec3::AXIS_X.cross(Vec3::AXIS_Y), Vec3::AXIS_Z);
    }

    #[test]
    fn test_axis_access() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.value(Axis::X), 1.0);
        assert_eq!(v.value(Axis::Y), 2.0);
        assert_eq!(v.value(Axis::Z), 3.0);

        v.set_axis(Axis::Y, 9.0);
        assert_eq!(v, Vec3::new(1.0, 9.0, 3.0));
    }

    #[test]
    fn test_average_empty_is_none() {
        assert_eq!(average([]), None);
    }

    #[test]
    fn test_average_mean() {
        let mean = average([Vec3::new(1.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)]);
        assert_eq!(mean, Some(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let n: nalgebra::Vector3<f32> = v.into();
        assert_eq!(Vec3::from(n), v);
    }

    #[test]
    fn test_approx_comparisons() {
        use approx::{assert_relative_eq, relative_ne};

        let a = Vec3::new(1000.0, -2.0, 0.5);
        let b = a + Vec3::splat(1e-4);
        assert_abs_diff_eq!(a, b, epsilon = 1e-3);
        assert_relative_eq!(a, b, max_relative = 1e-3);
        assert!(relative_ne!(a, a + Vec3::AXIS_Y, max_relative = 1e-6));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1.0, 2.5, -3.0).to_string(), "(1.00, 2.50, -3.00)");
    }
}
