//! The surface ray-cast boundary.
//!
//! The session never talks to the tracking runtime directly; it polls a
//! [`SurfaceRaycaster`] once per update cycle. A miss is simply `None` - no
//! error, no state transition, the caller retries next frame.
//!
//! [`Ray`] and [`DetectedPlane`] cover the common implementation case of
//! intersecting an unprojected camera ray with detected horizontal planes,
//! including the infinite-plane drag mode.

use ruler_math::Vec3;

/// A point in screen space (pixels), typically the reticle position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// Horizontal pixel coordinate.
    pub x: f32,
    /// Vertical pixel coordinate.
    pub y: f32,
}

impl ScreenPoint {
    /// Creates a screen point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Opaque identifier of a detected planar surface.
///
/// Keeps a measurement attached to the correct surface across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneId(u64);

impl PlaneId {
    /// Wraps a raw identifier from the tracking runtime.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A successful surface hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Where the cast ray met the surface, in world coordinates.
    pub world_point: Vec3,
    /// The surface that was hit.
    pub plane: PlaneId,
}

/// The hit-testing service the session polls once per update cycle.
pub trait SurfaceRaycaster {
    /// Casts a ray through `screen` and returns the nearest surface hit.
    ///
    /// `None` is the miss path; the session skips the update and retries on
    /// the next cycle.
    fn cast_ray(&self, screen: ScreenPoint) -> Option<SurfaceHit>;
}

/// A world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Ray direction; need not be normalized, must be non-zero.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray from an origin and a direction.
    #[must_use]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Returns the point at parametric distance `t` along the ray.
    #[must_use]
    pub fn point_at(self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A detected horizontal plane, the surface type the tracking runtime finds.
///
/// # Example
///
/// ```
/// use ruler_math::Vec3;
/// use ruler_measure::{DetectedPlane, PlaneId, Ray};
///
/// let floor = DetectedPlane::new(PlaneId::new(1), Vec3::ZERO, Vec3::new(2.0, 0.0, 2.0));
/// let ray = Ray::new(Vec3::new(0.5, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
///
/// let hit = floor.intersect(ray, false).unwrap();
/// assert_eq!(hit.world_point, Vec3::new(0.5, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectedPlane {
    /// Surface identifier.
    pub id: PlaneId,
    /// Plane center in world coordinates.
    pub center: Vec3,
    /// Full extents; only X and Z are meaningful for a horizontal plane.
    pub extent: Vec3,
}

impl DetectedPlane {
    /// Creates a detected plane.
    #[must_use]
    pub const fn new(id: PlaneId, center: Vec3, extent: Vec3) -> Self {
        Self { id, center, extent }
    }

    /// Intersects a ray with this plane.
    ///
    /// Solves the parametric hit against the plane `y = center.y`. With
    /// `infinite` set, the extent test is skipped - the plane behaves as an
    /// unbounded surface, the drag mode used once a measurement is anchored.
    /// Rays parallel to the plane or pointing away from it miss.
    #[must_use]
    pub fn intersect(&self, ray: Ray, infinite: bool) -> Option<SurfaceHit> {
        if ray.direction.y.abs() < f32::EPSILON {
            return None;
        }

        let t = (self.center.y - ray.origin.y) / ray.direction.y;
        if t < 0.0 {
            return None;
        }

        let point = ray.point_at(t);
        if !infinite {
            let dx = (point.x - self.center.x).abs();
            let dz = (point.z - self.center.z).abs();
            if dx > self.extent.x / 2.0 || dz > self.extent.z / 2.0 {
                return None;
            }
        }

        Some(SurfaceHit {
            world_point: point,
            plane: self.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> DetectedPlane {
        DetectedPlane::new(PlaneId::new(1), Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0))
    }

    #[test]
    fn test_ray_point_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.point_at(5.0), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_intersect_within_extent() {
        let ray = Ray::new(Vec3::new(0.25, 1.0, -0.25), Vec3::new(0.0, -1.0, 0.0));
        let hit = floor().intersect(ray, false).unwrap();
        assert_eq!(hit.world_point, Vec3::new(0.25, 0.0, -0.25));
        assert_eq!(hit.plane, PlaneId::new(1));
    }

    #[test]
    fn test_intersect_outside_extent_misses() {
        let ray = Ray::new(Vec3::new(3.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(floor().intersect(ray, false), None);
    }

    #[test]
    fn test_infinite_plane_ignores_extent() {
        let ray = Ray::new(Vec3::new(3.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = floor().intersect(ray, true).unwrap();
        assert_eq!(hit.world_point, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(floor().intersect(ray, true), None);
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(floor().intersect(ray, true), None);
    }
}
