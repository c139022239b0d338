//! Geometric kernel for the measuring-tape core.
//!
//! This crate provides the small self-contained math layer everything else in
//! the workspace builds on:
//!
//! - [`Vec3`] - Single-precision 3D vector with componentwise operators and
//!   axis-tagged access
//! - [`Axis`] - Coordinate axis tag for single-component reads and writes
//! - [`Quaternion`] - Rotation quaternion with half-angle construction and
//!   ordered composition
//! - [`Aabb`] - Axis-aligned bounding box with raw edge writes, ordering
//!   correction, and normalized interior lookup
//! - [`average`] and [`SampleBuffer`] - Arithmetic mean over vector samples,
//!   plus a keep-last-N buffer for smoothing noisy hit-test streams
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero rendering-framework dependencies**. It
//! can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Other engines and hosts
//!
//! # Coordinate System
//!
//! Matches the tracking runtime the measurements come from:
//! - X: width (left/right)
//! - Y: height (up/down)
//! - Z: depth (front/back)
//!
//! All lengths are in meters.
//!
//! # Example
//!
//! ```
//! use ruler_math::{Aabb, Vec3};
//!
//! let endpoints = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
//! assert!((endpoints.size().x - 1.0).abs() < 1e-6);
//! assert_eq!(endpoints.point_in_bounds(Vec3::splat(0.5)), endpoints.center());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod axis;
mod bounds;
mod quaternion;
mod sample;
mod vec3;

pub use axis::Axis;
pub use bounds::{Aabb, BoxEdge};
pub use quaternion::Quaternion;
pub use sample::SampleBuffer;
pub use vec3::{Vec3, average};
