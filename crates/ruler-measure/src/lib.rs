//! Measurement line state machine for the measuring-tape core.
//!
//! This crate turns continuous camera-ray hit-test results into a stable
//! two-point line with a formatted length:
//!
//! - [`Line`] - One measurement: an axis-aligned endpoint box plus the render
//!   handles derived from it (endpoint markers, connecting segment, label)
//! - [`MeasurementSession`] - Lifecycle over lines: waiting for a surface,
//!   dragging the far endpoint, finalizing into a history
//! - [`Side`] - Named box sides for edge moves without knowing raw fields
//! - [`LengthUnit`] and [`LengthFormatter`] - Closed unit table and fixed
//!   one-decimal display formatting
//! - [`SurfaceRaycaster`] - The boundary to the host's hit-testing service,
//!   with [`Ray`]/[`DetectedPlane`] helpers for plane intersection
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero rendering-framework dependencies**.
//! The host polls its raycaster once per rendered frame, feeds hits into the
//! session, and draws whatever the line's scene nodes describe.
//!
//! # Example
//!
//! ```
//! use ruler_math::Vec3;
//! use ruler_measure::{
//!     PlaneId, ScreenPoint, SurfaceHit, SurfaceRaycaster, MeasurementSession,
//!     SessionState,
//! };
//!
//! struct TableTop;
//!
//! impl SurfaceRaycaster for TableTop {
//!     fn cast_ray(&self, _screen: ScreenPoint) -> Option<SurfaceHit> {
//!         Some(SurfaceHit {
//!             world_point: Vec3::new(0.5, 0.0, 0.0),
//!             plane: PlaneId::new(7),
//!         })
//!     }
//! }
//!
//! let mut session = MeasurementSession::new(TableTop);
//! let center = ScreenPoint::new(160.0, 240.0);
//! assert!(session.begin(center));
//! assert_eq!(session.state(), SessionState::Active);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod line;
mod node;
mod raycast;
mod session;
mod side;
mod units;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use line::Line;
pub use node::{HorizontalAlignment, NodeGeometry, SceneNode, VerticalAlignment};
pub use raycast::{DetectedPlane, PlaneId, Ray, ScreenPoint, SurfaceHit, SurfaceRaycaster};
pub use session::{MeasurementSession, SessionState};
pub use side::Side;
pub use units::{LengthFormatter, LengthUnit};
