//! Measurement session lifecycle.

use tracing::{debug, info};

use ruler_math::Vec3;

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::line::Line;
use crate::raycast::{ScreenPoint, SurfaceRaycaster};
use crate::side::Side;
use crate::units::LengthUnit;

/// Where the session is in a measurement's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No endpoint established; every cycle retries the surface cast.
    WaitingForSurface,
    /// One endpoint fixed; the second tracks live hit-test results.
    Active,
}

/// Drives measurement lines from continuous hit-test results.
///
/// Single-threaded by design: the host calls into the session once per
/// rendered frame or gesture update, on the context that owns the scene
/// state. A raycast miss never advances the state; the host simply retries
/// on the next cycle.
///
/// # Example
///
/// ```
/// use ruler_math::Vec3;
/// use ruler_measure::{
///     MeasurementSession, PlaneId, ScreenPoint, SessionState, SurfaceHit,
///     SurfaceRaycaster,
/// };
///
/// struct Tabletop;
///
/// impl SurfaceRaycaster for Tabletop {
///     fn cast_ray(&self, _screen: ScreenPoint) -> Option<SurfaceHit> {
///         Some(SurfaceHit {
///             world_point: Vec3::ZERO,
///             plane: PlaneId::new(1),
///         })
///     }
/// }
///
/// let mut session = MeasurementSession::new(Tabletop);
/// let reticle = ScreenPoint::new(160.0, 240.0);
///
/// assert!(session.begin(reticle));
/// session.update(reticle);
/// session.complete().unwrap();
///
/// assert_eq!(session.state(), SessionState::WaitingForSurface);
/// assert_eq!(session.completed().len(), 1);
/// ```
#[derive(Debug)]
pub struct MeasurementSession<R> {
    raycaster: R,
    config: SessionConfig,
    unit: LengthUnit,
    current: Option<Line>,
    completed: Vec<Line>,
}

impl<R: SurfaceRaycaster> MeasurementSession<R> {
    /// Creates a session with default configuration and centimeter display.
    #[must_use]
    pub fn new(raycaster: R) -> Self {
        Self::with_config(raycaster, SessionConfig::default())
    }

    /// Creates a session with explicit configuration.
    #[must_use]
    pub fn with_config(raycaster: R, config: SessionConfig) -> Self {
        Self {
            raycaster,
            config,
            unit: LengthUnit::default(),
            current: None,
            completed: Vec::new(),
        }
    }

    /// Sets the display unit for subsequently started measurements.
    #[must_use]
    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::Active
        } else {
            SessionState::WaitingForSurface
        }
    }

    /// The session configuration, as handed in by the host.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The raycaster this session polls.
    #[must_use]
    pub const fn raycaster(&self) -> &R {
        &self.raycaster
    }

    /// The measurement in progress, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Line> {
        self.current.as_ref()
    }

    /// Finished measurements, oldest first.
    #[must_use]
    pub fn completed(&self) -> &[Line] {
        &self.completed
    }

    /// Tries to start a measurement at the surface under `screen`.
    ///
    /// On a hit the hit point becomes the box's min corner and the surface
    /// identifier is captured on the line. Returns whether a measurement
    /// started; a miss, or calling while already active, leaves the state
    /// untouched.
    pub fn begin(&mut self, screen: ScreenPoint) -> bool {
        if self.current.is_some() {
            return false;
        }
        let Some(hit) = self.raycaster.cast_ray(screen) else {
            return false;
        };

        debug!(point = %hit.world_point, plane = hit.plane.raw(), "surface located, measurement started");
        self.current = Some(Line::anchored(hit.world_point, self.unit, hit.plane));
        true
    }

    /// Steady-state update: drives the box's far side to the surface point
    /// under `screen` and returns the current length in meters.
    ///
    /// `None` when nothing is in progress or the cast missed; neither case
    /// transitions the state.
    pub fn update(&mut self, screen: ScreenPoint) -> Option<f32> {
        let line = self.current.as_mut()?;
        let hit = self.raycaster.cast_ray(screen)?;

        line.move_side(Side::Right, hit.world_point.x);
        Some(line.length())
    }

    /// Drives the far side to an explicit world point, for hosts that smooth
    /// samples (see [`ruler_math::SampleBuffer`]) before applying them.
    pub fn update_with_point(&mut self, point: Vec3) -> Option<f32> {
        let line = self.current.as_mut()?;
        line.move_side(Side::Right, point.x);
        Some(line.length())
    }

    /// Finalizes the measurement in progress, appending it to the history.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoActiveMeasurement`] when nothing is in progress.
    pub fn complete(&mut self) -> SessionResult<()> {
        let line = self
            .current
            .take()
            .ok_or(SessionError::NoActiveMeasurement)?;

        debug!(length_m = line.length(), total = self.completed.len() + 1, "measurement finalized");
        self.completed.push(line);
        Ok(())
    }

    /// Discards the measurement in progress without recording it.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoActiveMeasurement`] when nothing is in progress.
    pub fn cancel(&mut self) -> SessionResult<()> {
        let line = self
            .current
            .take()
            .ok_or(SessionError::NoActiveMeasurement)?;

        debug!(length_m = line.length(), "measurement cancelled");
        Ok(())
    }

    /// Drops the in-progress and completed measurements.
    ///
    /// The host is expected to re-initialize its tracking session alongside.
    pub fn reset(&mut self) {
        info!(discarded = self.completed.len() + usize::from(self.current.is_some()), "session reset");
        self.current = None;
        self.completed.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use ruler_math::Vec3;

    use super::*;
    use crate::raycast::{PlaneId, SurfaceHit};

    /// Replays a fixed sequence of cast results, then misses forever.
    struct Scripted {
        results: RefCell<VecDeque<Option<SurfaceHit>>>,
    }

    impl Scripted {
        fn new<I>(results: I) -> Self
        where
            I: IntoIterator<Item = Option<Vec3>>,
        {
            let results = results
                .into_iter()
                .map(|point| {
                    point.map(|world_point| SurfaceHit {
                        world_point,
                        plane: PlaneId::new(42),
                    })
                })
                .collect();
            Self {
                results: RefCell::new(results),
            }
        }
    }

    impl SurfaceRaycaster for Scripted {
        fn cast_ray(&self, _screen: ScreenPoint) -> Option<SurfaceHit> {
            self.results.borrow_mut().pop_front().flatten()
        }
    }

    fn reticle() -> ScreenPoint {
        ScreenPoint::new(160.0, 240.0)
    }

    #[test]
    fn test_begin_on_miss_stays_waiting() {
        let mut session = MeasurementSession::new(Scripted::new([None]));
        assert!(!session.begin(reticle()));
        assert_eq!(session.state(), SessionState::WaitingForSurface);
    }

    #[test]
    fn test_begin_on_hit_anchors_line() {
        let mut session = MeasurementSession::new(Scripted::new([Some(Vec3::ZERO)]));
        assert!(session.begin(reticle()));
        assert_eq!(session.state(), SessionState::Active);

        let line = session.current().unwrap();
        assert_eq!(line.bounds().min, Vec3::ZERO);
        assert_eq!(line.plane(), Some(PlaneId::new(42)));
    }

    #[test]
    fn test_update_miss_is_a_noop() {
        let mut session = MeasurementSession::new(Scripted::new([
            Some(Vec3::ZERO),
            Some(Vec3::new(0.5, 0.0, 0.0)),
            None,
        ]));
        session.begin(reticle());

        assert_eq!(session.update(reticle()), Some(0.5));
        // The miss: length unchanged, still active.
        assert_eq!(session.update(reticle()), None);
        assert_eq!(session.state(), SessionState::Active);
        assert!((session.current().unwrap().length() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_update_without_begin_returns_none() {
        let mut session = MeasurementSession::new(Scripted::new([Some(Vec3::ZERO)]));
        assert_eq!(session.update(reticle()), None);
    }

    #[test]
    fn test_complete_requires_active() {
        let mut session = MeasurementSession::new(Scripted::new([]));
        assert_eq!(session.complete(), Err(SessionError::NoActiveMeasurement));
        assert_eq!(session.cancel(), Err(SessionError::NoActiveMeasurement));
    }

    #[test]
    fn test_update_with_point_drives_far_side() {
        let mut session = MeasurementSession::new(Scripted::new([Some(Vec3::ZERO)]));
        session.begin(reticle());
        assert_eq!(session.update_with_point(Vec3::new(0.25, 0.0, 0.0)), Some(0.25));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = MeasurementSession::new(Scripted::new([
            Some(Vec3::ZERO),
            Some(Vec3::new(1.0, 0.0, 0.0)),
        ]));
        session.begin(reticle());
        session.update(reticle());
        session.complete().unwrap();

        session.reset();
        assert_eq!(session.state(), SessionState::WaitingForSurface);
        assert!(session.completed().is_empty());
    }

    #[test]
    fn test_unit_flows_into_started_lines() {
        let mut session =
            MeasurementSession::new(Scripted::new([Some(Vec3::ZERO)])).with_unit(LengthUnit::Ruler);
        session.begin(reticle());
        assert_eq!(
            session.current().unwrap().formatter().unit(),
            LengthUnit::Ruler
        );
    }
}
