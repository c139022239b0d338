//! Session configuration.

use serde::{Deserialize, Serialize};

/// Feature flags carried by the host, loaded once at startup.
///
/// An explicit struct passed by value, replacing ambient key-value settings:
/// the host reads it from its preference store and hands it to whatever
/// component needs it. The core itself only echoes these flags back (a
/// raycaster implementation typically honors `drag_on_infinite_planes`).
///
/// # Example
///
/// ```
/// use ruler_measure::SessionConfig;
///
/// let config = SessionConfig::default();
/// assert!(config.drag_on_infinite_planes);
/// assert!(!config.show_debug_overlay);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Draw detected-plane and statistics overlays.
    pub show_debug_overlay: bool,
    /// Use the tracking runtime's ambient light estimation.
    pub light_estimation: bool,
    /// Keep dragging against an infinite extension of the anchor plane once
    /// a measurement has started.
    pub drag_on_infinite_planes: bool,
    /// Index of the selected decoration object in the host's catalog.
    pub selected_object: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_debug_overlay: false,
            light_estimation: false,
            drag_on_infinite_planes: true,
            selected_object: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert!(!config.show_debug_overlay);
        assert!(!config.light_estimation);
        assert!(config.drag_on_infinite_planes);
        assert_eq!(config.selected_object, 0);
    }
}
