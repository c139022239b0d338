//! Display units and length formatting.

use serde::{Deserialize, Serialize};

/// A display unit for measured lengths.
///
/// A closed table: every unit carries a fixed (multiplier, suffix) pair
/// converting from the tracking runtime's native meters. Extend by adding
/// cases, never by runtime lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Centimeters; 1 m = 100 cm.
    Centimeters,
    /// The app's internal abstract ruler unit.
    Ruler,
}

impl LengthUnit {
    /// Returns the (multiplier from meters, display suffix) pair.
    ///
    /// # Example
    ///
    /// ```
    /// use ruler_measure::LengthUnit;
    ///
    /// assert_eq!(LengthUnit::Centimeters.rate(), (100.0, "cm"));
    /// ```
    #[must_use]
    pub const fn rate(self) -> (f32, &'static str) {
        match self {
            Self::Centimeters => (100.0, "cm"),
            Self::Ruler => (10.0, "ruler"),
        }
    }
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Centimeters
    }
}

/// Formats raw lengths (meters) for the on-screen label.
///
/// The multiplier and the single fraction digit are fixed configuration, not
/// user-adjustable.
///
/// # Example
///
/// ```
/// use ruler_measure::{LengthFormatter, LengthUnit};
///
/// let formatter = LengthFormatter::new(LengthUnit::Centimeters);
/// assert_eq!(formatter.format_value(1.0), "100.0");
/// assert_eq!(formatter.format(1.0), "100.0 cm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFormatter {
    unit: LengthUnit,
}

impl LengthFormatter {
    /// Creates a formatter for the given unit.
    #[must_use]
    pub const fn new(unit: LengthUnit) -> Self {
        Self { unit }
    }

    /// The unit this formatter displays in.
    #[must_use]
    pub const fn unit(self) -> LengthUnit {
        self.unit
    }

    /// Formats a length in meters as a bare number, one decimal place.
    #[must_use]
    pub fn format_value(self, meters: f32) -> String {
        format!("{:.1}", meters * self.unit.rate().0)
    }

    /// Formats a length in meters with the unit suffix appended.
    #[must_use]
    pub fn format(self, meters: f32) -> String {
        format!("{} {}", self.format_value(meters), self.unit.rate().1)
    }
}

impl Default for LengthFormatter {
    fn default() -> Self {
        Self::new(LengthUnit::default())
    }
}
