use std::fmt;

use crate::error::CoreError;

const MAGNITUDES: [f32; 10] = [0.3, 0.6, 0.9, 1.2, 1.5, 1.8, 2.1, 2.4, 2.7, 3.0];

const LABELS: [&str; 10] = [
    "Very Slow",
    "Slow",
    "Slow",
    "Medium Slow",
    "Medium",
    "Medium",
    "Medium Fast",
    "Fast",
    "Very Fast",
    "Extreme",
];

/// Slider position in `1..=10`, mapped to a per-frame displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(level: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(CoreError::InvalidSpeedLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Pixels moved per frame.
    pub fn magnitude(self) -> f32 {
        MAGNITUDES[usize::from(self.0 - 1)]
    }

    pub fn label(self) -> &'static str {
        LABELS[usize::from(self.0 - 1)]
    }

    pub fn all() -> impl Iterator<Item = SpeedLevel> {
        (Self::MIN..=Self::MAX).map(SpeedLevel)
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for SpeedLevel {
    type Error = CoreError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
