//! Stay lengths split into hours and minutes for display and editing.

use std::fmt;

/// A stay length as `hours` + `minutes` (`minutes < 60`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StayDuration {
    pub hours:   u32,
    pub minutes: u32,
}

impl StayDuration {
    pub fn from_minutes(total: u32) -> Self {
        Self { hours: total / 60, minutes: total % 60 }
    }

    /// Build from separately edited hour and minute fields.  Minutes above 59
    /// carry into hours.
    pub fn from_parts(hours: u32, minutes: u32) -> Self {
        Self::from_minutes(hours * 60 + minutes)
    }

    pub fn total_minutes(self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl From<u32> for StayDuration {
    fn from(total: u32) -> Self {
        Self::from_minutes(total)
    }
}

impl fmt::Display for StayDuration {
    /// `"1h 30m"`, `"2h"`, `"45m"`, `"0m"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.hours, self.minutes) {
            (0, m) => write!(f, "{m}m"),
            (h, 0) => write!(f, "{h}h"),
            (h, m) => write!(f, "{h}h {m}m"),
        }
    }
}
