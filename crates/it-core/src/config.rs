//! Editing-session configuration.
//!
//! Typically loaded from a JSON file by the application and handed to the
//! editor builder.  Every field has a default, so a partial file is fine.

use crate::{ClockTime, CoreError, CoreResult};

/// Defaults and limits applied by an editing session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Anchor used when a session is opened without an explicit start time.
    pub default_start: ClockTime,

    /// Optional end of the planning window.  Must be after `default_start`.
    pub default_end: Option<ClockTime>,

    /// Stay length given to a newly chosen place with no stay of its own.
    pub default_stay_minutes: u32,

    /// Travel gap given to a newly chosen place with no travel time of its own.
    pub default_travel_minutes: u32,

    /// Size of one "nudge" step on a stay-length editor.  Must be > 0.
    pub duration_step_minutes: u32,

    /// Longest stay an editor will accept for a single place.
    pub max_stay_minutes: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_start:          ClockTime::raw(10 * 60),
            default_end:            Some(ClockTime::raw(18 * 60)),
            default_stay_minutes:   120,
            default_travel_minutes: 15,
            duration_step_minutes:  15,
            max_stay_minutes:       11 * 60 + 45,
        }
    }
}

impl PlannerConfig {
    /// Check internal consistency.
    pub fn validate(&self) -> CoreResult<()> {
        if self.duration_step_minutes == 0 {
            return Err(CoreError::Config("duration_step_minutes must be > 0".into()));
        }
        if self.default_stay_minutes > self.max_stay_minutes {
            return Err(CoreError::Config(format!(
                "default_stay_minutes {} exceeds max_stay_minutes {}",
                self.default_stay_minutes, self.max_stay_minutes
            )));
        }
        if let Some(end) = self.default_end {
            if end <= self.default_start {
                return Err(CoreError::Config(format!(
                    "default_end {end} must be after default_start {}",
                    self.default_start
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON file.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: &std::path::Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
