//! `PlaceSeed` (what a picker hands us) and `Activity` (one itinerary entry).

use it_core::{ActivityId, ClockTime, StayDuration};
use serde::{Deserialize, Serialize};

use crate::{ScheduleError, ScheduleResult};

// ── PlaceSeed ─────────────────────────────────────────────────────────────────

/// The `(place, label, stay)` tuple a place/category picker supplies.
///
/// `duration_minutes` and `travel_minutes` are optional; the itinerary fills
/// gaps from its [`SeedDefaults`].
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaceSeed {
    pub place:            String,
    pub label:            String,
    pub category:         Option<String>,
    pub location:         Option<String>,
    pub duration_minutes: Option<u32>,
    pub travel_minutes:   Option<u32>,
}

impl PlaceSeed {
    pub fn new(place: impl Into<String>, label: impl Into<String>) -> Self {
        Self { place: place.into(), label: label.into(), ..Self::default() }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn with_travel(mut self, minutes: u32) -> Self {
        self.travel_minutes = Some(minutes);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Stay and travel lengths used when a seed leaves them unset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SeedDefaults {
    pub stay_minutes:   u32,
    pub travel_minutes: u32,
}

impl Default for SeedDefaults {
    fn default() -> Self {
        Self { stay_minutes: 60, travel_minutes: 0 }
    }
}

// ── Activity ──────────────────────────────────────────────────────────────────

/// One entry of an [`Itinerary`][crate::Itinerary].
///
/// `id` is fixed at construction.  `start_time` is owned by the itinerary's
/// reflow pass and has no public setter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    id:                     ActivityId,
    place:                  String,
    label:                  String,
    category:               Option<String>,
    location:               Option<String>,
    duration_minutes:       u32,
    travel_minutes_to_next: u32,
    start_time:             ClockTime,
}

impl Activity {
    /// Validate `seed` and build an activity.  The start time is left at
    /// midnight until the owning itinerary reflows.
    pub fn new(id: ActivityId, seed: PlaceSeed, defaults: SeedDefaults) -> ScheduleResult<Self> {
        let place = seed.place.trim();
        if place.is_empty() {
            return Err(ScheduleError::InvalidValue("place name must not be empty".into()));
        }
        Ok(Self {
            id,
            place:                  place.to_owned(),
            label:                  seed.label,
            category:               seed.category.filter(|c| !c.is_empty()),
            location:               seed.location.filter(|l| !l.is_empty()),
            duration_minutes:       seed.duration_minutes.unwrap_or(defaults.stay_minutes),
            travel_minutes_to_next: seed.travel_minutes.unwrap_or(defaults.travel_minutes),
            start_time:             ClockTime::MIDNIGHT,
        })
    }

    #[inline]
    pub fn id(&self) -> ActivityId {
        self.id
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Gap before the next activity.  Ignored for the last activity.
    #[inline]
    pub fn travel_minutes_to_next(&self) -> u32 {
        self.travel_minutes_to_next
    }

    #[inline]
    pub fn start_time(&self) -> ClockTime {
        self.start_time
    }

    /// `start_time + duration`, wrapping at midnight (an activity that ends
    /// exactly at midnight reports `00:00`).
    pub fn end_time(&self) -> ClockTime {
        self.start_time.add_minutes(self.duration_minutes as i32)
    }

    pub fn stay(&self) -> StayDuration {
        StayDuration::from_minutes(self.duration_minutes)
    }

    // ── Crate-internal mutation (always followed by a reflow) ─────────────

    pub(crate) fn set_duration(&mut self, minutes: u32) {
        self.duration_minutes = minutes;
    }

    pub(crate) fn set_travel(&mut self, minutes: u32) {
        self.travel_minutes_to_next = minutes;
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub(crate) fn set_start(&mut self, start: ClockTime) {
        self.start_time = start;
    }
}
