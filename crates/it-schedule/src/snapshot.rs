//! Read-only serialisable record of a finalized plan.
//!
//! A `PlanSnapshot` carries the anchor, the optional window end, and one
//! entry per activity with its derived start and end times so that a
//! share/display layer never has to reflow anything itself.

use it_core::{ActivityId, ClockTime};
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, PlaceSeed, SeedDefaults};
use crate::{Itinerary, ScheduleResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub schedule_start: ClockTime,
    pub schedule_end:   Option<ClockTime>,
    pub total_minutes:  u32,
    pub activities:     Vec<SnapshotEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub id:                     ActivityId,
    pub place:                  String,
    pub label:                  String,
    pub category:               Option<String>,
    pub location:               Option<String>,
    pub start:                  ClockTime,
    pub end:                    ClockTime,
    pub duration_minutes:       u32,
    pub travel_minutes_to_next: u32,
}

impl From<&Activity> for SnapshotEntry {
    fn from(a: &Activity) -> Self {
        Self {
            id:                     a.id(),
            place:                  a.place().to_owned(),
            label:                  a.label().to_owned(),
            category:               a.category().map(str::to_owned),
            location:               a.location().map(str::to_owned),
            start:                  a.start_time(),
            end:                    a.end_time(),
            duration_minutes:       a.duration_minutes(),
            travel_minutes_to_next: a.travel_minutes_to_next(),
        }
    }
}

impl Itinerary {
    /// Freeze the current state.
    pub fn snapshot(&self) -> PlanSnapshot {
        PlanSnapshot {
            schedule_start: self.schedule_start(),
            schedule_end:   self.schedule_end(),
            total_minutes:  self.total_minutes(),
            activities:     self.iter().map(SnapshotEntry::from).collect(),
        }
    }

    /// Rebuild an editable itinerary from a snapshot.
    ///
    /// Ids are preserved.  The stored `start`/`end`/`total_minutes` values
    /// are ignored and recomputed by a fresh reflow.
    pub fn from_snapshot(snapshot: &PlanSnapshot, defaults: SeedDefaults) -> ScheduleResult<Self> {
        let activities = snapshot
            .activities
            .iter()
            .map(|e| {
                let seed = PlaceSeed {
                    place:            e.place.clone(),
                    label:            e.label.clone(),
                    category:         e.category.clone(),
                    location:         e.location.clone(),
                    duration_minutes: Some(e.duration_minutes),
                    travel_minutes:   Some(e.travel_minutes_to_next),
                };
                Activity::new(e.id, seed, defaults)
            })
            .collect::<ScheduleResult<Vec<_>>>()?;
        Itinerary::from_parts(snapshot.schedule_start, snapshot.schedule_end, activities, defaults)
    }
}
