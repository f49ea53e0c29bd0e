//! Plain data row types written by output backends.

use it_schedule::{PlanSnapshot, SnapshotEntry};

/// One activity of a finalized plan, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    /// 1-based visit number.
    pub number:                 usize,
    pub activity_id:            u32,
    pub place:                  String,
    pub label:                  String,
    /// Empty string when unset.
    pub category:               String,
    pub location:               String,
    /// `HH:MM`.
    pub start:                  String,
    pub end:                    String,
    pub duration_minutes:       u32,
    pub travel_minutes_to_next: u32,
}

impl PlanRow {
    pub fn from_entry(number: usize, e: &SnapshotEntry) -> Self {
        Self {
            number,
            activity_id:            e.id.get(),
            place:                  e.place.clone(),
            label:                  e.label.clone(),
            category:               e.category.clone().unwrap_or_default(),
            location:               e.location.clone().unwrap_or_default(),
            start:                  e.start.to_string(),
            end:                    e.end.to_string(),
            duration_minutes:       e.duration_minutes,
            travel_minutes_to_next: e.travel_minutes_to_next,
        }
    }

    /// All rows of `snapshot`, in visit order.
    pub fn from_snapshot(snapshot: &PlanSnapshot) -> Vec<Self> {
        snapshot
            .activities
            .iter()
            .enumerate()
            .map(|(i, e)| Self::from_entry(i + 1, e))
            .collect()
    }
}

/// One applied edit in the session log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRow {
    pub revision:       u64,
    /// [`EditCommand::kind`][it_editor::EditCommand::kind].
    pub command:        &'static str,
    pub activities:     usize,
    pub schedule_start: String,
    pub total_minutes:  u32,
}
