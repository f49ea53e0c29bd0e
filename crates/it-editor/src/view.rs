//! Renderable, read-only projection of an itinerary.

use it_core::{ActivityId, ClockTime, StayDuration};
use it_schedule::Itinerary;

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    /// 1-based visit number shown next to the entry.
    pub number:         usize,
    pub id:             ActivityId,
    pub place:          String,
    pub label:          String,
    pub category:       Option<String>,
    pub location:       Option<String>,
    pub start:          ClockTime,
    pub end:            ClockTime,
    pub stay:           StayDuration,
    /// `None` for the last row (no successor).
    pub travel_to_next: Option<u32>,
}

/// The whole schedule as a presentation layer needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleView {
    pub schedule_start:  ClockTime,
    pub schedule_end:    Option<ClockTime>,
    pub rows:            Vec<ViewRow>,
    pub total:           StayDuration,
    pub overrun_minutes: Option<u32>,
}

impl ScheduleView {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let last = itinerary.len().saturating_sub(1);
        let rows = itinerary
            .iter()
            .enumerate()
            .map(|(i, a)| ViewRow {
                number:         i + 1,
                id:             a.id(),
                place:          a.place().to_owned(),
                label:          a.label().to_owned(),
                category:       a.category().map(str::to_owned),
                location:       a.location().map(str::to_owned),
                start:          a.start_time(),
                end:            a.end_time(),
                stay:           a.stay(),
                travel_to_next: (i < last).then(|| a.travel_minutes_to_next()),
            })
            .collect();

        Self {
            schedule_start:  itinerary.schedule_start(),
            schedule_end:    itinerary.schedule_end(),
            rows,
            total:           StayDuration::from_minutes(itinerary.total_minutes()),
            overrun_minutes: itinerary.overrun_minutes(),
        }
    }

    /// `(place, start, end)` triples for a map layer.
    pub fn map_points(&self) -> impl Iterator<Item = (&str, ClockTime, ClockTime)> + '_ {
        self.rows.iter().map(|r| (r.place.as_str(), r.start, r.end))
    }

    /// `"10:00 - 18:00"`, or `"10:00 - 14:05"` when no window end is set.
    pub fn time_range_label(&self) -> String {
        let end = self
            .schedule_end
            .or_else(|| self.rows.last().map(|r| r.end))
            .unwrap_or(self.schedule_start);
        format!("{} - {}", self.schedule_start, end)
    }
}
