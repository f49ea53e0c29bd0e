//! `Itinerary` — the ordered activity sequence and its reflow pass.
//!
//! # Reflow model
//!
//! Start times are never edited directly.  They are derived from the anchor
//! and the ordered durations/travel gaps:
//!
//! ```text
//! start[0] = schedule_start
//! start[i] = start[i-1] + duration[i-1] + travel[i-1]
//! ```
//!
//! Every public mutator follows the same three steps:
//!
//! 1. validate the request against the current state,
//! 2. build a candidate sequence and reflow it (one left-to-right pass),
//! 3. swap the candidate in.
//!
//! A failure in step 1 or 2 drops the candidate, so the itinerary a caller
//! observes is always either the old consistent state or the new one.
//!
//! # Day boundary
//!
//! Reflow works in unbounded minute offsets.  An activity may end exactly at
//! midnight but may not start at or after it, nor end after it; such an edit
//! fails with [`ScheduleError::DayOverflow`].  The last activity's travel gap
//! has no successor and is not counted.

use it_core::{ActivityId, ClockTime, IdAllocator, MINUTES_PER_DAY};

use crate::activity::{Activity, PlaceSeed, SeedDefaults};
use crate::{ScheduleError, ScheduleResult};

/// An ordered, always-reflowed list of activities anchored at a start time.
#[derive(Clone, Debug)]
pub struct Itinerary {
    schedule_start: ClockTime,
    /// Optional end of the planning window (informational; see
    /// [`overrun_minutes`][Self::overrun_minutes]).
    schedule_end: Option<ClockTime>,
    /// Visit order.
    activities: Vec<Activity>,
    ids: IdAllocator,
    defaults: SeedDefaults,
}

impl Itinerary {
    /// An empty itinerary anchored at `schedule_start`.
    pub fn new(schedule_start: ClockTime) -> Self {
        Self {
            schedule_start,
            schedule_end: None,
            activities: Vec::new(),
            ids: IdAllocator::new(),
            defaults: SeedDefaults::default(),
        }
    }

    /// Replace the stay/travel lengths used for seeds that leave them unset.
    pub fn with_defaults(mut self, defaults: SeedDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Build an itinerary from selected places in visit order.
    pub fn from_seeds(
        schedule_start: ClockTime,
        seeds: impl IntoIterator<Item = PlaceSeed>,
        defaults: SeedDefaults,
    ) -> ScheduleResult<Self> {
        let mut itinerary = Self::new(schedule_start).with_defaults(defaults);
        let mut candidate = Vec::new();
        for seed in seeds {
            candidate.push(Activity::new(itinerary.ids.next_id(), seed, defaults)?);
        }
        itinerary.commit(schedule_start, candidate)?;
        Ok(itinerary)
    }

    /// Reassemble an itinerary from already-identified activities.  Used by
    /// snapshot restore; ids must be unique.
    pub(crate) fn from_parts(
        schedule_start: ClockTime,
        schedule_end: Option<ClockTime>,
        activities: Vec<Activity>,
        defaults: SeedDefaults,
    ) -> ScheduleResult<Self> {
        let mut seen = std::collections::HashSet::with_capacity(activities.len());
        for a in &activities {
            if !seen.insert(a.id()) {
                return Err(ScheduleError::InvalidValue(format!("duplicate activity id {}", a.id())));
            }
        }
        check_window(schedule_start, schedule_end)?;
        let ids = match activities.iter().map(Activity::id).max() {
            Some(last) => IdAllocator::resume_after(last),
            None => IdAllocator::new(),
        };
        let mut itinerary = Self { schedule_start, schedule_end, activities: Vec::new(), ids, defaults };
        itinerary.commit(schedule_start, activities)?;
        Ok(itinerary)
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn schedule_start(&self) -> ClockTime {
        self.schedule_start
    }

    #[inline]
    pub fn schedule_end(&self) -> Option<ClockTime> {
        self.schedule_end
    }

    pub fn defaults(&self) -> SeedDefaults {
        self.defaults
    }

    /// Activities in visit order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Current index of `id`, or `None`.
    pub fn position(&self, id: ActivityId) -> Option<usize> {
        self.activities.iter().position(|a| a.id() == id)
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id() == id)
    }

    /// Derived start times, in visit order.
    pub fn start_times(&self) -> Vec<ClockTime> {
        self.activities.iter().map(Activity::start_time).collect()
    }

    /// End of the last activity, or `None` for an empty itinerary.
    pub fn end_time(&self) -> Option<ClockTime> {
        self.activities.last().map(Activity::end_time)
    }

    /// Minutes from the anchor to the end of the last activity.
    pub fn total_minutes(&self) -> u32 {
        self.activities
            .last()
            .map(|a| {
                let start_offset = (a.start_time().minutes() - self.schedule_start.minutes()) as u32;
                start_offset + a.duration_minutes()
            })
            .unwrap_or(0)
    }

    /// How far the last activity runs past `schedule_end`, if it does.
    ///
    /// `None` when there is no end set, the itinerary is empty, or the plan
    /// fits the window.
    pub fn overrun_minutes(&self) -> Option<u32> {
        let end = self.schedule_end?;
        if self.activities.is_empty() {
            return None;
        }
        let finish = self.schedule_start.minutes() as u32 + self.total_minutes();
        let limit = end.minutes() as u32;
        (finish > limit).then(|| finish - limit)
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Move the anchor.  Every start time shifts by the same amount.
    pub fn set_schedule_start(&mut self, start: ClockTime) -> ScheduleResult<()> {
        check_window(start, self.schedule_end)?;
        let candidate = self.activities.clone();
        self.commit(start, candidate)
    }

    /// Set or clear the end of the planning window.
    pub fn set_schedule_end(&mut self, end: Option<ClockTime>) -> ScheduleResult<()> {
        check_window(self.schedule_start, end)?;
        self.schedule_end = end;
        Ok(())
    }

    /// Change the stay length of `id`.  Negative values are rejected.
    pub fn set_duration(&mut self, id: ActivityId, minutes: i64) -> ScheduleResult<()> {
        let idx = self.index_of(id)?;
        let minutes = non_negative(minutes, "duration")?;
        let mut candidate = self.activities.clone();
        candidate[idx].set_duration(minutes);
        self.commit(self.schedule_start, candidate)
    }

    /// Change the travel gap after `id`.  Negative values are rejected.
    pub fn set_travel_time(&mut self, id: ActivityId, minutes: i64) -> ScheduleResult<()> {
        let idx = self.index_of(id)?;
        let minutes = non_negative(minutes, "travel time")?;
        let mut candidate = self.activities.clone();
        candidate[idx].set_travel(minutes);
        self.commit(self.schedule_start, candidate)
    }

    /// Relabel `id`.  Timing is unaffected.
    pub fn set_label(&mut self, id: ActivityId, label: impl Into<String>) -> ScheduleResult<()> {
        let idx = self.index_of(id)?;
        self.activities[idx].set_label(label.into());
        Ok(())
    }

    /// Move `id` to `target_index` (clamped to `[0, len-1]`) as a stable
    /// array move.  Returns the index the activity ended up at.
    ///
    /// Only positions change: every activity keeps its own id, place,
    /// duration, and travel gap.  Moving an activity onto its own index is a
    /// no-op.
    pub fn reorder(&mut self, id: ActivityId, target_index: usize) -> ScheduleResult<usize> {
        let from = self.index_of(id)?;
        let to = target_index.min(self.activities.len() - 1);
        if from == to {
            return Ok(to);
        }
        let mut candidate = self.activities.clone();
        let moved = candidate.remove(from);
        candidate.insert(to, moved);
        self.commit(self.schedule_start, candidate)?;
        Ok(to)
    }

    /// Create an activity from `seed` at `at_index` (clamped to `[0, len]`).
    pub fn insert(&mut self, seed: PlaceSeed, at_index: usize) -> ScheduleResult<ActivityId> {
        let id = self.ids.peek();
        let activity = Activity::new(id, seed, self.defaults)?;
        let at = at_index.min(self.activities.len());
        let mut candidate = self.activities.clone();
        candidate.insert(at, activity);
        self.commit(self.schedule_start, candidate)?;
        // Only consume the id once the insert has been committed.
        self.ids.next_id();
        Ok(id)
    }

    /// Append an activity at the end of the itinerary.
    pub fn push(&mut self, seed: PlaceSeed) -> ScheduleResult<ActivityId> {
        self.insert(seed, self.activities.len())
    }

    /// Remove `id`, returning the activity as it was before removal.
    pub fn remove(&mut self, id: ActivityId) -> ScheduleResult<Activity> {
        let idx = self.index_of(id)?;
        let mut candidate = self.activities.clone();
        let removed = candidate.remove(idx);
        self.commit(self.schedule_start, candidate)?;
        Ok(removed)
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn index_of(&self, id: ActivityId) -> ScheduleResult<usize> {
        self.position(id).ok_or(ScheduleError::NotFound(id))
    }

    /// Reflow `candidate` from `start` and, only if that succeeds, make it
    /// the current state.
    fn commit(&mut self, start: ClockTime, mut candidate: Vec<Activity>) -> ScheduleResult<()> {
        reflow(start, &mut candidate)?;
        self.schedule_start = start;
        self.activities = candidate;
        tracing::trace!(
            start = %self.schedule_start,
            activities = self.activities.len(),
            total_minutes = self.total_minutes(),
            "itinerary reflowed"
        );
        Ok(())
    }
}

// ── Reflow ────────────────────────────────────────────────────────────────────

/// Recompute every start time in one pass.  On error `activities` may hold
/// partially updated start times; callers discard it.
fn reflow(start: ClockTime, activities: &mut [Activity]) -> ScheduleResult<()> {
    let day = MINUTES_PER_DAY as u64;
    let mut offset = start.minutes() as u64;

    for activity in activities.iter_mut() {
        let end = offset + activity.duration_minutes() as u64;
        if offset >= day || end > day {
            return Err(ScheduleError::DayOverflow { id: activity.id(), reaches: end.max(offset) });
        }
        // offset < 1440 was just checked.
        activity.set_start(ClockTime::from_minutes(offset as u16)?);
        offset = end + activity.travel_minutes_to_next() as u64;
    }
    Ok(())
}

fn non_negative(minutes: i64, what: &str) -> ScheduleResult<u32> {
    if minutes < 0 {
        return Err(ScheduleError::InvalidValue(format!("{what} must not be negative, got {minutes}")));
    }
    u32::try_from(minutes)
        .map_err(|_| ScheduleError::InvalidValue(format!("{what} of {minutes} minutes is too large")))
}

fn check_window(start: ClockTime, end: Option<ClockTime>) -> ScheduleResult<()> {
    match end {
        Some(end) if end <= start => Err(ScheduleError::InvalidWindow {
            start: start.to_string(),
            end:   end.to_string(),
        }),
        _ => Ok(()),
    }
}
