//! The `ScheduleEditor` session object.

use it_core::{ActivityId, ClockTime, PlannerConfig, StayDuration, TwelveHour};
use it_schedule::{Itinerary, PlaceSeed, PlanSnapshot, ScheduleError, find_place};

use crate::{CommandOutcome, EditCommand, EditorError, EditorObserver, EditorResult, ScheduleView};

/// Exclusive owner of one itinerary for the length of an editing session.
///
/// Every write goes through [`apply`][Self::apply], one command at a time;
/// each command sees the fully reflowed result of the previous one.  The
/// convenience methods (`reorder`, `set_duration`, …) build the matching
/// [`EditCommand`] and apply it.
///
/// Create via [`EditorBuilder`][crate::EditorBuilder].
pub struct ScheduleEditor<O: EditorObserver> {
    itinerary: Itinerary,
    config:    PlannerConfig,
    /// Places that can be added by name.
    catalog:   Vec<PlaceSeed>,
    observer:  O,
    /// Number of commands applied so far.
    revision:  u64,
}

impl<O: EditorObserver> ScheduleEditor<O> {
    pub(crate) fn from_parts(
        itinerary: Itinerary,
        config: PlannerConfig,
        catalog: Vec<PlaceSeed>,
        observer: O,
    ) -> Self {
        Self { itinerary, config, catalog, observer, revision: 0 }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[PlaceSeed] {
        &self.catalog
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Re-derive the renderable view from the current state.
    pub fn view(&self) -> ScheduleView {
        ScheduleView::from_itinerary(&self.itinerary)
    }

    // ── Command application ───────────────────────────────────────────────

    /// Apply one command.  On error the itinerary is unchanged and the
    /// observer's `on_rejected` hook fires.
    pub fn apply(&mut self, command: EditCommand) -> EditorResult<CommandOutcome> {
        match self.dispatch(&command) {
            Ok(outcome) => {
                self.revision += 1;
                tracing::debug!(
                    revision = self.revision,
                    ?outcome,
                    activities = self.itinerary.len(),
                    "edit applied"
                );
                self.observer.on_applied(self.revision, &command, &self.itinerary);
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!(error = %err, ?command, "edit rejected");
                self.observer.on_rejected(&command, &err);
                Err(err)
            }
        }
    }

    /// Apply commands in order, stopping at the first rejection.  Commands
    /// before the failing one stay applied.  Returns the number applied.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = EditCommand>) -> EditorResult<usize> {
        let mut applied = 0;
        for command in commands {
            self.apply(command)?;
            applied += 1;
        }
        Ok(applied)
    }

    fn dispatch(&mut self, command: &EditCommand) -> EditorResult<CommandOutcome> {
        let it = &mut self.itinerary;
        let outcome = match command {
            EditCommand::SetScheduleStart(start) => {
                it.set_schedule_start(*start)?;
                CommandOutcome::Updated
            }
            EditCommand::SetScheduleEnd(end) => {
                it.set_schedule_end(*end)?;
                CommandOutcome::Updated
            }
            EditCommand::SetDuration { id, minutes } => {
                if it.position(*id).is_none() {
                    return Err(ScheduleError::NotFound(*id).into());
                }
                check_stay(&self.config, *minutes)?;
                it.set_duration(*id, *minutes)?;
                CommandOutcome::Updated
            }
            EditCommand::SetTravelTime { id, minutes } => {
                it.set_travel_time(*id, *minutes)?;
                CommandOutcome::Updated
            }
            EditCommand::SetLabel { id, label } => {
                it.set_label(*id, label.clone())?;
                CommandOutcome::Updated
            }
            EditCommand::Reorder { id, target_index } => {
                CommandOutcome::Moved(it.reorder(*id, *target_index)?)
            }
            EditCommand::Insert { seed, at_index } => {
                let stay = seed.duration_minutes.unwrap_or(it.defaults().stay_minutes);
                check_stay(&self.config, stay as i64)?;
                CommandOutcome::Inserted(it.insert(seed.clone(), *at_index)?)
            }
            EditCommand::Remove(id) => {
                it.remove(*id)?;
                CommandOutcome::Removed(*id)
            }
        };
        Ok(outcome)
    }

    // ── Anchor / window ───────────────────────────────────────────────────

    pub fn set_schedule_start(&mut self, start: ClockTime) -> EditorResult<()> {
        self.apply(EditCommand::SetScheduleStart(start)).map(drop)
    }

    /// Set the anchor from `HH:MM` text.
    pub fn set_schedule_start_text(&mut self, text: &str) -> EditorResult<()> {
        let start: ClockTime = text.parse()?;
        self.set_schedule_start(start)
    }

    /// Set the anchor from the three values of a 12-hour picker.
    pub fn set_schedule_start_twelve_hour(&mut self, period: &str, hour: &str, minute: &str) -> EditorResult<()> {
        let start = ClockTime::from(TwelveHour::parse_parts(period, hour, minute)?);
        self.set_schedule_start(start)
    }

    pub fn set_schedule_end(&mut self, end: Option<ClockTime>) -> EditorResult<()> {
        self.apply(EditCommand::SetScheduleEnd(end)).map(drop)
    }

    // ── Per-activity edits ────────────────────────────────────────────────

    pub fn set_duration(&mut self, id: ActivityId, minutes: i64) -> EditorResult<()> {
        self.apply(EditCommand::SetDuration { id, minutes }).map(drop)
    }

    /// Set a stay from separate hour and minute fields.
    pub fn set_stay(&mut self, id: ActivityId, stay: StayDuration) -> EditorResult<()> {
        self.set_duration(id, stay.total_minutes() as i64)
    }

    /// Grow (`steps > 0`) or shrink (`steps < 0`) a stay by whole
    /// `duration_step_minutes` steps.  Shrinking below zero is rejected.
    pub fn nudge_duration(&mut self, id: ActivityId, steps: i32) -> EditorResult<()> {
        let current = self
            .itinerary
            .get(id)
            .ok_or(ScheduleError::NotFound(id))?
            .duration_minutes() as i64;
        let step = self.config.duration_step_minutes as i64;
        self.set_duration(id, current + steps as i64 * step)
    }

    pub fn set_travel_time(&mut self, id: ActivityId, minutes: i64) -> EditorResult<()> {
        self.apply(EditCommand::SetTravelTime { id, minutes }).map(drop)
    }

    pub fn set_label(&mut self, id: ActivityId, label: impl Into<String>) -> EditorResult<()> {
        self.apply(EditCommand::SetLabel { id, label: label.into() }).map(drop)
    }

    // ── Ordering ──────────────────────────────────────────────────────────

    /// Completed drag: move `id` to `target_index`.  Returns the final index.
    pub fn reorder(&mut self, id: ActivityId, target_index: usize) -> EditorResult<usize> {
        match self.apply(EditCommand::Reorder { id, target_index })? {
            CommandOutcome::Moved(index) => Ok(index),
            _ => Ok(target_index.min(self.itinerary.len().saturating_sub(1))),
        }
    }

    /// Completed drag reported by positions.  `from` must name an existing
    /// row; `to` is clamped.
    pub fn reorder_by_index(&mut self, from: usize, to: usize) -> EditorResult<usize> {
        let len = self.itinerary.len();
        let id = self
            .itinerary
            .activities()
            .get(from)
            .map(|a| a.id())
            .ok_or(ScheduleError::IndexOutOfRange { index: from, len })?;
        self.reorder(id, to)
    }

    // ── Structural edits ──────────────────────────────────────────────────

    pub fn insert(&mut self, seed: PlaceSeed, at_index: usize) -> EditorResult<ActivityId> {
        match self.apply(EditCommand::Insert { seed, at_index })? {
            CommandOutcome::Inserted(id) => Ok(id),
            _ => Err(ScheduleError::IndexOutOfRange { index: at_index, len: self.itinerary.len() }.into()),
        }
    }

    /// Append `seed` at the end of the itinerary.
    pub fn add_place(&mut self, seed: PlaceSeed) -> EditorResult<ActivityId> {
        let at = self.itinerary.len();
        self.insert(seed, at)
    }

    /// Append the catalog entry named `place`.
    pub fn select_place(&mut self, place: &str) -> EditorResult<ActivityId> {
        let seed = find_place(&self.catalog, place)
            .cloned()
            .ok_or_else(|| EditorError::UnknownPlace(place.to_owned()))?;
        self.add_place(seed)
    }

    pub fn remove(&mut self, id: ActivityId) -> EditorResult<()> {
        self.apply(EditCommand::Remove(id)).map(drop)
    }

    /// Remove the first activity at `place` (a picker deselection).
    pub fn deselect_place(&mut self, place: &str) -> EditorResult<ActivityId> {
        let id = self
            .itinerary
            .iter()
            .find(|a| a.place() == place)
            .map(|a| a.id())
            .ok_or_else(|| EditorError::PlaceNotSelected(place.to_owned()))?;
        self.remove(id)?;
        Ok(id)
    }

    // ── Finalize ──────────────────────────────────────────────────────────

    /// Snapshot the current plan for display/sharing.  The session stays
    /// open and may keep editing.
    pub fn finalize(&mut self) -> PlanSnapshot {
        let snapshot = self.itinerary.snapshot();
        tracing::info!(
            activities = snapshot.activities.len(),
            total_minutes = snapshot.total_minutes,
            revision = self.revision,
            "plan finalized"
        );
        self.observer.on_finalize(&snapshot);
        snapshot
    }

    /// Close the session, handing back the itinerary and observer.
    pub fn into_parts(self) -> (Itinerary, O) {
        (self.itinerary, self.observer)
    }
}

/// Reject a stay longer than `config.max_stay_minutes`.  Every path that sets
/// a stay (edit, insert, session open) goes through here.
pub(crate) fn check_stay(config: &PlannerConfig, minutes: i64) -> EditorResult<()> {
    if minutes > config.max_stay_minutes as i64 {
        return Err(ScheduleError::InvalidValue(format!(
            "stay of {minutes} minutes exceeds the {} minute limit",
            config.max_stay_minutes
        ))
        .into());
    }
    Ok(())
}
