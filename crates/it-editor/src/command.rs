//! Edit commands — the discrete writes an editing session accepts.

use it_core::{ActivityId, ClockTime};
use it_schedule::PlaceSeed;

/// One user edit, applied atomically by
/// [`ScheduleEditor::apply`][crate::ScheduleEditor::apply].
///
/// A drag gesture produces exactly one `Reorder` when it is released;
/// intermediate pointer positions never become commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    SetScheduleStart(ClockTime),

    /// Set (`Some`) or clear (`None`) the end of the planning window.
    SetScheduleEnd(Option<ClockTime>),

    /// `minutes` is signed so a UI "subtract" that goes below zero is
    /// representable and rejected rather than wrapped.
    SetDuration {
        id:      ActivityId,
        minutes: i64,
    },

    SetTravelTime {
        id:      ActivityId,
        minutes: i64,
    },

    SetLabel {
        id:    ActivityId,
        label: String,
    },

    /// Stable move of `id` to `target_index` (clamped).
    Reorder {
        id:           ActivityId,
        target_index: usize,
    },

    /// Add a new activity at `at_index` (clamped).
    Insert {
        seed:     PlaceSeed,
        at_index: usize,
    },

    Remove(ActivityId),
}

/// What a successfully applied command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A field or the anchor changed.
    Updated,
    /// The activity now sits at this index.
    Moved(usize),
    Inserted(ActivityId),
    Removed(ActivityId),
}

impl EditCommand {
    /// Short stable name, used in edit logs.
    pub fn kind(&self) -> &'static str {
        match self {
            EditCommand::SetScheduleStart(_) => "set_schedule_start",
            EditCommand::SetScheduleEnd(_) => "set_schedule_end",
            EditCommand::SetDuration { .. } => "set_duration",
            EditCommand::SetTravelTime { .. } => "set_travel_time",
            EditCommand::SetLabel { .. } => "set_label",
            EditCommand::Reorder { .. } => "reorder",
            EditCommand::Insert { .. } => "insert",
            EditCommand::Remove(_) => "remove",
        }
    }
}
