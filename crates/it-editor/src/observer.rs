//! Editor observer trait for view refresh and data collection.

use it_schedule::{Itinerary, PlanSnapshot};

use crate::{EditCommand, EditorError};

/// Callbacks invoked by [`ScheduleEditor`][crate::ScheduleEditor] after each
/// command.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — re-render on change
///
/// ```rust,ignore
/// struct Redraw { dirty: bool }
///
/// impl EditorObserver for Redraw {
///     fn on_applied(&mut self, _rev: u64, _cmd: &EditCommand, _it: &Itinerary) {
///         self.dirty = true;
///     }
/// }
/// ```
pub trait EditorObserver {
    /// Called after a command has been applied.  `itinerary` is already
    /// fully reflowed; `revision` counts applied commands since the session
    /// opened.
    fn on_applied(&mut self, _revision: u64, _command: &EditCommand, _itinerary: &Itinerary) {}

    /// Called when a command was rejected.  The itinerary is unchanged.
    fn on_rejected(&mut self, _command: &EditCommand, _error: &EditorError) {}

    /// Called once per [`finalize`][crate::ScheduleEditor::finalize].
    fn on_finalize(&mut self, _snapshot: &PlanSnapshot) {}
}

/// An [`EditorObserver`] that does nothing.
pub struct NoopObserver;

impl EditorObserver for NoopObserver {}

impl<O: EditorObserver + ?Sized> EditorObserver for &mut O {
    fn on_applied(&mut self, revision: u64, command: &EditCommand, itinerary: &Itinerary) {
        (**self).on_applied(revision, command, itinerary);
    }

    fn on_rejected(&mut self, command: &EditCommand, error: &EditorError) {
        (**self).on_rejected(command, error);
    }

    fn on_finalize(&mut self, snapshot: &PlanSnapshot) {
        (**self).on_finalize(snapshot);
    }
}
