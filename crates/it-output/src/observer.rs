//! `PlanOutputObserver<W>` — bridges `EditorObserver` to a `PlanWriter`.

use it_editor::{EditCommand, EditorObserver};
use it_schedule::{Itinerary, PlanSnapshot};

use crate::row::{EditRow, PlanRow};
use crate::writer::PlanWriter;
use crate::{OutputError, OutputResult};

/// An [`EditorObserver`] that logs every applied edit and writes each
/// finalized plan to any [`PlanWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  Check with [`take_error`][Self::take_error], or call
/// [`finish`][Self::finish] which surfaces a stored error first.
pub struct PlanOutputObserver<W: PlanWriter> {
    writer:     W,
    /// Also log every applied edit, not just finalized plans.
    log_edits:  bool,
    last_error: Option<OutputError>,
}

impl<W: PlanWriter> PlanOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, log_edits: true, last_error: None }
    }

    /// Write finalized plans only.
    pub fn without_edit_log(mut self) -> Self {
        self.log_edits = false;
        self
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Return the first stored error, otherwise flush and close the writer.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the session).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "plan output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: PlanWriter> EditorObserver for PlanOutputObserver<W> {
    fn on_applied(&mut self, revision: u64, command: &EditCommand, itinerary: &Itinerary) {
        if !self.log_edits {
            return;
        }
        let row = EditRow {
            revision,
            command:        command.kind(),
            activities:     itinerary.len(),
            schedule_start: itinerary.schedule_start().to_string(),
            total_minutes:  itinerary.total_minutes(),
        };
        let result = self.writer.write_edit(&row);
        self.store_err(result);
    }

    fn on_finalize(&mut self, snapshot: &PlanSnapshot) {
        let rows = PlanRow::from_snapshot(snapshot);
        let result = self.writer.write_plan(&rows);
        self.store_err(result);
    }
}
