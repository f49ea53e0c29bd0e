//! The `PlanWriter` trait implemented by all backend writers.

use crate::{EditRow, OutputResult, PlanRow};

/// Trait implemented by the CSV and JSON writers.
///
/// Errors are stored by the observer and retrieved with
/// [`PlanOutputObserver::take_error`][crate::PlanOutputObserver::take_error].
pub trait PlanWriter {
    /// Write the rows of one finalized plan.  Each call appends.
    fn write_plan(&mut self, rows: &[PlanRow]) -> OutputResult<()>;

    /// Record one applied edit.
    fn write_edit(&mut self, row: &EditRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
