//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `plan.csv`
//! - `edits.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::PlanWriter;
use crate::{EditRow, OutputResult, PlanRow};

/// Writes plan rows and the edit log to two CSV files.
pub struct CsvWriter {
    plan:     Writer<File>,
    edits:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut plan = Writer::from_path(dir.join("plan.csv"))?;
        plan.write_record([
            "number",
            "activity_id",
            "place",
            "label",
            "category",
            "location",
            "start",
            "end",
            "duration_minutes",
            "travel_minutes_to_next",
        ])?;

        let mut edits = Writer::from_path(dir.join("edits.csv"))?;
        edits.write_record(["revision", "command", "activities", "schedule_start", "total_minutes"])?;

        Ok(Self { plan, edits, finished: false })
    }
}

impl PlanWriter for CsvWriter {
    fn write_plan(&mut self, rows: &[PlanRow]) -> OutputResult<()> {
        for row in rows {
            self.plan.write_record(&[
                row.number.to_string(),
                row.activity_id.to_string(),
                row.place.clone(),
                row.label.clone(),
                row.category.clone(),
                row.location.clone(),
                row.start.clone(),
                row.end.clone(),
                row.duration_minutes.to_string(),
                row.travel_minutes_to_next.to_string(),
            ])?;
        }
        // A plan is the unit a reader waits for.
        self.plan.flush()?;
        Ok(())
    }

    fn write_edit(&mut self, row: &EditRow) -> OutputResult<()> {
        self.edits.write_record(&[
            row.revision.to_string(),
            row.command.to_owned(),
            row.activities.to_string(),
            row.schedule_start.clone(),
            row.total_minutes.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.plan.flush()?;
        self.edits.flush()?;
        Ok(())
    }
}
