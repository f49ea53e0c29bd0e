//! JSON output backend (feature `json`).
//!
//! Buffers everything in memory and writes two pretty-printed files on
//! [`finish`][PlanWriter::finish]:
//! - `plan.json`: array of plans, each an array of activity objects
//! - `edits.json`: array of edit-log objects

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::writer::PlanWriter;
use crate::{EditRow, OutputResult, PlanRow};

/// Writes plans and the edit log as JSON documents.
pub struct JsonWriter {
    dir:      PathBuf,
    plans:    Vec<Value>,
    edits:    Vec<Value>,
    finished: bool,
}

impl JsonWriter {
    /// Target `dir`; it must already exist.  Nothing is written until
    /// `finish`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("output directory {} does not exist", dir.display()),
            )
            .into());
        }
        Ok(Self { dir: dir.to_path_buf(), plans: Vec::new(), edits: Vec::new(), finished: false })
    }

    fn write_file(&self, name: &str, value: &Value) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(self.dir.join(name))?);
        serde_json::to_writer_pretty(&mut out, value)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

fn plan_row(row: &PlanRow) -> Value {
    json!({
        "number":                 row.number,
        "activity_id":            row.activity_id,
        "place":                  row.place,
        "label":                  row.label,
        "category":               (!row.category.is_empty()).then_some(&row.category),
        "location":               (!row.location.is_empty()).then_some(&row.location),
        "start":                  row.start,
        "end":                    row.end,
        "duration_minutes":       row.duration_minutes,
        "travel_minutes_to_next": row.travel_minutes_to_next,
    })
}

impl PlanWriter for JsonWriter {
    fn write_plan(&mut self, rows: &[PlanRow]) -> OutputResult<()> {
        self.plans.push(Value::Array(rows.iter().map(plan_row).collect()));
        Ok(())
    }

    fn write_edit(&mut self, row: &EditRow) -> OutputResult<()> {
        self.edits.push(json!({
            "revision":       row.revision,
            "command":        row.command,
            "activities":     row.activities,
            "schedule_start": row.schedule_start,
            "total_minutes":  row.total_minutes,
        }));
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let plans = std::mem::take(&mut self.plans);
        self.write_file("plan.json", &Value::Array(plans))?;
        let edits = std::mem::take(&mut self.edits);
        self.write_file("edits.json", &Value::Array(edits))?;
        Ok(())
    }
}
