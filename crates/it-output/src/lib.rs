//! `it-output` — plan and edit-log writers for the itinerary planner.
//!
//! Two backends are provided:
//!
//! | Feature          | Backend | Files created                |
//! |------------------|---------|------------------------------|
//! | *(none)*         | CSV     | `plan.csv`, `edits.csv`      |
//! | `json` (default) | JSON    | `plan.json`, `edits.json`    |
//!
//! Both implement [`PlanWriter`] and are driven by [`PlanOutputObserver`],
//! which implements `it_editor::EditorObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use it_output::{CsvWriter, PlanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./out"))?;
//! let mut editor = EditorBuilder::new(config)
//!     .places(chosen)
//!     .observer(PlanOutputObserver::new(writer))
//!     .build()?;
//! editor.reorder(id, 0)?;
//! editor.finalize();
//! let (_, mut obs) = editor.into_parts();
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "json")]
pub mod json;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlanOutputObserver;
pub use row::{EditRow, PlanRow};
pub use writer::PlanWriter;

#[cfg(feature = "json")]
pub use json::JsonWriter;
