//! `it-editor` — the editing-session façade over an [`Itinerary`].
//!
//! # Write path
//!
//! ```text
//! UI event ─► EditCommand ─► ScheduleEditor::apply
//!                               ├─ validate + mutate + reflow (it-schedule)
//!                               ├─ revision += 1
//!                               └─ EditorObserver::on_applied / on_rejected
//! ```
//!
//! # Read path
//!
//! ```text
//! ScheduleEditor::view() ─► ScheduleView { rows: [ViewRow { start, end, .. }] }
//! ScheduleEditor::finalize() ─► PlanSnapshot (serialisable)
//! ```
//!
//! Commands are applied strictly one at a time; the editor owns the
//! itinerary exclusively and needs no locking.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use it_core::PlannerConfig;
//! use it_editor::EditorBuilder;
//!
//! let mut editor = EditorBuilder::new(PlannerConfig::default())
//!     .catalog(load_catalog_csv(path)?)
//!     .build()?;
//! let cafe = editor.select_place("Blue Bottle Coffee")?;
//! editor.nudge_duration(cafe, 2)?;
//! let plan = editor.finalize();
//! ```
//!
//! [`Itinerary`]: it_schedule::Itinerary

pub mod builder;
pub mod command;
pub mod editor;
pub mod error;
pub mod observer;
pub mod view;


pub use builder::EditorBuilder;
pub use command::{CommandOutcome, EditCommand};
pub use editor::ScheduleEditor;
pub use error::{EditorError, EditorResult};
pub use observer::{EditorObserver, NoopObserver};
pub use view::{ScheduleView, ViewRow};
