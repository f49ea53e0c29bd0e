//! `it-schedule` — the itinerary model and its reflow engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`activity`]  | `PlaceSeed`, `SeedDefaults`, `Activity`                   |
//! | [`itinerary`] | `Itinerary` — ordered activities, reflow, reorder         |
//! | [`snapshot`]  | `PlanSnapshot`, `SnapshotEntry` — finalized, serialisable |
//! | [`loader`]    | `load_catalog_csv`, `load_catalog_reader`, `find_place`   |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Reflow (summary)
//!
//! ```text
//! start[0] = schedule_start
//! start[i] = start[i-1] + duration[i-1] + travel[i-1]
//! ```
//!
//! Recomputed in full after every mutation; mutators are all-or-nothing.

pub mod activity;
pub mod error;
pub mod itinerary;
pub mod loader;
pub mod snapshot;


pub use activity::{Activity, PlaceSeed, SeedDefaults};
pub use error::{ScheduleError, ScheduleResult};
pub use itinerary::Itinerary;
pub use loader::{find_place, load_catalog_csv, load_catalog_reader};
pub use snapshot::{PlanSnapshot, SnapshotEntry};
