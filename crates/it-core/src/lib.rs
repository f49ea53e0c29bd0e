//! `it-core` — foundational types for the itinerary planner.
//!
//! Every other `it-*` crate depends on this one.  It has no `it-*`
//! dependencies and only `thiserror` as a required external one (plus
//! optional `serde`/`serde_json`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`time`]    | `ClockTime`, `Meridiem`, `TwelveHour`                      |
//! | [`stay`]    | `StayDuration` — hours/minutes split of a stay length      |
//! | [`ids`]     | `ActivityId`, `IdAllocator`                                |
//! | [`config`]  | `PlannerConfig` — editing-session defaults                 |
//! | [`error`]   | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types and     |
//! |         | enables `PlannerConfig::from_json_*`.                      |

pub mod config;
pub mod error;
pub mod ids;
pub mod stay;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{ActivityId, IdAllocator};
pub use stay::StayDuration;
pub use time::{ClockTime, MINUTES_PER_DAY, Meridiem, TwelveHour};
