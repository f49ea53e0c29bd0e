use it_core::{ActivityId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A negative or otherwise unusable field value.  The itinerary is
    /// left unchanged.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("activity {0} not found")]
    NotFound(ActivityId),

    #[error("index {index} out of range for itinerary of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The edit would push an activity past midnight.
    #[error("activity {id} would run past midnight (reaches minute {reaches} of the day)")]
    DayOverflow { id: ActivityId, reaches: u64 },

    #[error("schedule end {end} must be after schedule start {start}")]
    InvalidWindow { start: String, end: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
