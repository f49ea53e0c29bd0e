use it_core::CoreError;
use it_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("place {0:?} is not in the catalog")]
    UnknownPlace(String),

    #[error("no activity at place {0:?}")]
    PlaceNotSelected(String),
}

pub type EditorResult<T> = Result<T, EditorError>;
