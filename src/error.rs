use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid window: start={start}, end={end}")]
    InvalidWindow { start: String, end: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid event `{id}`: {reason}")]
    InvalidEvent { id: String, reason: String },

    #[error("unknown event: {0}")]
    UnknownEvent(String),

    #[error("duplicate event id: {0}")]
    DuplicateEvent(String),

    #[error("storage failure: {0}")]
    Storage(String),

    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}
