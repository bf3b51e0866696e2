//! Error model for the `lt` command.

use thiserror::Error;
use worklog_api::{ApiError, StatusCode};

pub type Result<T> = std::result::Result<T, LogTimeError>;

/// Every variant ends the invocation with exit status 1.
#[derive(Debug, Error)]
pub enum LogTimeError {
    #[error("Invalid time format. Time should be a number optionally followed by 'm' or 'h'.")]
    InvalidDurationFormat { input: String },
    #[error("Missing required parameters.")]
    MissingArguments,
    #[error("start time out of range for {seconds}s logged {days_offset} day(s) back")]
    StartOutOfRange { seconds: u64, days_offset: i64 },
    #[error("HTTP {status}")]
    HttpFailure { status: StatusCode },
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogTimeError {
    pub fn exit_code(&self) -> u8 {
        1
    }
}
