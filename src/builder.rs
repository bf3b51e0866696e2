//! Worklog payload construction.

use chrono::{DateTime, Duration, Utc};
use worklog_api::WorklogRequest;

use crate::clock::{Clock, SystemClock};
use crate::error::{LogTimeError, Result};

pub const COMMENT_MARKER: &str = "(Created by Log Time CLI)";

/// What to send as the comment when no description was given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyComment {
    /// The marker on its own.
    #[default]
    Marker,
    /// An empty string.
    Blank,
}

impl EmptyComment {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "marker" => Some(EmptyComment::Marker),
            "blank" => Some(EmptyComment::Blank),
            _ => None,
        }
    }
}

pub fn compose_comment(description: &str, empty: EmptyComment) -> String {
    if !description.is_empty() {
        format!("{} {}", description, COMMENT_MARKER)
    } else {
        match empty {
            EmptyComment::Marker => COMMENT_MARKER.to_string(),
            EmptyComment::Blank => String::new(),
        }
    }
}

pub struct WorklogBuilder<C = SystemClock> {
    clock: C,
    empty_comment: EmptyComment,
}

impl<C: Clock> WorklogBuilder<C> {
    pub fn new(clock: C, empty_comment: EmptyComment) -> Self {
        Self {
            clock,
            empty_comment,
        }
    }

    /// Start of a `seconds`-long session that ended `days_offset` days
    /// before now.
    pub fn start_time(&self, seconds: u64, days_offset: i64) -> Result<DateTime<Utc>> {
        let out_of_range = || LogTimeError::StartOutOfRange {
            seconds,
            days_offset,
        };
        let days = Duration::try_days(days_offset).ok_or_else(out_of_range)?;
        let spent = i64::try_from(seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(out_of_range)?;

        self.clock
            .now()
            .checked_sub_signed(days)
            .and_then(|at| at.checked_sub_signed(spent))
            .ok_or_else(out_of_range)
    }

    pub fn build(
        &self,
        issue_id: &str,
        seconds: u64,
        description: &str,
        days_offset: i64,
    ) -> Result<WorklogRequest> {
        let started = self.start_time(seconds, days_offset)?;
        Ok(WorklogRequest::new(
            issue_id,
            started,
            seconds,
            compose_comment(description, self.empty_comment),
        ))
    }
}
