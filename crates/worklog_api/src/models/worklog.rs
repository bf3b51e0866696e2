use chrono::{DateTime, Utc};
use serde::Serialize;

/// Wire shape of `started`: millisecond precision with a literal `+0000`
/// offset. The server rejects the `Z` and `+00:00` spellings.
pub const STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f+0000";

/// Payload for `POST issue/{issueId}/worklog`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogRequest {
    #[serde(skip)]
    pub issue_id: String,
    pub time_spent_seconds: u64,
    pub started: String,
    pub comment: String,
}

impl WorklogRequest {
    pub fn new(
        issue_id: impl Into<String>,
        started: DateTime<Utc>,
        time_spent_seconds: u64,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            issue_id: issue_id.into(),
            time_spent_seconds,
            started: format_started(started),
            comment: comment.into(),
        }
    }

    /// Resource path relative to the API root.
    pub fn path(&self) -> String {
        format!("issue/{}/worklog", self.issue_id)
    }
}

pub fn format_started(at: DateTime<Utc>) -> String {
    at.format(STARTED_FORMAT).to_string()
}
