use reqwest::StatusCode;

/// Result of a single worklog submission as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorklogOutcome {
    Success {
        issue_id: String,
    },
    Failure {
        status: StatusCode,
        body: String,
        hint: Option<&'static str>,
    },
}

impl WorklogOutcome {
    /// Only `201 Created` counts as success; any other status, 2xx included,
    /// is a failure.
    pub fn from_response(issue_id: &str, status: StatusCode, body: String) -> Self {
        if status == StatusCode::CREATED {
            WorklogOutcome::Success {
                issue_id: issue_id.to_string(),
            }
        } else {
            WorklogOutcome::Failure {
                status,
                body,
                hint: hint_for(status),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WorklogOutcome::Success { .. })
    }

    pub fn message(&self) -> String {
        match self {
            WorklogOutcome::Success { issue_id } => {
                format!("Successfully logged time to {}.", issue_id)
            }
            WorklogOutcome::Failure { status, body, .. } => {
                format!("Failed to log time: HTTP {} - {}", status.as_u16(), body)
            }
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            WorklogOutcome::Success { .. } => None,
            WorklogOutcome::Failure { hint, .. } => *hint,
        }
    }
}

pub fn hint_for(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::UNAUTHORIZED => Some("Check your API token or permissions."),
        StatusCode::NOT_FOUND => {
            Some("Issue ID not found. Please check the issue ID and try again.")
        }
        StatusCode::BAD_REQUEST => Some("Bad request. Please check the format of the request."),
        StatusCode::INTERNAL_SERVER_ERROR => {
            Some("Internal server error. There might be a configuration issue on the server.")
        }
        _ => None,
    }
}
