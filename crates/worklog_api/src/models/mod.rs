mod outcome;
mod worklog;

pub use outcome::{hint_for, WorklogOutcome};
pub use worklog::{format_started, WorklogRequest, STARTED_FORMAT};
