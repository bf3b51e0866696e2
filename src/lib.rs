//! Log time against ITS PRO issues: argument handling, duration and
//! description parsing, worklog construction and outcome reporting.

use std::io::Write;

use colored::Colorize;
use log::debug;
use worklog_api::{WorklogClient, WorklogOutcome, WorklogRequest};

pub mod builder;
pub mod cli;
pub mod clock;
pub mod config;
pub mod description;
pub mod duration;
pub mod error;

use builder::WorklogBuilder;
use cli::{Invocation, USAGE};
use clock::Clock;
use config::Settings;
use description::{parse_description, ParsedDescription};
use duration::DurationParser;
use error::{LogTimeError, Result};

/// Turns validated arguments into the request that will be posted.
pub fn prepare_request<C: Clock>(
    invocation: &Invocation,
    settings: &Settings,
    clock: C,
) -> Result<WorklogRequest> {
    let seconds = DurationParser::new(settings.parser).parse_seconds(&invocation.time_spent)?;
    let description = if settings.parse_day_offset {
        parse_description(&invocation.description)
    } else {
        ParsedDescription {
            days_offset: 0,
            comment: invocation.description.clone(),
        }
    };

    WorklogBuilder::new(clock, settings.empty_comment).build(
        &invocation.issue_id,
        seconds,
        &description.comment,
        description.days_offset,
    )
}

/// Builds, submits and reports one worklog entry. A rejected submission is
/// returned as `HttpFailure` after its message has been written.
pub async fn run<C, W>(
    invocation: &Invocation,
    settings: &Settings,
    clock: C,
    out: &mut W,
) -> Result<()>
where
    C: Clock,
    W: Write,
{
    let request = prepare_request(invocation, settings, clock)?;
    debug!(
        "worklog payload for {}: {}",
        request.issue_id,
        serde_json::to_string(&request).unwrap_or_default()
    );

    let client = WorklogClient::new(settings.api_config())?;
    writeln!(out, "Attempting to log time to {}.", request.issue_id)?;
    let outcome = client.submit_worklog(&request).await?;
    report_outcome(&outcome, out)?;

    match outcome {
        WorklogOutcome::Success { .. } => Ok(()),
        WorklogOutcome::Failure { status, .. } => Err(LogTimeError::HttpFailure { status }),
    }
}

pub fn report_outcome<W: Write>(outcome: &WorklogOutcome, out: &mut W) -> std::io::Result<()> {
    if outcome.is_success() {
        writeln!(out, "{}", outcome.message().green())
    } else {
        writeln!(out, "{}", outcome.message().red())?;
        if let Some(hint) = outcome.hint() {
            writeln!(out, "{}", hint.yellow())?;
        }
        Ok(())
    }
}

/// Prints the user-facing message for an error that ended the run.
/// `HttpFailure` was already reported by `run`.
pub fn report_error<W: Write>(err: &LogTimeError, out: &mut W) -> std::io::Result<()> {
    match err {
        LogTimeError::HttpFailure { .. } => Ok(()),
        LogTimeError::MissingArguments => {
            writeln!(out, "{}", format!("Error: {}", err).red())?;
            writeln!(out, "{}", USAGE)
        }
        _ => writeln!(out, "{}", format!("Error: {}", err).red()),
    }
}
