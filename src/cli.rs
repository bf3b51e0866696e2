use clap::Parser;

use crate::error::{LogTimeError, Result};

pub const USAGE: &str = "\
Usage: lt [ITS PRO Issue ID] [Time Spent] [Description]

Log time to ITS PRO using the 'lt' command:

Parameters:
  ITS PRO Issue ID    The ITS PRO issue ID to log time to (e.g., SVCOPS-619)
  Time Spent          Amount of time spent (e.g., 30, 30m, 2, 2h)
  Description         Description of the work done or days offset (optional)";

/// Positionals are optional at the clap level so a missing one prints our
/// own usage text and exits with 1.
#[derive(Parser, Debug, Default)]
#[command(name = "lt")]
#[command(about = "Log time to ITS PRO", long_about = None)]
#[command(version)]
pub struct Cli {
    /// ITS PRO issue ID to which time will be logged
    #[arg(value_name = "ISSUE_ID")]
    pub issue_id: Option<String>,

    /// Amount of time spent (e.g., 30, 30m, 2, 2h)
    #[arg(value_name = "TIME_SPENT")]
    pub time_spent: Option<String>,

    /// Description of the work done or days offset (optional)
    #[arg(value_name = "DESCRIPTION", allow_negative_numbers = true)]
    pub description: Option<String>,

    /// Show request details on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated arguments for one worklog submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub issue_id: String,
    pub time_spent: String,
    pub description: String,
}

impl Cli {
    pub fn invocation(&self) -> Result<Invocation> {
        let issue_id = non_empty(self.issue_id.as_deref()).ok_or(LogTimeError::MissingArguments)?;
        let time_spent =
            non_empty(self.time_spent.as_deref()).ok_or(LogTimeError::MissingArguments)?;

        Ok(Invocation {
            issue_id: issue_id.to_string(),
            time_spent: time_spent.to_string(),
            description: self.description.clone().unwrap_or_default(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
