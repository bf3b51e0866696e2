use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use log_time::cli::Cli;
use log_time::clock::SystemClock;
use log_time::config::Settings;
use log_time::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env first so RUST_LOG set there applies
    let dotenv = dotenvy::dotenv();
    init_logging(cli.verbose);
    match dotenv {
        Ok(path) => debug!("loaded environment from {}", path.display()),
        Err(err) => debug!("no .env loaded: {}", err),
    }

    let mut stdout = io::stdout();
    match execute(&cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = log_time::report_error(&err, &mut stdout);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn execute(cli: &Cli, out: &mut io::Stdout) -> Result<()> {
    let invocation = cli.invocation()?;
    let settings = Settings::from_env()?;
    info!("logging {} to {}", invocation.time_spent, invocation.issue_id);
    log_time::run(&invocation, &settings, SystemClock, out).await
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,log_time=debug,lt=debug,worklog_api=debug"
    } else {
        "warn"
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .format_timestamp_millis()
    .try_init();
}
