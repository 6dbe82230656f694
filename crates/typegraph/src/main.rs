mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd.take() {
        Some(command) => command.run(cli).await.emit(),
        None => match cli.run_default().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            },
        },
    }
}

/// `--verbose` wins over `LOG_LEVEL`. An unrecognized `LOG_LEVEL` falls back
/// to the default and is reported once the subscriber is installed.
fn init_logging(verbose: bool) {
    let (log_level, env_warning) =
        if verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match std::env::var(LOG_LEVEL_ENV_VAR) {
                Ok(raw) => match parse_log_level(&raw) {
                    Some(level) => (level, None),
                    None => (
                        DEFAULT_LOG_LEVEL,
                        Some(format!(
                            "Invalid `{LOG_LEVEL_ENV_VAR}` environment variable \
                            value: `{raw}`"
                        )),
                    ),
                },
                Err(_) => (DEFAULT_LOG_LEVEL, None),
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging initialized at `{log_level}`.");

    if let Some(warning) = env_warning {
        log::warn!("{warning}");
    }
}

fn parse_log_level(raw: &str) -> Option<tracing::Level> {
    match raw.to_ascii_uppercase().as_str() {
        "TRACE" => Some(tracing::Level::TRACE),
        "DEBUG" | "VERBOSE" => Some(tracing::Level::DEBUG),
        "INFO" => Some(tracing::Level::INFO),
        "WARN" => Some(tracing::Level::WARN),
        _ => None,
    }
}
