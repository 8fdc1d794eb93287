use anyhow::Context;
use std::io::IsTerminal;
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries the CSV report. `RUST_LOG` overrides the
/// default level.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    let metadata = std::fs::metadata(&args.path)
        .with_context(|| format!("cannot access input file {:?}", args.path))?;

    if metadata.is_dir() {
        anyhow::bail!(
            "input path {:?} is a directory, expected a file",
            args.path
        );
    }

    if args.email_header.trim().is_empty() {
        anyhow::bail!("--email-header must not be empty");
    }

    Ok(())
}
