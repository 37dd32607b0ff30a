pub mod app;
pub mod commands;

pub use app::{CategoryArg, FromExcelCli, GenerateCli, GlobalArgs};

use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Parse arguments, printing usage and examples on failure.
///
/// Argument errors exit with 1; `--help` and `--version` exit with 0.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    match T::try_parse() {
        Ok(cli) => Ok(cli),
        Err(err) => {
            let failed = err.use_stderr();
            let _ = err.print();

            if failed {
                if let Some(examples) = T::command().get_after_help() {
                    eprintln!("\n{examples}");
                }
                Err(ExitCode::FAILURE)
            } else {
                Err(ExitCode::SUCCESS)
            }
        }
    }
}

/// Log to stderr. `RUST_LOG` overrides the verbosity flag.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Map a command result to the process exit code. Failures are printed to
/// stderr whatever the log filter says.
pub fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
