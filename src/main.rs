//! Laggard CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use laggard::cli::{self, Cli};
use laggard::Detector;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for errors, kept apart from the check/options verdict codes.
const ERROR_EXIT_CODE: u8 = 3;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("laggard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("laggard=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("laggard starting with args: {:?}", cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli::run(&cli, Detector::builtin(), &mut out) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
