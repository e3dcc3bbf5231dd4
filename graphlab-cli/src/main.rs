//! CLI entry point for the graphlab harness.
//!
//! Parses command-line arguments with clap, runs the requested sweep,
//! renders the report to stdout or `--output`, and maps errors to a failing
//! exit code. Logging is initialised first so every later step can emit
//! structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use graphlab_cli::{
    cli::{Cli, CliError, ExecutionSummary, open_output, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, and write the report.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let output = cli.output.clone();
    let summary = run_cli(cli).context("failed to execute command")?;
    match output {
        Some(path) => {
            let writer = open_output(&path).context("failed to open report file")?;
            emit(&summary, writer)
        }
        None => emit(&summary, BufWriter::new(io::stdout().lock())),
    }
}

fn emit(summary: &ExecutionSummary, mut writer: impl Write) -> Result<()> {
    render_summary(summary, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some(core.code()),
                _ => None,
            });
        let code_field = code.map(|code| field::display(code.as_str()));

        error!(error = %err, code = code_field, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
