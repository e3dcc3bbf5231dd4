//! Small helpers shared across CLI tests.

use std::io::Cursor;

use clap::Parser;
use tempfile::TempDir;

use super::{Cli, CliError, ExecutionSummary, MstReport, TraversalReport, render_summary, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn parse(args: &[&str]) -> Cli {
    let argv = std::iter::once("graphlab").chain(args.iter().copied());
    match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => panic!("arguments {args:?} must parse: {err}"),
    }
}

pub(super) fn run_traverse_args(args: &[&str]) -> TraversalReport {
    let mut argv = vec!["traverse"];
    argv.extend_from_slice(args);
    match run_cli(parse(&argv)) {
        Ok(ExecutionSummary::Traverse(report)) => report,
        Ok(other) => panic!("expected a traversal report, got {other:?}"),
        Err(err) => panic!("traverse must succeed: {err}"),
    }
}

pub(super) fn run_mst_args(args: &[&str]) -> MstReport {
    let mut argv = vec!["mst"];
    argv.extend_from_slice(args);
    match run_cli(parse(&argv)) {
        Ok(ExecutionSummary::Mst(report)) => report,
        Ok(other) => panic!("expected an mst report, got {other:?}"),
        Err(err) => panic!("mst must succeed: {err}"),
    }
}

pub(super) fn run_cli_expecting_error(args: &[&str], panic_msg: &str) -> CliError {
    match run_cli(parse(args)) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn render_to_string(summary: &ExecutionSummary) -> String {
    let mut buffer = Cursor::new(Vec::new());
    render_summary(summary, &mut buffer).expect("rendering into memory cannot fail");
    String::from_utf8(buffer.into_inner()).expect("reports are UTF-8")
}
