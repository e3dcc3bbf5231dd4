//! Command-line harness for the graphlab engine.
//!
//! Exposes the argument parser, command runners and report rendering used
//! by the `graphlab` binary, plus the structured logging bootstrap.

pub mod cli;
pub mod logging;
