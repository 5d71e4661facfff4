//! Corpus replay tool for the obstacle course targets.
//!
//! Runs saved fuzzer inputs through a named target and reports which ones
//! reach it, without needing a fuzzing engine. Also writes a seed corpus of
//! known solutions for checking harness wiring.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod report;
pub mod runner;

use std::io::Write;

use course_core::Target;

pub use config::{Cli, Command, ReplayConfig, ReportFormat};
pub use error::ReplayError;
pub use runner::{ReplayOutcome, ReplayRecord, ReplaySummary, Replayer};

/// Execute a parsed command, writing its report to `out`.
///
/// # Errors
/// Returns any [`ReplayError`] raised while reading inputs, writing seeds or
/// writing the report.
pub fn run(command: &Command, out: &mut dyn Write) -> Result<(), ReplayError> {
    match command {
        Command::Replay(config) => {
            let replayer = Replayer::new(config.target).with_stop_on_hit(config.stop_on_hit);
            let summary = replayer.replay_paths(&config.inputs, |record| {
                report::write_record(out, record, config.format)
            })?;
            report::write_summary(out, &summary, config.format)?;
        }
        Command::Seed { out_dir } => {
            for path in runner::write_seeds(out_dir)? {
                writeln!(out, "{}", path.display())?;
            }
        }
        Command::Targets => {
            for target in Target::ALL {
                writeln!(out, "{target}")?;
            }
        }
    }
    Ok(())
}
