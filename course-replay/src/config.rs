//! Command-line and environment configuration for `course-replay`.
//!
//! Flags win over environment variables:
//!
//! | Flag | Environment | Default |
//! |---|---|---|
//! | `--target <name>` | `COURSE_TARGET` | required for `replay` |
//! | `--format <text\|json>` | `COURSE_REPORT` | `text` |
//! | `--stop-on-hit` | `COURSE_STOP_ON_HIT` | off |

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};

use course_core::Target;

/// Environment variable naming the default target.
pub const ENV_TARGET: &str = "COURSE_TARGET";
/// Environment variable selecting the report format.
pub const ENV_REPORT: &str = "COURSE_REPORT";
/// Environment variable enabling stop-on-first-hit.
pub const ENV_STOP_ON_HIT: &str = "COURSE_STOP_ON_HIT";

/// Replays fuzz corpora against the obstacle course targets.
#[derive(Debug, Parser)]
#[command(name = "course-replay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// How replay results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[non_exhaustive]
pub enum ReportFormat {
    /// One human-readable line per input.
    #[default]
    Text,
    /// One JSON object per input.
    Json,
}

/// Settings for a corpus replay.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
#[non_exhaustive]
pub struct ReplayConfig {
    /// Entry point every input is fed to
    #[arg(long, env = ENV_TARGET)]
    pub target: Target,

    /// Report format
    #[arg(long, env = ENV_REPORT, value_enum, default_value_t)]
    pub format: ReportFormat,

    /// Stop after the first input that reaches the target
    #[arg(long, env = ENV_STOP_ON_HIT, value_parser = BoolishValueParser::new())]
    pub stop_on_hit: bool,

    /// Files or directories to replay (directories are expanded one level)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

impl ReplayConfig {
    /// Create a config with default format and no early stop.
    #[must_use]
    pub fn new(target: Target, inputs: Vec<PathBuf>) -> Self {
        Self { target, inputs, format: ReportFormat::default(), stop_on_hit: false }
    }
}

/// A parsed `course-replay` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
#[non_exhaustive]
pub enum Command {
    /// Run inputs through a target and report outcomes
    Replay(ReplayConfig),
    /// Write every target's solution into a directory
    Seed {
        /// Directory the seed files are written to
        out_dir: PathBuf,
    },
    /// List registered target names
    Targets,
}
