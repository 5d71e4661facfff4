//! Corpus replay runner: feeds saved inputs to a target and records what happened.
//!
//! The runner:
//! 1. Expands the configured paths into a sorted list of input files
//! 2. Runs each file through [`Target::fuzz`] under `catch_unwind`
//! 3. Classifies the result as no-match, parsed, hit or crash
//! 4. Hands a [`ReplayRecord`] per input to the caller's sink

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use course_core::digest::sha256_hex;
use course_core::signal::as_target_hit;
use course_core::{Signal, Target, TargetHit};

use crate::ReplayError;

/// What happened when one input was run through a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ReplayOutcome {
    /// Input was malformed or did not match.
    NoMatch,
    /// Input parsed as a number but did not match.
    Parsed,
    /// Input reached the target.
    Hit { message: String },
    /// The target panicked for a reason other than a hit.
    Crashed { message: String },
}

impl ReplayOutcome {
    /// Short label used in text reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoMatch => "no_match",
            Self::Parsed => "parsed",
            Self::Hit { .. } => "hit",
            Self::Crashed { .. } => "crashed",
        }
    }
}

/// Result of replaying a single input file.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ReplayRecord {
    /// File the input was read from.
    pub path: PathBuf,
    /// Input length in bytes.
    pub len: usize,
    /// SHA-256 of the input, hex encoded.
    pub sha256: String,
    /// Classified outcome.
    #[serde(flatten)]
    pub outcome: ReplayOutcome,
    /// Wall-clock time spent in the target.
    pub elapsed_us: u64,
}

/// Totals over a whole replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct ReplaySummary {
    pub total: usize,
    pub no_match: usize,
    pub parsed: usize,
    pub hits: usize,
    pub crashed: usize,
}

impl ReplaySummary {
    fn record(&mut self, outcome: &ReplayOutcome) {
        self.total += 1;
        match outcome {
            ReplayOutcome::NoMatch => self.no_match += 1,
            ReplayOutcome::Parsed => self.parsed += 1,
            ReplayOutcome::Hit { .. } => self.hits += 1,
            ReplayOutcome::Crashed { .. } => self.crashed += 1,
        }
    }
}

/// Replays saved inputs against one target.
#[derive(Debug, Clone, Copy)]
pub struct Replayer {
    target: Target,
    stop_on_hit: bool,
}

impl Replayer {
    /// Create a replayer that runs every input.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self { target, stop_on_hit: false }
    }

    /// Stop after the first input that reaches the target.
    #[must_use]
    pub fn with_stop_on_hit(mut self, stop_on_hit: bool) -> Self {
        self.stop_on_hit = stop_on_hit;
        self
    }

    /// Run one in-memory input through the target.
    #[must_use]
    pub fn run_input(&self, data: &[u8]) -> ReplayOutcome {
        let target = self.target;
        match panic::catch_unwind(AssertUnwindSafe(|| target.fuzz(data))) {
            Ok(Signal::Parsed) => ReplayOutcome::Parsed,
            Ok(_) => ReplayOutcome::NoMatch,
            Err(payload) => match as_target_hit(payload.as_ref()) {
                Some(hit) => ReplayOutcome::Hit { message: hit.to_string() },
                None => ReplayOutcome::Crashed { message: panic_message(payload.as_ref()) },
            },
        }
    }

    /// Read and replay a single file.
    ///
    /// # Errors
    /// Returns [`ReplayError::Io`] if the file cannot be read.
    pub fn replay_file(&self, path: &Path) -> Result<ReplayRecord, ReplayError> {
        let data = fs::read(path).map_err(|e| ReplayError::io(path, e))?;
        let started = Instant::now();
        let outcome = self.run_input(&data);
        let elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        tracing::debug!(
            target_name = %self.target,
            path = %path.display(),
            outcome = outcome.label(),
            elapsed_us,
            "replayed input"
        );

        Ok(ReplayRecord {
            path: path.to_path_buf(),
            len: data.len(),
            sha256: sha256_hex(&data),
            outcome,
            elapsed_us,
        })
    }

    /// Replay every input under `paths`, passing each record to `sink`.
    ///
    /// # Errors
    /// Returns the first I/O error from expanding or reading inputs, or the
    /// first error returned by `sink`.
    pub fn replay_paths<F>(&self, paths: &[PathBuf], mut sink: F) -> Result<ReplaySummary, ReplayError>
    where
        F: FnMut(&ReplayRecord) -> Result<(), ReplayError>,
    {
        let inputs = collect_inputs(paths)?;
        tracing::info!(target_name = %self.target, inputs = inputs.len(), "starting replay");

        let mut summary = ReplaySummary::default();
        for path in &inputs {
            let record = self.replay_file(path)?;
            summary.record(&record.outcome);
            sink(&record)?;

            if let ReplayOutcome::Hit { message } = &record.outcome {
                tracing::info!(path = %path.display(), %message, "input reaches target");
                if self.stop_on_hit {
                    break;
                }
            }
        }

        tracing::info!(
            target_name = %self.target,
            total = summary.total,
            hits = summary.hits,
            crashed = summary.crashed,
            "replay complete"
        );
        Ok(summary)
    }
}

/// Expand `paths` into input files: directories contribute their regular
/// files (one level, sorted by name), files are taken as-is.
///
/// # Errors
/// Returns [`ReplayError::Io`] if a path cannot be inspected or listed.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, ReplayError> {
    let mut inputs = Vec::new();
    for path in paths {
        let meta = fs::metadata(path).map_err(|e| ReplayError::io(path, e))?;
        if !meta.is_dir() {
            inputs.push(path.clone());
            continue;
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| ReplayError::io(path, e))? {
            let entry = entry.map_err(|e| ReplayError::io(path, e))?;
            let file_type = entry.file_type().map_err(|e| ReplayError::io(entry.path(), e))?;
            if file_type.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        inputs.extend(files);
    }
    Ok(inputs)
}

/// Write each target's solution to `<out_dir>/<target>.bin`.
///
/// # Errors
/// Returns [`ReplayError::Io`] if the directory or a file cannot be written.
pub fn write_seeds(out_dir: &Path) -> Result<Vec<PathBuf>, ReplayError> {
    fs::create_dir_all(out_dir).map_err(|e| ReplayError::io(out_dir, e))?;
    let mut written = Vec::with_capacity(Target::ALL.len());
    for target in Target::ALL {
        let path = out_dir.join(format!("{}.bin", target.name()));
        fs::write(&path, target.solution()).map_err(|e| ReplayError::io(&path, e))?;
        tracing::debug!(target_name = %target, path = %path.display(), "wrote seed");
        written.push(path);
    }
    Ok(written)
}

/// Keep target hits from printing panic backtraces; other panics still do.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if info.payload().downcast_ref::<TargetHit>().is_none() {
            previous(info);
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
