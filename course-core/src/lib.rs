//! Obstacle course targets for coverage-guided fuzzers.
//!
//! Each oracle compares fuzzer input against a hidden constant (a digest, a
//! checksum, an integer or a string) and aborts with a [`TargetHit`] panic
//! when the input matches. The oracles share no state and can be driven from
//! any number of threads.
//!
//! [`Target`] names every entry point so tools can address them uniformly.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod checksum;
pub mod digest;
pub mod error;
pub mod integer;
pub mod literal;
pub mod record;
pub mod reversed;
pub mod signal;
pub mod target;

pub use error::CoreError;
pub use signal::{Signal, TargetHit};
pub use target::Target;
