//! Repeated-trial harness for concurrency tests.

pub mod harness;
pub mod tally;

pub use harness::{resolve_binary, run_trials};
pub use tally::TrialTally;
