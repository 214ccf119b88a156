//! Trial command implementation.
//!
//! The `xtool trial` command runs a concurrency test binary many times and
//! reports how many runs passed.

use std::path::PathBuf;

use crate::cli::args::TrialArgs;
use crate::config::TrialConfig;
use crate::error::Result;
use crate::trials::{run_trials, TrialTally};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The trial command implementation.
pub struct TrialCommand {
    binary: PathBuf,
    filter: String,
    count: usize,
    strict: bool,
}

impl TrialCommand {
    /// Create a new trial command; unset arguments come from config.
    pub fn new(config: &TrialConfig, args: TrialArgs) -> Self {
        Self {
            binary: args.binary,
            filter: args.filter.unwrap_or_else(|| config.filter.clone()),
            count: args.trials.unwrap_or(config.count),
            strict: args.strict,
        }
    }

    /// Number of runs.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Filter argument passed to every run.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    fn report(&self, tally: &TrialTally, ui: &mut dyn UserInterface) {
        if tally.all_passed() {
            ui.success(&tally.to_string());
        } else {
            ui.warning(&tally.to_string());
        }
    }
}

impl Command for TrialCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header(&format!(
            "Running {} trial(s) of {} {}",
            self.count,
            self.binary.display(),
            self.filter
        ));

        let tally = run_trials(&self.binary, &self.filter, self.count)?;
        self.report(&tally, ui);

        if self.strict && !tally.all_passed() {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}
