//! Tidy command implementation.
//!
//! The `xtool check tidy` command runs clang-tidy over the project using a
//! build directory's compilation database.

use std::path::{Path, PathBuf};

use crate::cli::args::TidyArgs;
use crate::config::TidyConfig;
use crate::error::Result;
use crate::tools::{run_tidy, TidyOptions, ToolContext};
use crate::ui::UserInterface;
use crate::version::VersionGate;

use super::dispatcher::{Command, CommandResult};

/// The tidy command implementation.
pub struct TidyCommand {
    project_root: PathBuf,
    config: TidyConfig,
    gate: VersionGate,
    options: TidyOptions,
}

impl TidyCommand {
    /// Create a new tidy command. A missing build dir falls back to config.
    pub fn new(project_root: &Path, config: TidyConfig, gate: VersionGate, args: TidyArgs) -> Self {
        let build_dir = args
            .dir
            .unwrap_or_else(|| PathBuf::from(&config.build_dir));

        Self {
            project_root: project_root.to_path_buf(),
            config,
            gate,
            options: TidyOptions {
                build_dir,
                jobs: args.jobs,
                clang_tidy_path: args.clang_tidy_path,
                run_clang_tidy_path: args.run_clang_tidy_path,
                fix: args.fix,
            },
        }
    }

    /// Get the resolved options.
    pub fn options(&self) -> &TidyOptions {
        &self.options
    }
}

impl Command for TidyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = ToolContext {
            project_root: &self.project_root,
            gate: &self.gate,
            output_mode: ui.output_mode(),
        };

        let report = run_tidy(&ctx, &self.config, &self.options)?;

        ui.success(&format!(
            "clang-tidy {} check passed ({})",
            report.version,
            report.build_dir.display()
        ));
        Ok(CommandResult::success())
    }
}
