//! Format command implementation.
//!
//! Serves both `xtool format` (rewrite in place) and `xtool check format`
//! (report differences, fail on any).

use std::path::{Path, PathBuf};

use crate::cli::args::FormatArgs;
use crate::config::FormatConfig;
use crate::error::Result;
use crate::tools::{run_format, FormatOptions, ToolContext};
use crate::ui::UserInterface;
use crate::version::VersionGate;

use super::dispatcher::{Command, CommandResult};

/// The format command implementation.
pub struct FormatCommand {
    project_root: PathBuf,
    config: FormatConfig,
    gate: VersionGate,
    options: FormatOptions,
}

impl FormatCommand {
    /// Create a new format command.
    pub fn new(
        project_root: &Path,
        config: FormatConfig,
        gate: VersionGate,
        args: FormatArgs,
        fix: bool,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            gate,
            options: FormatOptions {
                clang_format_path: args.clang_format_path,
                fix,
            },
        }
    }

    /// Whether files are rewritten in place.
    pub fn fixes(&self) -> bool {
        self.options.fix
    }
}

impl Command for FormatCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = ToolContext {
            project_root: &self.project_root,
            gate: &self.gate,
            output_mode: ui.output_mode(),
        };

        let report = run_format(&ctx, &self.config, &self.options)?;

        if report.files == 0 {
            ui.warning(&format!(
                "No source files matched under {}",
                self.project_root.display()
            ));
        } else if self.options.fix {
            ui.success(&format!(
                "Formatted {} file(s) with clang-format {}",
                report.files, report.version
            ));
        } else {
            ui.success(&format!(
                "Format check passed for {} file(s) (clang-format {})",
                report.files, report.version
            ));
        }

        Ok(CommandResult::success())
    }
}
