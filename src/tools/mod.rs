//! Drivers for the external formatter and linter.
//!
//! Both follow the same sequence: locate the tool, gate on its reported
//! version, then invoke it from the project root. Failures from the tool
//! itself propagate unchanged as [`XtoolError::ProcessFailure`].

pub mod format;
pub mod sources;
pub mod tidy;

use std::path::{Path, PathBuf};

use crate::error::{Result, XtoolError};
use crate::shell::{find_command, run_capture, Invocation};
use crate::ui::OutputMode;
use crate::version::{RequiredVersion, Version, VersionGate};

pub use format::{format_invocation, run_format, FormatOptions, FormatReport};
pub use sources::discover_sources;
pub use tidy::{run_tidy, tidy_invocation, TidyOptions, TidyReport};

/// Shared inputs for running a tool against the project.
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    /// Root of the source tree; tools run from here.
    pub project_root: &'a Path,
    /// Version checker built at start-up.
    pub gate: &'a VersionGate,
    /// Controls command echoing.
    pub output_mode: OutputMode,
}

/// A tool found on disk whose version passed the gate.
#[derive(Debug, Clone)]
pub struct LocatedTool {
    pub path: PathBuf,
    pub version: Version,
}

/// Resolve `command` to an absolute executable path, failing with
/// [`XtoolError::ToolNotFound`].
///
/// Tools run from the project root, so a path relative to the caller's
/// directory is made absolute here.
pub fn find_tool(command: &str, tool: &str) -> Result<PathBuf> {
    let path = find_command(command).ok_or_else(|| XtoolError::ToolNotFound {
        tool: command.to_string(),
        message: format!("{} is required", tool),
    })?;
    Ok(std::path::absolute(path)?)
}

/// Resolve a tool and check its `--version` output against `required`.
pub fn locate_tool(
    ctx: &ToolContext<'_>,
    command: &str,
    tool: &str,
    required: RequiredVersion,
) -> Result<LocatedTool> {
    let path = find_tool(command, tool)?;
    tracing::debug!("Found {} at {}", tool, path.display());

    let output = run_capture(
        Invocation::new([path.to_string_lossy().into_owned(), "--version".to_string()])
            .verbose(ctx.output_mode.echoes_all_commands())
            .message(format!("failed to query {} version", tool)),
    )?;

    let version = ctx.gate.check_tool_output(&output, required, tool)?;
    tracing::info!("Using {} {} ({})", tool, version, path.display());

    Ok(LocatedTool { path, version })
}
