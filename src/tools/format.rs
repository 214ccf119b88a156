//! clang-format driver.

use std::path::{Path, PathBuf};

use crate::config::FormatConfig;
use crate::error::Result;
use crate::shell::{self, Invocation};
use crate::version::Version;

use super::{discover_sources, locate_tool, ToolContext};

/// Display name used in messages and version errors.
pub const CLANG_FORMAT: &str = "clang-format";

/// Options for a format run.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Command name or path of clang-format.
    pub clang_format_path: String,
    /// Rewrite files in place instead of reporting differences.
    pub fix: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            clang_format_path: CLANG_FORMAT.to_string(),
            fix: false,
        }
    }
}

/// What a format run did.
#[derive(Debug, Clone)]
pub struct FormatReport {
    pub version: Version,
    /// Number of files passed to clang-format; zero means it was not run.
    pub files: usize,
}

/// Build the clang-format invocation for the given sources.
pub fn format_invocation(
    clang_format: &Path,
    sources: &[PathBuf],
    fix: bool,
    project_root: &Path,
) -> Invocation {
    let mut args = vec![clang_format.to_string_lossy().into_owned()];
    if fix {
        args.push("-i".to_string());
    } else {
        args.push("--dry-run".to_string());
        args.push("--Werror".to_string());
    }
    args.extend(sources.iter().map(|p| p.to_string_lossy().into_owned()));

    Invocation::new(args)
        .cwd(project_root)
        .message(format!("{} check failed", CLANG_FORMAT))
}

/// Format (or check the format of) the project's sources.
pub fn run_format(
    ctx: &ToolContext<'_>,
    config: &FormatConfig,
    options: &FormatOptions,
) -> Result<FormatReport> {
    let tool = locate_tool(
        ctx,
        &options.clang_format_path,
        CLANG_FORMAT,
        config.required_version,
    )?;

    let project_root = std::path::absolute(ctx.project_root)?;
    let sources = discover_sources(&project_root, &config.sources)?;
    if sources.is_empty() {
        tracing::warn!(
            "No sources matched under {}, skipping {}",
            project_root.display(),
            CLANG_FORMAT
        );
        return Ok(FormatReport {
            version: tool.version,
            files: 0,
        });
    }

    let invocation =
        format_invocation(&tool.path, &sources, options.fix, &project_root).verbose(true);
    shell::run(&invocation)?;

    Ok(FormatReport {
        version: tool.version,
        files: sources.len(),
    })
}
