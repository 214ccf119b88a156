//! clang-tidy driver (through LLVM's `run-clang-tidy` wrapper).

use std::path::{Path, PathBuf};

use crate::config::TidyConfig;
use crate::error::{Result, XtoolError};
use crate::shell::{self, Invocation};
use crate::version::Version;

use super::{find_tool, locate_tool, ToolContext};

pub const CLANG_TIDY: &str = "clang-tidy";
pub const RUN_CLANG_TIDY: &str = "run-clang-tidy";

/// The compilation database clang-tidy reads from the build directory.
pub const COMPILE_COMMANDS: &str = "compile_commands.json";

/// Options for a tidy run.
#[derive(Debug, Clone)]
pub struct TidyOptions {
    /// Build directory; relative paths are taken from the project root.
    pub build_dir: PathBuf,
    /// Parallel jobs passed as `-j<N>`.
    pub jobs: Option<usize>,
    pub clang_tidy_path: String,
    pub run_clang_tidy_path: String,
    /// Apply suggested fixes.
    pub fix: bool,
}

impl Default for TidyOptions {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from(TidyConfig::default().build_dir),
            jobs: None,
            clang_tidy_path: CLANG_TIDY.to_string(),
            run_clang_tidy_path: RUN_CLANG_TIDY.to_string(),
            fix: false,
        }
    }
}

/// What a tidy run did.
#[derive(Debug, Clone)]
pub struct TidyReport {
    pub version: Version,
    pub build_dir: PathBuf,
}

/// Build the `run-clang-tidy` invocation.
pub fn tidy_invocation(
    run_clang_tidy: &Path,
    clang_tidy: &Path,
    build_dir: &Path,
    options: &TidyOptions,
    header_filters: &[String],
    project_root: &Path,
) -> Invocation {
    let mut args = vec![
        run_clang_tidy.to_string_lossy().into_owned(),
        "-p".to_string(),
        build_dir.to_string_lossy().into_owned(),
        "-clang-tidy-binary".to_string(),
        clang_tidy.to_string_lossy().into_owned(),
    ];
    if let Some(jobs) = options.jobs {
        args.push(format!("-j{}", jobs));
    }
    if options.fix {
        args.push("-fix".to_string());
    }
    args.push(format!("-header-filter={}", header_filters.join("|")));
    args.extend(header_filters.iter().cloned());

    Invocation::new(args)
        .cwd(project_root)
        .message(format!("{} check failed", CLANG_TIDY))
}

/// Resolve the build directory against the project root.
pub fn resolve_build_dir(project_root: &Path, build_dir: &Path) -> PathBuf {
    if build_dir.is_absolute() {
        build_dir.to_path_buf()
    } else {
        project_root.join(build_dir)
    }
}

/// Run clang-tidy over the project using the build's compilation database.
pub fn run_tidy(
    ctx: &ToolContext<'_>,
    config: &TidyConfig,
    options: &TidyOptions,
) -> Result<TidyReport> {
    let run_clang_tidy = find_tool(&options.run_clang_tidy_path, RUN_CLANG_TIDY)?;
    let tidy = locate_tool(
        ctx,
        &options.clang_tidy_path,
        CLANG_TIDY,
        config.required_version,
    )?;

    let project_root = std::path::absolute(ctx.project_root)?;
    let build_dir = resolve_build_dir(&project_root, &options.build_dir);
    if !build_dir.join(COMPILE_COMMANDS).is_file() {
        return Err(XtoolError::MissingPrecondition {
            message: format!(
                "expect {} in build directory {}",
                COMPILE_COMMANDS,
                build_dir.display()
            ),
        });
    }

    let invocation = tidy_invocation(
        &run_clang_tidy,
        &tidy.path,
        &build_dir,
        options,
        &config.header_filters,
        &project_root,
    )
    .verbose(true);
    shell::run(&invocation)?;

    Ok(TidyReport {
        version: tidy.version,
        build_dir,
    })
}
