//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// xtool - Format, lint and stress-test tooling for a C++ source tree.
#[derive(Debug, Parser)]
#[command(name = "xtool")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to config file (overrides default .xtool.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Echo every external command
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format source code
    Format(FormatArgs),

    /// Check or lint source code
    Check(CheckArgs),

    /// Run a concurrency test binary repeatedly and report pass/fail counts
    Trial(TrialArgs),
}

/// Arguments for `format` and `check format`.
#[derive(Debug, Clone, clap::Args)]
pub struct FormatArgs {
    /// Path of clang-format used to check source
    #[arg(long, default_value = "clang-format")]
    pub clang_format_path: String,
}

impl Default for FormatArgs {
    fn default() -> Self {
        Self {
            clang_format_path: "clang-format".to_string(),
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
#[command(arg_required_else_help = true)]
pub struct CheckArgs {
    #[command(subcommand)]
    pub command: CheckCommands,
}

/// Subcommands of `check`.
#[derive(Debug, Clone, Subcommand)]
pub enum CheckCommands {
    /// Check source format by clang-format
    Format(FormatArgs),

    /// Check code with clang-tidy
    Tidy(TidyArgs),
}

/// Arguments for `check tidy`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TidyArgs {
    /// Directory holding cmake-generated and build files [default: cmake-build-debug]
    #[arg(value_name = "BUILD_DIR")]
    pub dir: Option<PathBuf>,

    /// Execute N clang-tidy jobs concurrently
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Path of clang-tidy used to check source
    #[arg(long, default_value = "clang-tidy")]
    pub clang_tidy_path: String,

    /// Path of run-clang-tidy used to check source
    #[arg(long, default_value = "run-clang-tidy")]
    pub run_clang_tidy_path: String,

    /// Automatically fix codebase via clang-tidy suggested changes
    #[arg(long)]
    pub fix: bool,
}

/// Arguments for the `trial` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TrialArgs {
    /// Path of the prebuilt test binary
    #[arg(value_name = "BINARY")]
    pub binary: PathBuf,

    /// Test filter argument passed to every run [default: from config]
    #[arg(long, allow_hyphen_values = true)]
    pub filter: Option<String>,

    /// Number of runs [default: from config, 100]
    #[arg(short = 'n', long, value_name = "N")]
    pub trials: Option<usize>,

    /// Exit non-zero if any run failed
    #[arg(long)]
    pub strict: bool,
}
