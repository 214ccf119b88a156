//! Command-line interface for xtool.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, CheckCommands, Cli, Commands, FormatArgs, TidyArgs, TrialArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
