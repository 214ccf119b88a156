//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckCommands, Cli, Commands};
use crate::config::{load_config, XtoolConfig};
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::VersionGate;

use super::format::FormatCommand;
use super::tidy::TidyCommand;
use super::trial::TrialCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
///
/// Holds the configuration and version gate built once at start-up.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config: XtoolConfig,
    gate: VersionGate,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, config: XtoolConfig, gate: VersionGate) -> Self {
        Self {
            project_root,
            config,
            gate,
        }
    }

    /// Load configuration for the CLI's project and build a dispatcher.
    pub fn from_cli(cli: &Cli, project_root: PathBuf) -> Result<Self> {
        let config = load_config(&project_root, cli.config.as_deref())?;
        let gate = VersionGate::new()?;
        Ok(Self::new(project_root, config, gate))
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &XtoolConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, command: &Commands, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Dispatching {:?}", command);
        match command {
            Commands::Format(args) => {
                let cmd = FormatCommand::new(
                    &self.project_root,
                    self.config.format.clone(),
                    self.gate.clone(),
                    args.clone(),
                    true,
                );
                cmd.execute(ui)
            }
            Commands::Check(check) => match &check.command {
                CheckCommands::Format(args) => {
                    let cmd = FormatCommand::new(
                        &self.project_root,
                        self.config.format.clone(),
                        self.gate.clone(),
                        args.clone(),
                        false,
                    );
                    cmd.execute(ui)
                }
                CheckCommands::Tidy(args) => {
                    let cmd = TidyCommand::new(
                        &self.project_root,
                        self.config.tidy.clone(),
                        self.gate.clone(),
                        args.clone(),
                    );
                    cmd.execute(ui)
                }
            },
            Commands::Trial(args) => {
                let cmd = TrialCommand::new(&self.config.trial, args.clone());
                cmd.execute(ui)
            }
        }
    }
}
