//! Error types for xtool operations.
//!
//! This module defines [`XtoolError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant propagates to `main`, which prints it and exits non-zero
//! - The trial harness is the only caller that inspects [`XtoolError::ProcessFailure`]
//!   and turns it into data instead of propagating it
//! - Use `anyhow::Error` (via `XtoolError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::version::RequiredVersion;

/// Core error type for xtool operations.
#[derive(Debug, Error)]
pub enum XtoolError {
    /// An external process exited non-zero or could not be started.
    #[error("{}", describe_process_failure(.command, .code, .message))]
    ProcessFailure {
        command: Vec<String>,
        code: Option<i32>,
        message: Option<String>,
    },

    /// An external tool could not be located.
    #[error("{message}: '{tool}' was not found")]
    ToolNotFound { tool: String, message: String },

    /// A tool reported a version string that is not a semantic version.
    #[error("{tool} {required} or higher is required, got: {got}")]
    VersionFormat {
        tool: String,
        required: RequiredVersion,
        got: String,
    },

    /// A tool is older than the required minimum.
    #[error("{tool} {required} or higher is required, got: {got}")]
    VersionTooOld {
        tool: String,
        required: RequiredVersion,
        got: String,
    },

    /// Something the command needs before it can run is missing.
    #[error("{message}")]
    MissingPrecondition { message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for xtool operations.
pub type Result<T> = std::result::Result<T, XtoolError>;

fn describe_process_failure(
    command: &[String],
    code: &Option<i32>,
    message: &Option<String>,
) -> String {
    let code = match code {
        Some(code) => code.to_string(),
        None => "none (process did not exit normally)".to_string(),
    };
    let mut text = format!("failed to run: {}\nexit with code: {}", command.join(" "), code);
    if let Some(message) = message {
        text.push_str("\nerror message: ");
        text.push_str(message);
    }
    text
}
