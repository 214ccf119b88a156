//! External process invocation.
//!
//! Every subprocess xtool starts goes through [`run`]. A non-zero exit is
//! turned into [`XtoolError::ProcessFailure`] carrying the argument vector,
//! the exit code and an optional context message; callers decide whether
//! that is fatal.

use crate::error::{Result, XtoolError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Description of a single external-process call.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    args: Vec<String>,
    cwd: Option<PathBuf>,
    capture_stdout: bool,
    verbose: bool,
    message: Option<String>,
}

impl Invocation {
    /// Create an invocation from a program followed by its arguments.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Run the process in the given working directory.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Capture stdout as text instead of inheriting it.
    pub fn capture_stdout(mut self) -> Self {
        self.capture_stdout = true;
        self
    }

    /// Echo the command line to stdout before running it.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Context attached to the error if the process fails.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Program and arguments, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Working directory, if one was set.
    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// The space-joined command line.
    pub fn command_line(&self) -> String {
        self.args.join(" ")
    }

    fn failure(&self, code: Option<i32>) -> XtoolError {
        XtoolError::ProcessFailure {
            command: self.args.clone(),
            code,
            message: self.message.clone(),
        }
    }
}

/// Successful outcome of an [`Invocation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationOutput {
    /// Captured stdout (only when capture was requested).
    pub stdout: Option<String>,
}

impl InvocationOutput {
    /// Captured stdout, or an empty string when nothing was captured.
    pub fn stdout(&self) -> &str {
        self.stdout.as_deref().unwrap_or_default()
    }
}

/// Run an invocation synchronously to completion.
///
/// Stdin and stderr are inherited from the caller. Buffered stdout is
/// flushed first so that earlier output appears before the child's.
pub fn run(invocation: &Invocation) -> Result<InvocationOutput> {
    let Some((program, rest)) = invocation.args.split_first() else {
        return Err(invocation.failure(None));
    };

    let mut stdout = std::io::stdout();
    if invocation.verbose {
        writeln!(stdout, "$ {}", invocation.command_line()).ok();
    }
    stdout.flush().ok();

    tracing::debug!(
        command = %invocation.command_line(),
        cwd = ?invocation.cwd,
        capture = invocation.capture_stdout,
        "Running external command"
    );

    let mut cmd = Command::new(program);
    cmd.args(rest);
    cmd.stdin(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    if let Some(cwd) = &invocation.cwd {
        cmd.current_dir(cwd);
    }

    let (status, captured) = if invocation.capture_stdout {
        cmd.stdout(Stdio::piped());
        let output = cmd.output().map_err(|e| {
            tracing::debug!(error = %e, "Failed to spawn {}", program);
            invocation.failure(None)
        })?;
        (
            output.status,
            Some(String::from_utf8_lossy(&output.stdout).into_owned()),
        )
    } else {
        cmd.stdout(Stdio::inherit());
        let status = cmd.status().map_err(|e| {
            tracing::debug!(error = %e, "Failed to spawn {}", program);
            invocation.failure(None)
        })?;
        (status, None)
    };

    tracing::debug!(code = ?status.code(), "Command finished: {}", program);

    if status.success() {
        Ok(InvocationOutput { stdout: captured })
    } else {
        Err(invocation.failure(status.code()))
    }
}

/// Run an invocation with stdout captured and return the text.
pub fn run_capture(invocation: Invocation) -> Result<String> {
    let output = run(&invocation.capture_stdout())?;
    Ok(output.stdout.unwrap_or_default())
}
