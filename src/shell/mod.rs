//! External command execution and tool lookup.

pub mod command;
pub mod resolve;

pub use command::{run, run_capture, Invocation, InvocationOutput};
pub use resolve::{find_command, is_executable, path_entries, resolve_tool_path};
