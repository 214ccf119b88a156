//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes the parsed
//! [`Commands`](crate::cli::Commands) variant to a typed command struct.

pub mod dispatcher;
pub mod format;
pub mod tidy;
pub mod trial;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use format::FormatCommand;
pub use tidy::TidyCommand;
pub use trial::TrialCommand;
