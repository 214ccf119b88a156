//! xtool - Format, lint and stress-test tooling for a C++ source tree.
//!
//! xtool drives three external programs: `clang-format`, `clang-tidy` (via
//! `run-clang-tidy`) and a prebuilt concurrency test binary. It checks tool
//! versions before use, turns failing processes into structured errors, and
//! runs flaky tests repeatedly to count how often they pass.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.xtool.yml` configuration
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External command execution and tool lookup
//! - [`tools`] - clang-format and clang-tidy drivers
//! - [`trials`] - Repeated-trial harness
//! - [`ui`] - Terminal output
//! - [`version`] - Semantic version parsing and gating
//!
//! # Example
//!
//! ```
//! use xtool::version::{RequiredVersion, VersionGate};
//!
//! let gate = VersionGate::new().unwrap();
//! let output = "Ubuntu clang-format version 14.0.0-1ubuntu1";
//! let version = gate
//!     .check_tool_output(output, RequiredVersion::new(12, 0, 0), "clang-format")
//!     .unwrap();
//! assert_eq!(version.to_string(), "14.0.0");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod tools;
pub mod trials;
pub mod ui;
pub mod version;

pub use error::{Result, XtoolError};
