//! Configuration loading.
//!
//! Settings come from an optional YAML file (`.xtool.yml` in the project
//! root, or `--config`). CLI flags override them.
//!
//! # Example
//!
//! ```
//! use xtool::config::XtoolConfig;
//!
//! let config: XtoolConfig = serde_yaml::from_str("trial:\n  count: 10\n").unwrap();
//! assert_eq!(config.trial.count, 10);
//! assert_eq!(config.tidy.build_dir, "cmake-build-debug");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_project_config, load_config, load_config_file, CONFIG_FILE_NAME};
pub use schema::{FormatConfig, TidyConfig, TrialConfig, XtoolConfig};
