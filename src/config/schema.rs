//! Configuration schema.
//!
//! Every field has a default, so an empty or absent `.xtool.yml` is valid.

use serde::Deserialize;

use crate::version::RequiredVersion;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct XtoolConfig {
    /// Settings for `format` and `check format`.
    pub format: FormatConfig,

    /// Settings for `check tidy`.
    pub tidy: TidyConfig,

    /// Settings for `trial`.
    pub trial: TrialConfig,
}

/// Formatter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Oldest clang-format accepted.
    pub required_version: RequiredVersion,

    /// Glob patterns, relative to the project root, of files to format.
    pub sources: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            required_version: RequiredVersion::new(12, 0, 0),
            sources: vec![
                "src/**/*.h".to_string(),
                "include/**/*.h".to_string(),
                "src/**/*.cpp".to_string(),
                "tests/**/*.cpp".to_string(),
            ],
        }
    }
}

/// Linter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TidyConfig {
    /// Oldest clang-tidy accepted.
    pub required_version: RequiredVersion,

    /// Build directory holding `compile_commands.json`.
    pub build_dir: String,

    /// Regexes joined into `-header-filter` and passed as file filters.
    pub header_filters: Vec<String>,
}

impl Default for TidyConfig {
    fn default() -> Self {
        Self {
            required_version: RequiredVersion::new(12, 0, 0),
            build_dir: "cmake-build-debug".to_string(),
            header_filters: vec![
                "kvrocks/src/".to_string(),
                "utils/kvrocks2redis/".to_string(),
                "tests/cppunit/".to_string(),
            ],
        }
    }
}

/// Concurrency trial settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrialConfig {
    /// How many times the test binary runs.
    pub count: usize,

    /// Argument selecting the test(s) to run.
    pub filter: String,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            count: 100,
            filter: "--gtest_filter=*Concurrent*".to_string(),
        }
    }
}
