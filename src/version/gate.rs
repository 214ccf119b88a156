//! Minimum-version checks for external tools.

use anyhow::Context;
use regex::Regex;

use crate::error::{Result, XtoolError};

use super::{RequiredVersion, Version};

/// Strict semantic version grammar, anchored at both ends.
const SEMVER_PATTERN: &str = r"(?x)
    ^
    (?P<major>0|[1-9][0-9]*)
    \.
    (?P<minor>0|[1-9][0-9]*)
    \.
    (?P<patch>0|[1-9][0-9]*)
    (?:-(?P<prerelease>
        (?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)
        (?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*
    ))?
    (?:\+(?P<build>
        [0-9a-zA-Z-]+
        (?:\.[0-9a-zA-Z-]+)*
    ))?
    $
";

/// Picks the version token out of `<tool> --version` output.
const VERSION_TOKEN_PATTERN: &str = r"version\s+((?:\w|\.)+)";

/// Parses tool versions and enforces minimums.
///
/// Build one at start-up and pass it to whatever needs it.
#[derive(Debug, Clone)]
pub struct VersionGate {
    semver: Regex,
    token: Regex,
}

impl VersionGate {
    pub fn new() -> Result<Self> {
        Ok(Self {
            semver: Regex::new(SEMVER_PATTERN).context("Failed to compile semver pattern")?,
            token: Regex::new(VERSION_TOKEN_PATTERN)
                .context("Failed to compile version token pattern")?,
        })
    }

    /// Parse a complete semantic version string.
    ///
    /// Returns `None` if the text does not match the grammar or a numeric
    /// component does not fit in a `u64`.
    pub fn parse(&self, text: &str) -> Option<Version> {
        let caps = self.semver.captures(text)?;
        let number = |name: &str| caps.name(name)?.as_str().parse::<u64>().ok();

        Some(Version {
            major: number("major")?,
            minor: number("minor")?,
            patch: number("patch")?,
            pre: caps.name("prerelease").map(|m| m.as_str().to_string()),
            build: caps.name("build").map(|m| m.as_str().to_string()),
        })
    }

    /// Extract the token following `version` from free-form output.
    pub fn extract<'a>(&self, output: &'a str) -> Option<&'a str> {
        self.token
            .captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Check that `observed` is a valid version no older than `required`.
    pub fn check_version(
        &self,
        observed: &str,
        required: RequiredVersion,
        tool: &str,
    ) -> Result<Version> {
        let version = self
            .parse(observed)
            .ok_or_else(|| XtoolError::VersionFormat {
                tool: tool.to_string(),
                required,
                got: observed.to_string(),
            })?;

        if !version.satisfies(required) {
            return Err(XtoolError::VersionTooOld {
                tool: tool.to_string(),
                required,
                got: observed.to_string(),
            });
        }

        tracing::debug!("{} {} satisfies minimum {}", tool, version, required);
        Ok(version)
    }

    /// Extract the version from `--version` output and check it.
    pub fn check_tool_output(
        &self,
        output: &str,
        required: RequiredVersion,
        tool: &str,
    ) -> Result<Version> {
        let output = output.trim();
        match self.extract(output) {
            Some(token) => self.check_version(token, required, tool),
            None => Err(XtoolError::VersionFormat {
                tool: tool.to_string(),
                required,
                got: output.to_string(),
            }),
        }
    }
}
