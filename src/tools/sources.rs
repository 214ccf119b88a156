//! Source file discovery.

use anyhow::Context;
use glob::{glob, Pattern};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Find files under `root` matching any of `patterns`.
///
/// Patterns are relative to `root` and support `**`. Results are sorted,
/// de-duplicated, and relative to `root`.
pub fn discover_sources(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let mut found = BTreeSet::new();

    for pattern in patterns {
        let full = format!("{}/{}", escaped_root.trim_end_matches('/'), pattern);
        let entries = glob(&full).with_context(|| format!("Invalid source pattern: {}", pattern))?;

        for entry in entries {
            let path = entry.context("Failed to read source directory")?;
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(root).map(Path::to_path_buf).unwrap_or(path);
            found.insert(relative);
        }
    }

    tracing::debug!("Discovered {} source file(s) under {}", found.len(), root.display());
    Ok(found.into_iter().collect())
}
