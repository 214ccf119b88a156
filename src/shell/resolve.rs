//! Locating external tools.
//!
//! Lookup walks `PATH` directly rather than shelling out to `which`, whose
//! behavior varies across systems.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over the given directories.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for candidate in candidates(&dir.join(tool)) {
            if is_runnable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Resolve a command name or path to an executable file.
///
/// Anything containing a path separator is checked as-is (relative to the
/// current directory); bare names are looked up on `PATH`.
pub fn find_command(command: &str) -> Option<PathBuf> {
    if command.is_empty() {
        return None;
    }

    let path = Path::new(command);
    if path.components().count() > 1 || path.is_absolute() {
        return candidates(path).into_iter().find(|c| is_runnable(c));
    }

    resolve_tool_path(command, &path_entries())
}

/// Directories listed in the `PATH` environment variable.
pub fn path_entries() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|p| std::env::split_paths(&p).collect())
        .unwrap_or_default()
}

fn is_runnable(path: &Path) -> bool {
    path.is_file() && is_executable(path)
}

#[cfg(windows)]
fn candidates(path: &Path) -> Vec<PathBuf> {
    vec![path.to_path_buf(), path.with_extension("exe")]
}

#[cfg(not(windows))]
fn candidates(path: &Path) -> Vec<PathBuf> {
    vec![path.to_path_buf()]
}
