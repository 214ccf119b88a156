//! Configuration file discovery and loading.

use crate::config::schema::XtoolConfig;
use crate::error::{Result, XtoolError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".xtool.yml";

/// Find the project config at `<project_root>/.xtool.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the project config is used if
/// present, otherwise defaults.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<XtoolConfig> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(XtoolError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => path.to_path_buf(),
        None => match find_project_config(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(XtoolConfig::default());
            }
        },
    };

    load_config_file(&path)
}

/// Parse a single config file.
pub fn load_config_file(path: &Path) -> Result<XtoolConfig> {
    tracing::debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

fn parse_config(content: &str, path: &Path) -> Result<XtoolConfig> {
    if content.trim().is_empty() {
        return Ok(XtoolConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| XtoolError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
