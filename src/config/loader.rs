//! Configuration file discovery and loading.

use crate::config::schema::GenConfig;
use crate::error::{GenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".gitignore-gen.yml";

/// Find the config file in a project root, if present.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// Relative `templates_dir` values are resolved against the directory
/// containing the file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read.
/// Returns `ConfigParse` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GenConfig> {
    let content = fs::read_to_string(path)?;
    let mut config = parse_config(&content, path)?;

    if let (Some(dir), Some(base)) = (&config.templates_dir, path.parent()) {
        if dir.is_relative() {
            config.templates_dir = Some(base.join(dir));
        }
    }

    Ok(config)
}

/// Parse YAML content into a [`GenConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<GenConfig> {
    if content.trim().is_empty() {
        return Ok(GenConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GenError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration for a project.
///
/// An explicit path must exist. Without one, `.gitignore-gen.yml` in the
/// project root is used when present and defaults otherwise.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<GenConfig> {
    match explicit {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)
        }
        None => match find_config(project_root) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)
            }
            None => {
                tracing::debug!("No config file in {}", project_root.display());
                Ok(GenConfig::default())
            }
        },
    }
}
