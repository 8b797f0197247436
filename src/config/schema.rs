//! Configuration schema definitions.
//!
//! These types map directly to the YAML structure of
//! `.gitignore-gen.yml`. Every field is optional; command-line flags
//! override whatever the file sets.

use crate::registry::remote::{DEFAULT_API_URL, DEFAULT_RAW_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Banner title (`## <title>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Banner description (`## <description>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Custom header printed verbatim instead of the banner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_header: Option<String>,

    /// Template names to include, in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<String>,

    /// Free-form rules appended under `# Other`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,

    /// Where to write the generated file (stdout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Directory of `.gitignore` templates replacing the embedded set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,

    /// Remote repository provider
    pub remote: RemoteConfig,
}

/// Settings for the remote repository provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Register the remote provider
    pub enabled: bool,

    /// Contents API root used for directory listings
    pub api_url: String,

    /// Raw file root used when a listing has no download URL
    pub raw_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: DEFAULT_API_URL.to_string(),
            raw_url: DEFAULT_RAW_URL.to_string(),
            timeout_secs: 10,
        }
    }
}
