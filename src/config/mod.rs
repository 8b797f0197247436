//! Configuration loading for gitignore-gen.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use gitignore_gen::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".gitignore-gen.yml"), "title: Demo").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.title, Some("Demo".to_string()));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{GenConfig, RemoteConfig};
