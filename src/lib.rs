//! gitignore-gen - Assemble `.gitignore` files from templates.
//!
//! Templates come from pluggable providers: the set bundled with the
//! binary (or a template directory on disk) and, optionally, the
//! github/gitignore repository. A [`generator::Generator`] renders an
//! ordered selection of them under a header, followed by free-form rules.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration file loading
//! - [`error`] - Error types and result aliases
//! - [`generator`] - Selection and rendering
//! - [`registry`] - Template providers and catalog caching
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use gitignore_gen::generator::Generator;
//! use gitignore_gen::registry::Registry;
//!
//! let mut generator = Generator::with_banner(Registry::bundled(), "MyProj", "");
//! let rust = generator.registry_mut().find("rust").unwrap().unwrap();
//! generator.append(rust);
//! generator.set_extra("local/");
//!
//! let content = generator.render().unwrap();
//! assert!(content.starts_with("## MyProj\n"));
//! assert!(content.contains("\n# Rust\n# templates/Rust.gitignore\n"));
//! assert!(content.ends_with("\n# Other\n\nlocal/"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod registry;
pub mod ui;

pub use error::{GenError, Result};
