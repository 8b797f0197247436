//! Template registry for gitignore-gen.
//!
//! This module discovers, lists and resolves `.gitignore` templates from
//! pluggable providers:
//! - Bundled templates (embedded in binary, or a local directory)
//! - Remote templates (the github/gitignore repository)
//!
//! Providers hand out [`SourceDescriptor`]s while listing; the
//! [`Registry`] dispatches each descriptor back to the provider whose
//! [`ProviderKind`] it carries.
//!
//! # Example
//!
//! ```
//! use gitignore_gen::registry::{Category, Registry};
//!
//! // Load registry with built-in templates only
//! let mut registry = Registry::bundled();
//!
//! // Browse one category and resolve a template
//! let languages = registry.sources_by_category(Category::ProgrammingLanguage).unwrap();
//! if let Some(source) = languages.iter().next() {
//!     let template = registry.resolve(source).unwrap();
//!     println!("Template: {}", template.name);
//! }
//! ```

pub mod bundled;
pub mod category;
pub mod fetch;
pub mod files;
pub mod remote;
pub mod resolver;
pub mod source;
pub mod template;

// Re-exports
pub use bundled::{split_type_annotation, BundledProvider};
pub use category::Category;
pub use fetch::HttpFetcher;
pub use files::{DirectoryFiles, EmbeddedFiles, TemplateFiles};
pub use remote::RemoteProvider;
pub use resolver::Registry;
pub use source::{ProviderKind, SourceDescriptor, SourceProvider};
pub use template::Template;
