//! Remote template provider backed by a hosted repository.
//!
//! Walks the repository's directory tree through the GitHub contents API
//! and fetches raw template files on demand. The walk is a sequential
//! breadth-first traversal: each directory is fetched before any of its
//! children are queued.

use serde::Deserialize;
use std::collections::{BTreeSet, VecDeque};
use std::time::Duration;

use super::category::Category;
use super::fetch::HttpFetcher;
use super::files::{is_template_file_name, template_name};
use super::source::{ProviderKind, SourceDescriptor, SourceProvider};
use super::template::Template;
use crate::error::{GenError, Result};

/// Contents API root of the github/gitignore repository.
pub const DEFAULT_API_URL: &str = "https://api.github.com/repos/github/gitignore/contents/";

/// Raw file root of the github/gitignore repository.
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com/github/gitignore/main";

/// One entry of a directory listing.
#[derive(Debug, Clone, Deserialize)]
struct ContentEntry {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    path: String,
    #[serde(default)]
    download_url: Option<String>,
}

/// Provider for templates hosted in a remote repository.
pub struct RemoteProvider {
    fetcher: HttpFetcher,
    api_url: String,
    raw_url: String,
    all_sources: Option<BTreeSet<SourceDescriptor>>,
}

impl RemoteProvider {
    pub const NAME: &'static str = "GitHub gitignore repository";

    /// Provider for github/gitignore with the default timeout.
    pub fn new() -> Self {
        Self::with_urls(DEFAULT_API_URL, DEFAULT_RAW_URL, HttpFetcher::new())
    }

    /// Provider for a custom contents API and raw file root.
    pub fn with_urls(
        api_url: impl Into<String>,
        raw_url: impl Into<String>,
        fetcher: HttpFetcher,
    ) -> Self {
        let mut api_url = api_url.into();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }
        Self {
            fetcher,
            api_url,
            raw_url: raw_url.into().trim_end_matches('/').to_string(),
            all_sources: None,
        }
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.fetcher.timeout()
    }

    fn load_error(message: impl Into<String>) -> GenError {
        GenError::SourceLoad {
            provider: Self::NAME.to_string(),
            message: message.into(),
        }
    }

    /// Collect every file entry in the repository, skipping dot-directories.
    fn walk(&self) -> Result<Vec<ContentEntry>> {
        let mut pending = VecDeque::from([String::new()]);
        let mut files = Vec::new();

        while let Some(path) = pending.pop_front() {
            let url = format!("{}{}", self.api_url, path);
            tracing::debug!("Listing remote directory '{}'", path);

            let entries: Vec<ContentEntry> = self
                .fetcher
                .fetch_json(&url)
                .map_err(|e| Self::load_error(format!("{:#}", e)))?;

            for entry in entries {
                match entry.kind.as_str() {
                    "dir" if entry.name.starts_with('.') => {}
                    "dir" => pending.push_back(entry.path.clone()),
                    "file" => files.push(entry.clone()),
                    other => {
                        return Err(Self::load_error(format!(
                            "Invalid entry type '{}' for {}",
                            other, entry.path
                        )));
                    }
                }
            }
        }

        Ok(files)
    }

    fn descriptor_for(&self, entry: &ContentEntry) -> SourceDescriptor {
        let locator = entry
            .download_url
            .clone()
            .unwrap_or_else(|| format!("{}/{}", self.raw_url, entry.path));
        SourceDescriptor::new(
            template_name(&entry.path),
            locator,
            Category::Other,
            ProviderKind::Remote,
        )
    }
}

impl Default for RemoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceProvider for RemoteProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Remote
    }

    fn all_sources(&mut self) -> Result<BTreeSet<SourceDescriptor>> {
        if let Some(sources) = &self.all_sources {
            return Ok(sources.clone());
        }

        let sources: BTreeSet<SourceDescriptor> = self
            .walk()?
            .iter()
            .filter(|e| is_template_file_name(&e.name))
            .map(|e| self.descriptor_for(e))
            .collect();

        tracing::debug!("Found {} remote templates", sources.len());
        self.all_sources = Some(sources.clone());
        Ok(sources)
    }

    fn resolve(&mut self, source: &SourceDescriptor) -> Result<Template> {
        let body = self
            .fetcher
            .fetch_text(&source.locator)
            .map_err(|e| GenError::TemplateParsing {
                template: source.locator.clone(),
                message: format!("{:#}", e),
            })?;
        Ok(Template::from_source(source, body))
    }
}
