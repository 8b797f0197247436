//! Provider registry with cached catalogs.
//!
//! The registry holds an explicit list of [`SourceProvider`]s and answers
//! catalog queries across all of them. Two caches back the queries:
//!
//! - `all_sources`: filled as a whole by [`Registry::all_sources`]
//! - `by_category`: filled per category by [`Registry::sources_by_category`],
//!   but only when derived from `all_sources`
//!
//! Querying a category before the full catalog is known asks the providers
//! directly and caches nothing. Both caches live until
//! [`Registry::clear_cache`].

use crate::config::GenConfig;
use crate::error::{GenError, Result};
use crate::registry::bundled::BundledProvider;
use crate::registry::category::Category;
use crate::registry::fetch::HttpFetcher;
use crate::registry::remote::RemoteProvider;
use crate::registry::source::{ProviderKind, SourceDescriptor, SourceProvider};
use crate::registry::template::Template;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::time::Duration;

/// Registry that aggregates templates from multiple providers.
pub struct Registry {
    providers: Vec<Box<dyn SourceProvider>>,
    all_sources: Option<BTreeSet<SourceDescriptor>>,
    by_category: HashMap<Category, BTreeSet<SourceDescriptor>>,
}

impl Registry {
    /// Create a registry over an explicit provider list.
    pub fn new(providers: Vec<Box<dyn SourceProvider>>) -> Self {
        for provider in &providers {
            tracing::debug!(
                "Registered provider '{}' ({})",
                provider.name(),
                provider.kind()
            );
        }

        Self {
            providers,
            all_sources: None,
            by_category: HashMap::new(),
        }
    }

    /// Create a registry with only the embedded templates.
    pub fn bundled() -> Self {
        Self::new(vec![Box::new(BundledProvider::embedded())])
    }

    /// Create the provider set described by configuration.
    ///
    /// The bundled provider is always present; it reads `templates_dir`
    /// when set and the embedded templates otherwise. The remote provider
    /// is added when enabled.
    pub fn from_config(config: &GenConfig) -> Self {
        let bundled = match &config.templates_dir {
            Some(dir) => BundledProvider::from_dir(dir),
            None => BundledProvider::embedded(),
        };
        let mut providers: Vec<Box<dyn SourceProvider>> = vec![Box::new(bundled)];

        if config.remote.enabled {
            let fetcher =
                HttpFetcher::with_timeout(Duration::from_secs(config.remote.timeout_secs));
            providers.push(Box::new(RemoteProvider::with_urls(
                config.remote.api_url.clone(),
                config.remote.raw_url.clone(),
                fetcher,
            )));
        }

        Self::new(providers)
    }

    /// Names of the active providers, in registration order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Check whether a provider of the given kind is registered.
    pub fn has_provider(&self, kind: ProviderKind) -> bool {
        self.providers.iter().any(|p| p.kind() == kind)
    }

    /// Every descriptor from every provider.
    pub fn all_sources(&mut self) -> Result<BTreeSet<SourceDescriptor>> {
        if let Some(sources) = &self.all_sources {
            tracing::debug!("Source cache hit ({} sources)", sources.len());
            return Ok(sources.clone());
        }

        let mut sources = BTreeSet::new();
        for provider in &mut self.providers {
            sources.extend(provider.all_sources()?);
        }

        tracing::debug!("Source cache populated ({} sources)", sources.len());
        self.all_sources = Some(sources.clone());
        Ok(sources)
    }

    /// Descriptors in one category.
    pub fn sources_by_category(&mut self, category: Category) -> Result<BTreeSet<SourceDescriptor>> {
        if let Some(sources) = self.by_category.get(&category) {
            return Ok(sources.clone());
        }

        if let Some(all) = &self.all_sources {
            let sources: BTreeSet<SourceDescriptor> = all
                .iter()
                .filter(|s| s.category == category)
                .cloned()
                .collect();
            self.by_category.insert(category, sources.clone());
            return Ok(sources);
        }

        // Neither cache is warm; answer from the providers without caching.
        let mut sources = BTreeSet::new();
        for provider in &mut self.providers {
            sources.extend(provider.sources_by_category(category)?);
        }
        Ok(sources)
    }

    /// Resolve a descriptor through the provider that owns it.
    pub fn resolve(&mut self, source: &SourceDescriptor) -> Result<Template> {
        let provider = self
            .providers
            .iter_mut()
            .find(|p| p.kind() == source.provider)
            .ok_or_else(|| GenError::SourceNotFound {
                provider_kind: source.provider.to_string(),
            })?;

        tracing::debug!("Resolving '{}' via {}", source.name, provider.name());
        provider.resolve(source)
    }

    /// Resolve every template of every provider, stopping at the first failure.
    pub fn resolve_all(&mut self) -> Result<Vec<Template>> {
        let mut templates = Vec::new();
        for provider in &mut self.providers {
            templates.extend(provider.resolve_all()?);
        }
        Ok(templates)
    }

    /// Look up a descriptor by name, ignoring case.
    ///
    /// When several providers expose the same name, the bundled one wins.
    pub fn find(&mut self, name: &str) -> Result<Option<SourceDescriptor>> {
        Ok(self
            .all_sources()?
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name)))
    }

    /// Drop both catalog caches.
    pub fn clear_cache(&mut self) {
        self.all_sources = None;
        self.by_category.clear();
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("providers", &self.provider_names())
            .field("all_sources_cached", &self.all_sources.is_some())
            .field("categories_cached", &self.by_category.len())
            .finish()
    }
}
