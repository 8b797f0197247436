//! Source descriptors and the provider contract.
//!
//! A [`SourceDescriptor`] says *where* a template comes from without
//! carrying its content. Providers create descriptors while enumerating
//! their catalog and turn them back into [`Template`]s on request.

use crate::error::Result;
use crate::registry::category::Category;
use crate::registry::template::Template;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Identifies which provider variant owns a descriptor.
///
/// Adding a provider means adding a variant here; the registry
/// dispatches resolution by comparing kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Template files shipped with the binary or read from a local directory.
    Bundled,
    /// Templates fetched from a hosted repository over HTTP.
    Remote,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable identifier of a resolvable template.
///
/// Equality covers all four fields. Ordering puts bundled sources
/// before remote ones, then sorts by name and locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SourceDescriptor {
    /// Provider that can resolve this descriptor.
    pub provider: ProviderKind,

    /// Display name (e.g. "Python", "JetBrains").
    pub name: String,

    /// Opaque location understood only by the owning provider.
    pub locator: String,

    /// Category of the template.
    pub category: Category,
}

impl SourceDescriptor {
    /// Create a new descriptor.
    pub fn new(
        name: impl Into<String>,
        locator: impl Into<String>,
        category: Category,
        provider: ProviderKind,
    ) -> Self {
        Self {
            provider,
            name: name.into(),
            locator: locator.into(),
            category,
        }
    }
}

/// A capability that can enumerate and resolve templates from one origin.
///
/// Methods take `&mut self` so implementations can cache listings and
/// content without interior mutability.
pub trait SourceProvider {
    /// Stable human-readable identifier.
    fn name(&self) -> &str;

    /// Kind stamped on every descriptor this provider creates.
    fn kind(&self) -> ProviderKind;

    /// Every template this provider can resolve.
    fn all_sources(&mut self) -> Result<BTreeSet<SourceDescriptor>>;

    /// Subset of [`all_sources`](Self::all_sources) in the given category.
    fn sources_by_category(&mut self, category: Category) -> Result<BTreeSet<SourceDescriptor>> {
        Ok(self
            .all_sources()?
            .into_iter()
            .filter(|s| s.category == category)
            .collect())
    }

    /// Fetch and parse one descriptor owned by this provider.
    fn resolve(&mut self, source: &SourceDescriptor) -> Result<Template>;

    /// Resolve every descriptor, stopping at the first failure.
    fn resolve_all(&mut self) -> Result<Vec<Template>> {
        let sources = self.all_sources()?;
        sources.iter().map(|s| self.resolve(s)).collect()
    }
}
