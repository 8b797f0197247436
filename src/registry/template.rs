//! Resolved templates.

use crate::registry::category::Category;
use crate::registry::source::SourceDescriptor;
use serde::Serialize;

/// Renderable result of resolving one [`SourceDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Template {
    /// Template name (e.g. "Windows", "C++" or "JetBrains")
    pub name: String,

    /// Category the template belongs to
    pub category: Category,

    /// Locator of the originating descriptor, shown as provenance
    pub source_locator: String,

    /// Ignore rules, with any annotation line already removed
    pub body: String,
}

impl Template {
    /// Build a template for `source` with the given body.
    pub fn from_source(source: &SourceDescriptor, body: impl Into<String>) -> Self {
        Self {
            name: source.name.clone(),
            category: source.category,
            source_locator: source.locator.clone(),
            body: body.into(),
        }
    }

    /// Number of non-blank, non-comment lines in the body.
    pub fn rule_count(&self) -> usize {
        self.body
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .count()
    }
}
