//! Bundled template provider.
//!
//! Serves `.gitignore` templates from a [`TemplateFiles`] tree, either the
//! templates embedded at compile time or a directory on disk. A template
//! declares its category with a comment line such as `# !type IDE`; the
//! line is stripped from the body before rendering.

use crate::error::{GenError, Result};
use crate::registry::category::Category;
use crate::registry::files::{template_name, DirectoryFiles, EmbeddedFiles, TemplateFiles};
use crate::registry::source::{ProviderKind, SourceDescriptor, SourceProvider};
use crate::registry::template::Template;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// Keyword that marks a category annotation inside a comment line.
pub const TYPE_KEYWORD: &str = "!type";

/// Find the first annotation line, parse its category and remove it.
///
/// A line counts when its trimmed form starts with `#` and it contains
/// [`TYPE_KEYWORD`]. Only the first such line is considered; the whole
/// line, including its newline, is removed from the returned body.
/// Content without an annotation is [`Category::Other`] and unchanged.
pub fn split_type_annotation(content: &str) -> std::result::Result<(Category, String), String> {
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        if line.trim().starts_with('#') {
            if let Some(pos) = line.find(TYPE_KEYWORD) {
                let token = line[pos + TYPE_KEYWORD.len()..].trim();
                if token.is_empty() {
                    return Err(format!("missing category after '{}'", TYPE_KEYWORD));
                }
                let category = token.parse::<Category>()?;

                let mut body = String::with_capacity(content.len() - line.len());
                body.push_str(&content[..offset]);
                body.push_str(&content[offset + line.len()..]);
                return Ok((category, body));
            }
        }
        offset += line.len();
    }

    Ok((Category::Other, content.to_string()))
}

/// Provider for template files shipped with the application.
pub struct BundledProvider {
    files: Box<dyn TemplateFiles>,
    /// Parsed templates keyed by locator.
    parsed: HashMap<String, (SourceDescriptor, String)>,
    all_sources: Option<BTreeSet<SourceDescriptor>>,
}

impl BundledProvider {
    pub const NAME: &'static str = "Bundled templates";

    /// Provider over the templates embedded in the binary.
    pub fn embedded() -> Self {
        Self::with_files(Box::new(EmbeddedFiles))
    }

    /// Provider over a template directory on disk.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self::with_files(Box::new(DirectoryFiles::new(root)))
    }

    /// Provider over any template file tree.
    pub fn with_files(files: Box<dyn TemplateFiles>) -> Self {
        Self {
            files,
            parsed: HashMap::new(),
            all_sources: None,
        }
    }

    fn locator_for(&self, relative_path: &str) -> String {
        format!("{}/{}", self.files.locator_prefix(), relative_path)
    }

    fn relative_path<'a>(&self, locator: &'a str) -> Option<&'a str> {
        let prefix = self.files.locator_prefix();
        locator
            .strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
    }

    /// Read and parse one template file, caching the result.
    fn load(&mut self, relative_path: &str) -> Result<&(SourceDescriptor, String)> {
        let locator = self.locator_for(relative_path);

        if !self.parsed.contains_key(&locator) {
            tracing::debug!("Reading bundled template {}", locator);

            let bytes =
                self.files
                    .read(relative_path)
                    .map_err(|e| GenError::TemplateParsing {
                        template: locator.clone(),
                        message: e.to_string(),
                    })?;
            let content = String::from_utf8(bytes).map_err(|_| GenError::TemplateParsing {
                template: locator.clone(),
                message: "Invalid UTF-8".to_string(),
            })?;
            let (category, body) =
                split_type_annotation(&content).map_err(|message| GenError::TemplateParsing {
                    template: locator.clone(),
                    message,
                })?;

            let source = SourceDescriptor::new(
                template_name(relative_path),
                locator.clone(),
                category,
                ProviderKind::Bundled,
            );
            self.parsed.insert(locator.clone(), (source, body));
        }

        self.parsed
            .get(&locator)
            .ok_or_else(|| GenError::TemplateParsing {
                template: locator,
                message: "template missing from cache after load".to_string(),
            })
    }
}

impl SourceProvider for BundledProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Bundled
    }

    fn all_sources(&mut self) -> Result<BTreeSet<SourceDescriptor>> {
        if let Some(sources) = &self.all_sources {
            return Ok(sources.clone());
        }

        let paths = self.files.list().map_err(|e| GenError::SourceLoad {
            provider: Self::NAME.to_string(),
            message: format!("{}: {}", self.files.locator_prefix(), e),
        })?;

        let mut sources = BTreeSet::new();
        for path in &paths {
            let (source, _) = self.load(path)?;
            sources.insert(source.clone());
        }

        tracing::debug!("Loaded {} bundled templates", sources.len());
        self.all_sources = Some(sources.clone());
        Ok(sources)
    }

    fn resolve(&mut self, source: &SourceDescriptor) -> Result<Template> {
        let relative = self
            .relative_path(&source.locator)
            .map(str::to_string)
            .ok_or_else(|| GenError::TemplateParsing {
                template: source.locator.clone(),
                message: "not a bundled template locator".to_string(),
            })?;

        let (parsed, body) = self.load(&relative)?;
        Ok(Template::from_source(parsed, body.clone()))
    }
}
