//! `.gitignore` assembly.
//!
//! The [`Generator`] owns the header settings, an ordered selection of
//! [`SourceDescriptor`]s and a free-text tail. [`Generator::render`]
//! resolves each selection through the [`Registry`] and joins everything
//! into one document:
//!
//! ```text
//! ## <title>
//! ## <description>
//! <notice>
//!
//! # <template name>
//! # <template locator>
//!
//! <template body>
//!
//! # Other
//!
//! <tail>
//! ```

use crate::error::{GenError, Result};
use crate::registry::{Category, Registry, SourceDescriptor};
use std::io::Write;

/// Notice appended to the banner header.
pub const APP_NOTICE: &str = "##\n\
## Generated by gitignore-gen. Each section below is copied from the\n\
## template named in its heading; edit it like any other file.\n\
##";

/// Which header is emitted at the top of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// `## title`, `## description` and the application notice.
    #[default]
    Banner,
    /// A user-supplied header printed verbatim.
    Custom,
}

/// Builds a `.gitignore` from selected templates.
#[derive(Debug)]
pub struct Generator {
    registry: Registry,
    header_mode: HeaderMode,
    custom_header: Option<String>,
    title: String,
    description: String,
    extra: String,
    selection: Vec<SourceDescriptor>,
}

impl Generator {
    /// Create a generator with an empty banner header.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            header_mode: HeaderMode::Banner,
            custom_header: None,
            title: String::new(),
            description: String::new(),
            extra: String::new(),
            selection: Vec::new(),
        }
    }

    /// Create a generator with a banner header.
    pub fn with_banner(
        registry: Registry,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut generator = Self::new(registry);
        generator.set_banner(title, description);
        generator
    }

    /// Create a generator with a custom header.
    pub fn with_custom_header(registry: Registry, header: impl Into<String>) -> Self {
        let mut generator = Self::new(registry);
        generator.set_custom_header(header);
        generator
    }

    /// Get the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Get the registry mutably, e.g. to browse its catalog.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Use `header` verbatim and switch to custom header mode.
    pub fn set_custom_header(&mut self, header: impl Into<String>) {
        self.custom_header = Some(header.into());
        self.header_mode = HeaderMode::Custom;
    }

    /// Set the banner title and description and switch to banner mode.
    pub fn set_banner(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.title = title.into();
        self.description = description.into();
        self.header_mode = HeaderMode::Banner;
    }

    /// Switch header mode without touching the stored values.
    pub fn use_custom_header(&mut self, custom: bool) {
        self.header_mode = if custom {
            HeaderMode::Custom
        } else {
            HeaderMode::Banner
        };
    }

    pub fn header_mode(&self) -> HeaderMode {
        self.header_mode
    }

    pub fn custom_header(&self) -> Option<&str> {
        self.custom_header.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the free-form rules rendered under `# Other`.
    pub fn set_extra(&mut self, extra: impl Into<String>) {
        self.extra = extra.into();
    }

    pub fn extra(&self) -> &str {
        &self.extra
    }

    /// Add a template to the end of the selection.
    pub fn append(&mut self, source: SourceDescriptor) {
        self.selection.push(source);
    }

    /// Insert a template at `index`, shifting later entries back.
    pub fn insert_at(&mut self, source: SourceDescriptor, index: usize) -> Result<()> {
        if index > self.selection.len() {
            return Err(GenError::SelectionIndex {
                index,
                len: self.selection.len(),
            });
        }
        self.selection.insert(index, source);
        Ok(())
    }

    /// Remove and return the template at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<SourceDescriptor> {
        if index >= self.selection.len() {
            return Err(GenError::SelectionIndex {
                index,
                len: self.selection.len(),
            });
        }
        Ok(self.selection.remove(index))
    }

    /// Remove the first occurrence of `source`; returns whether one was found.
    pub fn remove(&mut self, source: &SourceDescriptor) -> bool {
        match self.selection.iter().position(|s| s == source) {
            Some(index) => {
                self.selection.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check if `source` is selected.
    pub fn contains(&self, source: &SourceDescriptor) -> bool {
        self.selection.contains(source)
    }

    /// The current selection, in render order.
    pub fn selection(&self) -> &[SourceDescriptor] {
        &self.selection
    }

    /// Selected templates in one category, in render order.
    pub fn selection_by_category(&self, category: Category) -> Vec<&SourceDescriptor> {
        self.selection
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Remove every selected template.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn write_header(&self, out: &mut String) -> Result<()> {
        match self.header_mode {
            HeaderMode::Custom => {
                let header = self.custom_header.as_deref().ok_or(GenError::MissingHeader)?;
                out.push_str(header);
                out.push('\n');
            }
            HeaderMode::Banner => {
                for line in [self.title.trim(), self.description.trim()] {
                    if !line.is_empty() {
                        out.push_str("## ");
                        out.push_str(line);
                        out.push('\n');
                    }
                }
                out.push_str(APP_NOTICE);
                out.push('\n');
            }
        }
        Ok(())
    }

    /// Render the complete document.
    ///
    /// Fails without output if custom header mode has no header, or on the
    /// first selection that cannot be resolved.
    pub fn render(&mut self) -> Result<String> {
        let mut out = String::new();
        self.write_header(&mut out)?;

        for source in &self.selection {
            let template = self.registry.resolve(source)?;
            out.push_str("\n# ");
            out.push_str(&template.name);
            out.push_str("\n# ");
            out.push_str(&template.source_locator);
            out.push_str("\n\n");
            out.push_str(&template.body);
            out.push('\n');
        }

        let extra = self.extra.trim();
        if !extra.is_empty() {
            out.push_str("\n# Other\n\n");
            out.push_str(extra);
        }

        Ok(out)
    }

    /// Render and write the document as UTF-8, then flush.
    ///
    /// Nothing is written when rendering fails.
    pub fn render_to<W: Write>(&mut self, mut writer: W) -> Result<()> {
        let content = self.render()?;
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::bundled::tests::MemoryFiles;
    use crate::registry::resolver::tests::CountingProvider;
    use crate::registry::{BundledProvider, ProviderKind, SourceProvider};

    fn registry(files: &[(&str, &str)]) -> Registry {
        let provider = BundledProvider::with_files(Box::new(MemoryFiles::new(files)));
        Registry::new(vec![Box::new(provider)])
    }

    fn python_registry() -> Registry {
        registry(&[(
            "Python.gitignore",
            "# !type PROGRAMMING_LANGUAGE\n__pycache__/\n*.pyc",
        )])
    }

    fn source(generator: &mut Generator, name: &str) -> SourceDescriptor {
        generator.registry_mut().find(name).unwrap().unwrap()
    }

    fn stub_generator() -> Generator {
        let provider = CountingProvider::new(
            ProviderKind::Bundled,
            &[
                ("A", Category::Other),
                ("B", Category::Ide),
                ("C", Category::Os),
            ],
        );
        let providers: Vec<Box<dyn SourceProvider>> = vec![Box::new(provider)];
        Generator::new(Registry::new(providers))
    }

    #[test]
    fn renders_banner_and_template() {
        let mut generator = Generator::with_banner(python_registry(), "MyProj", "");
        let python = source(&mut generator, "Python");
        generator.append(python);

        let expected = format!(
            "## MyProj\n{}\n\n# Python\n# templates/Python.gitignore\n\n__pycache__/\n*.pyc\n",
            APP_NOTICE
        );
        assert_eq!(generator.render().unwrap(), expected);
    }

    #[test]
    fn banner_trims_and_skips_blank_lines() {
        let mut generator = Generator::with_banner(python_registry(), "  Proj  ", "   ");
        let out = generator.render().unwrap();
        assert_eq!(out, format!("## Proj\n{}\n", APP_NOTICE));
    }

    #[test]
    fn banner_includes_description() {
        let mut generator = Generator::with_banner(python_registry(), "", "backend");
        let out = generator.render().unwrap();
        assert!(out.starts_with("## backend\n##\n"));
    }

    #[test]
    fn custom_header_is_verbatim() {
        let mut generator = Generator::with_custom_header(python_registry(), "# mine  ");
        assert_eq!(generator.render().unwrap(), "# mine  \n");
    }

    #[test]
    fn custom_mode_without_header_fails() {
        let mut generator = Generator::new(python_registry());
        let python = source(&mut generator, "Python");
        generator.append(python);
        generator.use_custom_header(true);

        assert!(matches!(generator.render(), Err(GenError::MissingHeader)));

        let mut sink = Vec::new();
        assert!(generator.render_to(&mut sink).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn switching_modes_keeps_values() {
        let mut generator = Generator::with_banner(python_registry(), "T", "D");
        generator.set_custom_header("# custom");
        assert_eq!(generator.header_mode(), HeaderMode::Custom);

        generator.use_custom_header(false);
        assert_eq!(generator.header_mode(), HeaderMode::Banner);
        assert_eq!(generator.title(), "T");
        assert_eq!(generator.custom_header(), Some("# custom"));
        assert!(generator.render().unwrap().starts_with("## T\n## D\n"));
    }

    #[test]
    fn other_section_uses_trimmed_tail() {
        let mut generator = Generator::with_banner(python_registry(), "", "");
        generator.set_extra("\n  secrets.env\n.env\n\n");
        let out = generator.render().unwrap();
        assert!(out.ends_with("\n# Other\n\nsecrets.env\n.env"));
    }

    #[test]
    fn blank_tail_omits_other_section() {
        let mut generator = Generator::with_banner(python_registry(), "", "");
        generator.set_extra(" \n\t ");
        assert!(!generator.render().unwrap().contains("# Other"));
    }

    #[test]
    fn blocks_follow_selection_order() {
        let mut generator = stub_generator();
        let a = source(&mut generator, "A");
        let b = source(&mut generator, "B");
        let c = source(&mut generator, "C");
        generator.append(c);
        generator.append(a);
        generator.insert_at(b, 1).unwrap();

        let out = generator.render().unwrap();
        let pos = |name: &str| out.find(&format!("\n# {}\n", name)).unwrap();
        assert!(pos("C") < pos("B"));
        assert!(pos("B") < pos("A"));
    }

    #[test]
    fn duplicates_render_twice() {
        let mut generator = stub_generator();
        let a = source(&mut generator, "A");
        generator.append(a.clone());
        generator.append(a);

        let out = generator.render().unwrap();
        assert_eq!(out.matches("\n# A\n").count(), 2);
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn duplicates_render_without_warnings() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut generator = stub_generator();
        let a = source(&mut generator, "A");
        generator.append(a.clone());
        generator.append(a);

        let out = tracing::subscriber::with_default(subscriber, || generator.render()).unwrap();

        assert_eq!(out.matches("\n# A\n").count(), 2);
        assert!(logs.0.lock().unwrap().is_empty());
    }

    #[test]
    fn render_is_idempotent() {
        let mut generator = stub_generator();
        let a = source(&mut generator, "A");
        generator.append(a);
        generator.set_extra("tmp/");

        let first = generator.render().unwrap();
        let second = generator.render().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unresolvable_selection_aborts_render() {
        let mut generator = Generator::with_banner(python_registry(), "T", "");
        let python = source(&mut generator, "Python");
        generator.append(python);
        generator.append(SourceDescriptor::new(
            "Remote",
            "https://example.com/Remote.gitignore",
            Category::Other,
            ProviderKind::Remote,
        ));

        assert!(matches!(
            generator.render(),
            Err(GenError::SourceNotFound { .. })
        ));
    }

    #[test]
    fn selection_mutations() {
        let mut generator = stub_generator();
        let a = source(&mut generator, "A");
        let b = source(&mut generator, "B");

        generator.append(a.clone());
        assert!(generator.contains(&a));
        assert!(!generator.contains(&b));

        assert!(matches!(
            generator.insert_at(b.clone(), 5),
            Err(GenError::SelectionIndex { index: 5, len: 1 })
        ));
        generator.insert_at(b.clone(), 0).unwrap();
        assert_eq!(generator.selection(), &[b.clone(), a.clone()]);

        assert_eq!(generator.remove_at(0).unwrap(), b);
        assert!(generator.remove_at(3).is_err());

        assert!(!generator.remove(&b));
        assert!(generator.remove(&a));
        assert!(generator.selection().is_empty());
    }

    #[test]
    fn remove_drops_first_occurrence_only() {
        let mut generator = stub_generator();
        let a = source(&mut generator, "A");
        let b = source(&mut generator, "B");
        generator.append(a.clone());
        generator.append(b.clone());
        generator.append(a.clone());

        generator.remove(&a);
        assert_eq!(generator.selection(), &[b, a]);
    }

    #[test]
    fn selection_by_category_filters() {
        let mut generator = stub_generator();
        for name in ["A", "B", "C"] {
            let s = source(&mut generator, name);
            generator.append(s);
        }

        let ides = generator.selection_by_category(Category::Ide);
        assert_eq!(ides.len(), 1);
        assert_eq!(ides[0].name, "B");

        generator.clear_selection();
        assert!(generator.selection().is_empty());
    }

    #[test]
    fn render_to_writes_document() {
        let mut generator = Generator::with_custom_header(python_registry(), "# head");
        let python = source(&mut generator, "Python");
        generator.append(python);

        let mut sink = Vec::new();
        generator.render_to(&mut sink).unwrap();
        let written = String::from_utf8(sink).unwrap();
        assert_eq!(written, generator.render().unwrap());
    }
}
