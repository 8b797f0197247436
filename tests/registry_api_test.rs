//! Integration tests for the registry public API.

use gitignore_gen::registry::{
    BundledProvider, Category, HttpFetcher, ProviderKind, Registry, RemoteProvider,
    SourceDescriptor, SourceProvider, Template,
};
use gitignore_gen::{GenError, Result};
use httpmock::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

/// Provider defined outside the crate, owning the remote kind.
struct StaticProvider {
    sources: BTreeSet<SourceDescriptor>,
}

impl StaticProvider {
    fn new(names: &[(&str, Category)]) -> Self {
        let sources = names
            .iter()
            .map(|(name, category)| {
                SourceDescriptor::new(
                    *name,
                    format!("static://{}", name),
                    *category,
                    ProviderKind::Remote,
                )
            })
            .collect();
        Self { sources }
    }
}

impl SourceProvider for StaticProvider {
    fn name(&self) -> &str {
        "Static"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Remote
    }

    fn all_sources(&mut self) -> Result<BTreeSet<SourceDescriptor>> {
        Ok(self.sources.clone())
    }

    fn resolve(&mut self, source: &SourceDescriptor) -> Result<Template> {
        Ok(Template::from_source(source, format!("# from {}", source.locator)))
    }
}

fn template_dir(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (path, content) in files {
        let full = temp.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }
    temp
}

#[test]
fn bundled_registry_lists_embedded_templates() {
    let mut registry = Registry::bundled();
    let sources = registry.all_sources().unwrap();

    assert!(sources.iter().any(|s| s.name == "Rust"));
    assert!(sources.iter().all(|s| s.provider == ProviderKind::Bundled));
    assert_eq!(registry.provider_names(), vec![BundledProvider::NAME]);
}

#[test]
fn category_queries_are_subsets_of_all_sources() {
    let mut registry = Registry::bundled();
    let all = registry.all_sources().unwrap();

    for category in Category::ALL {
        let subset = registry.sources_by_category(category).unwrap();
        assert!(subset.is_subset(&all));
        assert!(subset.iter().all(|s| s.category == category));
    }
}

#[test]
fn directory_templates_are_scanned_recursively() {
    let dir = template_dir(&[
        ("Go.gitignore", "# !type PROGRAMMING_LANGUAGE\n*.test\n"),
        ("Global/Emacs.gitignore", "# !type IDE\n*~\n"),
        ("notes.txt", "not a template"),
    ]);
    let mut registry = Registry::new(vec![Box::new(BundledProvider::from_dir(dir.path()))]);

    let sources = registry.all_sources().unwrap();
    let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Emacs", "Go"]);

    let emacs = registry.find("emacs").unwrap().unwrap();
    assert_eq!(emacs.category, Category::Ide);
    let template = registry.resolve(&emacs).unwrap();
    assert_eq!(template.body, "*~\n");
}

#[test]
fn mixed_providers_are_unioned() {
    let dir = template_dir(&[("Vim.gitignore", "# !type IDE\n*.swp\n")]);
    let bundled = BundledProvider::from_dir(dir.path());
    let custom = StaticProvider::new(&[("Vim", Category::Other), ("Zig", Category::Other)]);
    let mut registry = Registry::new(vec![Box::new(bundled), Box::new(custom)]);

    assert_eq!(registry.all_sources().unwrap().len(), 3);
    assert_eq!(
        registry.find("VIM").unwrap().unwrap().provider,
        ProviderKind::Bundled
    );

    let zig = registry.find("zig").unwrap().unwrap();
    assert_eq!(registry.resolve(&zig).unwrap().body, "# from static://Zig");
}

#[test]
fn vanished_provider_fails_resolution() {
    let mut registry = Registry::bundled();
    let orphan = SourceDescriptor::new(
        "Zig",
        "static://Zig",
        Category::Other,
        ProviderKind::Remote,
    );

    match registry.resolve(&orphan) {
        Err(GenError::SourceNotFound { provider_kind }) => assert_eq!(provider_kind, "remote"),
        other => panic!("expected SourceNotFound, got {:?}", other),
    }
}

#[test]
fn remote_provider_against_mock_api() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/contents/");
        then.status(200).body(
            r#"[{"type": "file", "name": "Zig.gitignore", "path": "Zig.gitignore"}]"#,
        );
    });
    let raw = server.mock(|when, then| {
        when.method(GET).path("/raw/Zig.gitignore");
        then.status(200).body("zig-cache/\nzig-out/\n");
    });

    let remote = RemoteProvider::with_urls(
        server.url("/contents/"),
        server.url("/raw"),
        HttpFetcher::new(),
    );
    let mut registry = Registry::new(vec![Box::new(remote)]);

    let zig = registry.find("Zig").unwrap().unwrap();
    assert_eq!(zig.provider, ProviderKind::Remote);
    assert_eq!(zig.category, Category::Other);

    let templates = registry.resolve_all().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].body, "zig-cache/\nzig-out/\n");
    raw.assert_calls(1);
}

#[test]
fn cached_listing_survives_new_files_until_rebuilt() {
    let dir = template_dir(&[("Go.gitignore", "*.test\n")]);
    let mut registry = Registry::new(vec![Box::new(BundledProvider::from_dir(dir.path()))]);
    assert_eq!(registry.all_sources().unwrap().len(), 1);

    fs::write(dir.path().join("Node.gitignore"), "node_modules/\n").unwrap();
    assert_eq!(registry.all_sources().unwrap().len(), 1);

    let mut rebuilt = Registry::new(vec![Box::new(BundledProvider::from_dir(dir.path()))]);
    assert_eq!(rebuilt.all_sources().unwrap().len(), 2);
}
