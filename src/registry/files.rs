//! Access to bundled template files.
//!
//! The bundled provider reads templates through the [`TemplateFiles`]
//! trait so the same parsing code serves both the templates embedded in
//! the binary and a template directory on disk.

use include_dir::{include_dir, Dir};
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// File names that count as templates: `<name>.gitignore`.
static TEMPLATE_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\s_\\.\-():]+\.gitignore$").expect("template file pattern is valid")
});

/// Suffix stripped from file names to form template names.
pub const TEMPLATE_EXTENSION: &str = ".gitignore";

/// Check whether a file name looks like a template file.
pub fn is_template_file_name(file_name: &str) -> bool {
    TEMPLATE_FILE_NAME.is_match(file_name)
}

/// Template name for a relative path, i.e. the file name without suffix.
pub fn template_name(relative_path: &str) -> &str {
    let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
    file_name
        .strip_suffix(TEMPLATE_EXTENSION)
        .unwrap_or(file_name)
}

/// Read-only view of a tree of template files.
///
/// Paths are relative to the root and always use `/` as separator.
pub trait TemplateFiles {
    /// Prefix used when building locators: `templates` for the embedded
    /// bundle, the directory path for templates on disk.
    fn locator_prefix(&self) -> String;

    /// Relative paths of every template file under the root.
    fn list(&self) -> io::Result<Vec<String>>;

    /// Raw bytes of one template file.
    fn read(&self, relative_path: &str) -> io::Result<Vec<u8>>;
}

/// Templates compiled into the binary from `templates/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFiles;

impl EmbeddedFiles {
    fn collect(dir: &Dir<'_>, paths: &mut Vec<String>) {
        for file in dir.files() {
            let path = file.path();
            let is_template = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(is_template_file_name)
                .unwrap_or(false);
            if is_template {
                paths.push(to_slash_path(path));
            }
        }
        for sub in dir.dirs() {
            Self::collect(sub, paths);
        }
    }
}

impl TemplateFiles for EmbeddedFiles {
    fn locator_prefix(&self) -> String {
        "templates".to_string()
    }

    fn list(&self) -> io::Result<Vec<String>> {
        let mut paths = Vec::new();
        Self::collect(&TEMPLATES_DIR, &mut paths);
        paths.sort();
        Ok(paths)
    }

    fn read(&self, relative_path: &str) -> io::Result<Vec<u8>> {
        TEMPLATES_DIR
            .get_file(relative_path)
            .map(|f| f.contents().to_vec())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("template not found in bundle: {}", relative_path),
                )
            })
    }
}

/// Templates read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryFiles {
    root: PathBuf,
}

impl DirectoryFiles {
    /// Use `root` as the template directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collect(&self, dir: &Path, paths: &mut Vec<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                self.collect(&path, paths)?;
            } else if path
                .file_name()
                .and_then(|n| n.to_str())
                .map(is_template_file_name)
                .unwrap_or(false)
            {
                if let Ok(relative) = path.strip_prefix(&self.root) {
                    paths.push(to_slash_path(relative));
                }
            }
        }

        Ok(())
    }
}

impl TemplateFiles for DirectoryFiles {
    fn locator_prefix(&self) -> String {
        self.root.display().to_string()
    }

    fn list(&self) -> io::Result<Vec<String>> {
        let mut paths = Vec::new();
        self.collect(&self.root, &mut paths)?;
        paths.sort();
        Ok(paths)
    }

    fn read(&self, relative_path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(relative_path))
    }
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
