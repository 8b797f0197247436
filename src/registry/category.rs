//! Template categories.
//!
//! Every template belongs to exactly one [`Category`]. Bundled templates
//! declare theirs with a `# !type <CATEGORY>` comment line; everything
//! else defaults to [`Category::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed classification of a template's subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Operating systems (Windows, macOS, Linux).
    Os,
    /// Programming languages and their toolchains.
    ProgrammingLanguage,
    /// Libraries and frameworks (Qt, Django, ...).
    Library,
    /// Standalone utilities such as build tools or compilers.
    Utility,
    /// Editors and IDEs.
    Ide,
    /// Anything without a more specific category.
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Os,
        Category::ProgrammingLanguage,
        Category::Library,
        Category::Utility,
        Category::Ide,
        Category::Other,
    ];

    /// The exact token used in template annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Os => "OS",
            Self::ProgrammingLanguage => "PROGRAMMING_LANGUAGE",
            Self::Library => "LIBRARY",
            Self::Utility => "UTILITY",
            Self::Ide => "IDE",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Os => "Operating systems",
            Self::ProgrammingLanguage => "Programming languages",
            Self::Library => "Libraries",
            Self::Utility => "Utilities",
            Self::Ide => "IDEs and editors",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is case-sensitive: `IDE` is valid, `ide` is not.
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}
