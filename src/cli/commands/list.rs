//! List command implementation.
//!
//! The `gitignore-gen list` command lists available templates, grouped
//! by category.

use std::collections::BTreeSet;

use crate::cli::args::ListArgs;
use crate::config::GenConfig;
use crate::error::{GenError, Result};
use crate::registry::{Category, Registry, SourceDescriptor};
use crate::ui::theme::GenTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config: GenConfig,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: GenConfig, args: ListArgs) -> Self {
        Self { config, args }
    }

    fn format_listing(sources: &BTreeSet<SourceDescriptor>, theme: &GenTheme) -> String {
        let mut out = String::new();

        for category in Category::ALL {
            let entries: Vec<&SourceDescriptor> =
                sources.iter().filter(|s| s.category == category).collect();
            if entries.is_empty() {
                continue;
            }

            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("{}\n", theme.key.apply_to(format!("{}:", category.label()))));
            for source in entries {
                out.push_str(&format!(
                    "  {} {}\n",
                    theme.highlight.apply_to(&source.name),
                    theme.dim.apply_to(format!("({})", source.provider))
                ));
            }
        }

        out
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut registry = Registry::from_config(&self.config);

        let sources = match self.args.category {
            Some(category) => registry.sources_by_category(category)?,
            None => registry.all_sources()?,
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&sources)
                .map_err(|e| GenError::Other(e.into()))?;
            ui.document(&format!("{}\n", json))?;
            return Ok(CommandResult::success());
        }

        if sources.is_empty() {
            ui.warning("No templates found");
            return Ok(CommandResult::success());
        }

        ui.document(&Self::format_listing(&sources, &GenTheme::detect()))?;
        Ok(CommandResult::success())
    }
}
