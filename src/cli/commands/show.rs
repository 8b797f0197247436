//! Show command implementation.
//!
//! The `gitignore-gen show <NAME>` command prints one resolved template.

use crate::cli::args::ShowArgs;
use crate::config::GenConfig;
use crate::error::{GenError, Result};
use crate::registry::Registry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    config: GenConfig,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(config: GenConfig, args: ShowArgs) -> Self {
        Self { config, args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut registry = Registry::from_config(&self.config);

        let source = registry
            .find(&self.args.name)?
            .ok_or_else(|| GenError::UnknownTemplate {
                name: self.args.name.clone(),
            })?;
        let template = registry.resolve(&source)?;

        let mut body = template.body;
        if !body.ends_with('\n') {
            body.push('\n');
        }
        ui.document(&body)?;

        Ok(CommandResult::success())
    }
}
