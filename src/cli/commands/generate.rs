//! Generate command implementation.
//!
//! The `gitignore-gen generate` command assembles a `.gitignore` from the
//! templates named in the config file and on the command line.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cli::args::GenerateArgs;
use crate::config::GenConfig;
use crate::error::{GenError, Result};
use crate::generator::Generator;
use crate::registry::Registry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand {
    project_root: PathBuf,
    config: GenConfig,
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(project_root: &Path, config: GenConfig, args: GenerateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Template names in render order: config first, then arguments.
    pub fn template_names(&self) -> Vec<&str> {
        self.config
            .templates
            .iter()
            .chain(&self.args.names)
            .map(String::as_str)
            .collect()
    }

    /// Output path, if the document goes to a file.
    ///
    /// `--output` is taken as given; a configured path is relative to the
    /// project root.
    pub fn output_path(&self) -> Option<PathBuf> {
        match (&self.args.output, &self.config.output) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(path)) => Some(self.project_root.join(path)),
            (None, None) => None,
        }
    }

    fn extra(&self) -> Result<String> {
        if let Some(path) = &self.args.extra_file {
            return Ok(fs::read_to_string(path)?);
        }
        Ok(self
            .args
            .extra
            .clone()
            .or_else(|| self.config.extra.clone())
            .unwrap_or_default())
    }

    fn build_generator(&self, ui: &mut dyn UserInterface) -> Result<Generator> {
        let mut generator = Generator::with_banner(
            Registry::from_config(&self.config),
            self.args
                .title
                .clone()
                .or_else(|| self.config.title.clone())
                .unwrap_or_default(),
            self.args
                .description
                .clone()
                .or_else(|| self.config.description.clone())
                .unwrap_or_default(),
        );

        if let Some(header) = self
            .args
            .header
            .clone()
            .or_else(|| self.config.custom_header.clone())
        {
            generator.set_custom_header(header);
        }

        generator.set_extra(self.extra()?);

        for name in self.template_names() {
            let source = generator
                .registry_mut()
                .find(name)?
                .ok_or_else(|| GenError::UnknownTemplate {
                    name: name.to_string(),
                })?;
            if generator.contains(&source) {
                ui.warning(&format!("'{}' is listed more than once", source.name));
            }
            generator.append(source);
        }

        Ok(generator)
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut generator = self.build_generator(ui)?;

        if generator.selection().is_empty() {
            ui.warning("No templates selected");
        }

        let content = generator.render()?;

        match self.output_path() {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(&path)?);
                writer.write_all(content.as_bytes())?;
                writer.flush()?;
                ui.success(&format!(
                    "Wrote {} ({} templates)",
                    path.display(),
                    generator.selection().len()
                ));
            }
            None => ui.document(&content)?,
        }

        Ok(CommandResult::success())
    }
}
