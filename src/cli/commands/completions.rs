//! Shell completions generation.
//!
//! The `gitignore-gen completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// Binary name used in generated scripts.
const BIN_NAME: &str = "gitignore-gen";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Render the completion script for the configured shell.
    pub fn script(&self) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, BIN_NAME, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        ui.document(&self.script())?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    fn script_for(shell: Shell) -> String {
        CompletionsCommand::new(CompletionsArgs { shell }).script()
    }

    #[test]
    fn generates_bash_completions() {
        let output = script_for(Shell::Bash);
        assert!(output.contains("gitignore-gen"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        assert!(script_for(Shell::Zsh).contains("gitignore-gen"));
    }

    #[test]
    fn generates_fish_completions() {
        let output = script_for(Shell::Fish);
        assert!(output.contains("gitignore-gen"));
        assert!(output.contains("generate"));
    }

    #[test]
    fn execute_writes_script_document() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash });
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert_eq!(ui.documents().len(), 1);
    }
}
