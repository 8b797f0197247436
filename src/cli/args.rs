//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::registry::Category;

/// gitignore-gen - Assemble .gitignore files from templates.
#[derive(Debug, Parser)]
#[command(name = "gitignore-gen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .gitignore-gen.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Also use templates from the github/gitignore repository
    #[arg(long, global = true)]
    pub remote: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available templates
    List(ListArgs),

    /// Print one template
    Show(ShowArgs),

    /// Generate a .gitignore file
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Parse a category name, accepting any case and `-` for `_`.
pub fn parse_category(value: &str) -> Result<Category, String> {
    value.to_uppercase().replace('-', "_").parse()
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only list templates in this category (e.g. ide, programming-language)
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Template name (case-insensitive)
    pub name: String,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Templates to include, in order (added after those in the config file)
    pub names: Vec<String>,

    /// Banner title
    #[arg(long)]
    pub title: Option<String>,

    /// Banner description
    #[arg(long)]
    pub description: Option<String>,

    /// Custom header printed instead of the banner
    #[arg(long)]
    pub header: Option<String>,

    /// Extra rules appended under "# Other"
    #[arg(long, conflicts_with = "extra_file")]
    pub extra: Option<String>,

    /// Read extra rules from a file
    #[arg(long, value_name = "PATH")]
    pub extra_file: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
