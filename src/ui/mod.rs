//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for console output with optional colors
//! - [`MockUI`] for capturing output in tests
//!
//! Status messages respect the [`OutputMode`]; generated documents are
//! always written, uncolored, to stdout.
//!
//! # Example
//!
//! ```
//! use gitignore_gen::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Wrote .gitignore");
//! ui.document("target/\n").unwrap();
//!
//! assert!(ui.has_success(".gitignore"));
//! assert_eq!(ui.documents(), ["target/\n"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, GenTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Write document content verbatim and flush, ignoring the output mode.
    fn document(&mut self, content: &str) -> Result<()>;
}
