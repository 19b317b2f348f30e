//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests
//! - Prompts, spinners, and the colour theme
//!
//! Command output goes to stdout; progress notes, prompts, spinners, and
//! errors go to stderr so stdout stays clean for piping (`--json`).
//!
//! # Example
//!
//! ```
//! use tesla_remote::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("🔒 Vehicle locked");
//! assert!(ui.has_message("locked"));
//! ```

pub mod mock;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use prompts::prompt_input;
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Print a line of command output (stdout).
    fn message(&mut self, msg: &str);

    /// Print a progress note (stderr).
    fn status(&mut self, msg: &str);

    /// Print an error line (stderr).
    fn error(&mut self, msg: &str);

    /// Print a URL the user has to open (stdout).
    fn link(&mut self, url: &str);

    /// Ask the user for a line of text.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Start a spinner for a blocking operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Remove the spinner from the terminal.
    fn finish_and_clear(&mut self);
}

/// A free-text prompt.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests).
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}
