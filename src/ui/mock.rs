//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use tesla_remote::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("email", "me@example.com");
//!
//! let answer = ui.prompt(&Prompt::new("email", "Tesla email")).unwrap();
//! assert_eq!(answer, "me@example.com");
//! assert_eq!(ui.prompts_shown(), &["email".to_string()]);
//! ```

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Result, TeslaError};

use super::{Prompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    links: Vec<String>,
    statuses: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    spinners_cleared: Rc<Cell<usize>>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    ///
    /// Prompts without a configured response fail.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Get all captured stdout lines.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all URLs shown to the user.
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Get all captured progress notes.
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How many spinners have been cleared.
    pub fn spinners_cleared(&self) -> usize {
        self.spinners_cleared.get()
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if any stdout line contains `msg`.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if any progress note contains `msg`.
    pub fn has_status(&self, msg: &str) -> bool {
        self.statuses.iter().any(|m| m.contains(msg))
    }

    /// Check if any error line contains `msg`.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn status(&mut self, msg: &str) {
        self.statuses.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn link(&mut self, url: &str) {
        self.links.push(url.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        match self.prompt_responses.get(&prompt.key) {
            Some(response) => Ok(response.clone()),
            None => Err(TeslaError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("no response configured for prompt '{}'", prompt.key),
            ))),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            cleared: Rc::clone(&self.spinners_cleared),
        })
    }
}

/// Spinner handed out by [`MockUI`]; clearing it is counted on the UI.
#[derive(Debug)]
pub struct MockSpinner {
    cleared: Rc<Cell<usize>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_and_clear(&mut self) {
        self.cleared.set(self.cleared.get() + 1);
    }
}
