//! Interactive terminal UI.

use console::Term;
use std::io::{IsTerminal, Write};

use crate::error::Result;

use super::prompts::prompt_line;
use super::{
    prompt_input, should_use_colors, ProgressSpinner, Prompt, SpinnerHandle, Theme, UserInterface,
};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }

    /// Whether a user is there to answer dialoguer prompts.
    fn is_interactive(&self) -> bool {
        self.err.is_term() && std::io::stdin().is_terminal()
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn status(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_status(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn link(&mut self, url: &str) {
        writeln!(self.out, "{}", self.theme.format_link(url)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        if self.is_interactive() {
            prompt_input(prompt, &self.err)
        } else {
            let stdin = std::io::stdin();
            prompt_line(prompt, &mut stdin.lock(), &mut std::io::stderr())
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.err.is_term() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}
