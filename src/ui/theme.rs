//! Visual theme and styling.

use console::Style;

/// Terminal colour theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for error lines (red bold).
    pub error: Style,
    /// Style for progress notes and secondary text.
    pub dim: Style,
    /// Style for URLs the user has to act on.
    pub link: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold().for_stderr(),
            dim: Style::new().dim().for_stderr(),
            link: Style::new().cyan().underlined(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            dim: Style::new(),
            link: Style::new(),
        }
    }

    /// Format an error line: `❌ <msg>`.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("❌ {}", msg)))
    }

    /// Format a progress note.
    pub fn format_status(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(msg))
    }

    pub fn format_link(&self, url: &str) -> String {
        format!("{}", self.link.apply_to(url))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
