//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::{BufRead, Write};

use crate::error::{Result, TeslaError};

use super::Prompt;

/// Convert dialoguer errors to TeslaError.
fn map_dialoguer_err(e: dialoguer::Error) -> TeslaError {
    TeslaError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask for a line of text on `term`. Surrounding whitespace is trimmed.
pub fn prompt_input(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    let result: String = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(result.trim().to_string())
}

/// Ask for a line of text without a terminal (input piped on stdin).
///
/// The question goes to `out`. End of input is an error.
pub fn prompt_line(
    prompt: &Prompt,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<String> {
    write!(out, "{}: ", prompt.question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TeslaError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("no input for '{}'", prompt.question),
        )));
    }

    Ok(line.trim().to_string())
}
