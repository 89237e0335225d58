//! Console prompt I/O.
//!
//! Interactive flows talk to the operator through the [`Prompt`] trait so the
//! menu and configuration logic can run against scripted input in tests.

use std::io::{BufRead, IsTerminal, Write};

use dialoguer::{theme::ColorfulTheme, Input};
use thiserror::Error;

use crate::ui;

/// Errors raised while talking to the operator.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Reading stdin or writing stdout failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal prompt failed.
    #[error("Terminal prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// Stdin closed while waiting for an answer.
    #[error("End of input while waiting for: {0}")]
    EndOfInput(String),

    /// A menu was built without any options to choose from.
    #[error("Nothing to choose from for: {0}")]
    NoOptions(String),
}

/// Line-oriented conversation with the operator.
pub trait Prompt {
    /// Show `message` as a prompt and read one line of input.
    fn read_line(&mut self, message: &str) -> Result<String, PromptError>;

    /// Show an informational line.
    fn show(&mut self, line: &str);

    /// Show a warning about rejected input.
    fn warn(&mut self, line: &str);
}

/// [`Prompt`] on the process console.
///
/// Uses `dialoguer` when stdin is a terminal; falls back to reading stdin
/// line by line when input is piped.
pub struct ConsolePrompt {
    theme: ColorfulTheme,
    interactive: bool,
}

impl ConsolePrompt {
    /// Create a prompt bound to stdin/stdout.
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            interactive: std::io::stdin().is_terminal(),
        }
    }

    fn read_piped_line(message: &str) -> Result<String, PromptError> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{message}: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            println!();
            return Err(PromptError::EndOfInput(message.to_string()));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for ConsolePrompt {
    fn read_line(&mut self, message: &str) -> Result<String, PromptError> {
        if !self.interactive {
            return Self::read_piped_line(message);
        }

        let line = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }

    fn show(&mut self, line: &str) {
        println!("{line}");
    }

    fn warn(&mut self, line: &str) {
        ui::print_warning(line);
    }
}

/// Scripted [`Prompt`] for tests: replays answers and records output.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    /// Prompts asked, in order.
    pub asked: Vec<String>,
    /// Informational lines shown, in order.
    pub shown: Vec<String>,
    /// Warnings shown, in order.
    pub warnings: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub(crate) fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, message: &str) -> Result<String, PromptError> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| PromptError::EndOfInput(message.to_string()))
    }

    fn show(&mut self, line: &str) {
        self.shown.push(line.to_string());
    }

    fn warn(&mut self, line: &str) {
        self.warnings.push(line.to_string());
    }
}
