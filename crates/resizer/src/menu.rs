//! Numbered menus and numeric prompts.

use std::fmt::Display;

use crate::prompt::{Prompt, PromptError};

/// Print `options` numbered from 1 and read choices until one is in range.
///
/// Non-numeric and out-of-range answers are reported and asked again, with
/// no retry limit. The returned reference always points into `options`.
pub fn select_option<'a, T: Display>(
    prompt: &mut dyn Prompt,
    options: &'a [T],
    message: &str,
) -> Result<&'a T, PromptError> {
    if options.is_empty() {
        return Err(PromptError::NoOptions(message.to_string()));
    }

    for (idx, option) in options.iter().enumerate() {
        prompt.show(&format!("{}. {option}", idx + 1));
    }

    loop {
        let answer = prompt.read_line(message)?;
        let Ok(choice) = answer.trim().parse::<i64>() else {
            prompt.warn("Invalid input. Please enter a valid number.");
            continue;
        };

        let picked = usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| options.get(idx));

        match picked {
            Some(option) => return Ok(option),
            None => prompt.warn("Invalid choice. Please try again."),
        }
    }
}

/// Messages for a positive-integer prompt.
#[derive(Debug, Clone, Copy)]
pub struct NumberPrompt<'a> {
    /// Prompt text.
    pub message: &'a str,
    /// Shown when the answer is zero or negative.
    pub non_positive: &'a str,
    /// Shown when the answer is not a usable number.
    pub invalid: &'a str,
}

/// Read a strictly positive integer, asking again until one is given.
pub fn read_positive_number(
    prompt: &mut dyn Prompt,
    messages: NumberPrompt<'_>,
) -> Result<u32, PromptError> {
    loop {
        let answer = prompt.read_line(messages.message)?;
        match answer.trim().parse::<i64>() {
            Ok(n) if n <= 0 => prompt.warn(messages.non_positive),
            Ok(n) => match u32::try_from(n) {
                Ok(n) => return Ok(n),
                Err(_) => prompt.warn(messages.invalid),
            },
            Err(_) => prompt.warn(messages.invalid),
        }
    }
}
