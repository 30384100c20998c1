//! Interactive prompting for options the operator did not supply.
//!
//! # Responsibility
//! - Fill every missing option: defaults first, then an interactive prompt.
//! - Re-prompt on empty answers and on non-integer answers to integer options.
//!
//! # Invariants
//! - Supplied values are never re-asked or rewritten.
//! - A closed input stream aborts resolution instead of looping.

use super::{CommandSpec, OptionKind};
use crate::model::fields::{parse_integer, FieldValues};
use std::io::{self, BufRead, Write};

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("prompt i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed while prompting for {label}")]
    Closed { label: String },
}

/// Source of operator answers.
pub trait Prompter {
    /// Asks for one value and returns the answer without its line ending.
    fn ask(&mut self, label: &str) -> Result<String, PromptError>;
    /// Shows a message before the question is repeated.
    fn notify(&mut self, message: &str) -> Result<(), PromptError>;
}

/// Line-oriented prompter over any reader/writer pair.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(PromptError::Closed {
                label: label.to_string(),
            });
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

/// Completes `supplied` so every option of `spec` has a value.
pub fn resolve_fields(
    spec: &CommandSpec,
    mut supplied: FieldValues,
    prompter: &mut dyn Prompter,
) -> Result<FieldValues, PromptError> {
    for option in spec.options {
        if supplied.contains(option.name) {
            continue;
        }
        if let Some(default) = option.default {
            supplied.insert(option.name, default);
            continue;
        }

        let answer = loop {
            let answer = prompter.ask(option.prompt)?;
            if answer.is_empty() {
                continue;
            }
            if option.kind == OptionKind::Integer && parse_integer(option.name, &answer).is_err() {
                prompter.notify(&format!("Error: '{answer}' is not a valid integer."))?;
                continue;
            }
            break answer;
        };
        supplied.insert(option.name, answer);
    }

    Ok(supplied)
}

#[cfg(test)]
mod tests {
    use super::{resolve_fields, LinePrompter, PromptError};
    use crate::command::CommandRegistry;
    use crate::model::fields::FieldValues;
    use std::io::Cursor;

    #[test]
    fn prompts_only_for_missing_options_and_applies_defaults() {
        let registry = CommandRegistry::standard().unwrap();
        let spec = registry.get("add_room").unwrap();
        let supplied = FieldValues::new().with("roomtype", "Deluxe");

        let mut output = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("101\n"), &mut output);
        let fields = resolve_fields(spec, supplied, &mut prompter).unwrap();

        assert_eq!(fields.get("roomtype"), Some("Deluxe"));
        assert_eq!(fields.get("roomnumber"), Some("101"));
        assert_eq!(fields.get("status"), Some("active"));
        assert_eq!(String::from_utf8(output).unwrap(), "Room number: ");
    }

    #[test]
    fn integer_options_are_asked_again_until_valid() {
        let registry = CommandRegistry::standard().unwrap();
        let spec = registry.get("add_booking").unwrap();
        let supplied = FieldValues::new()
            .with("bookdate", "2024-01-01 10:00:00")
            .with("checkin", "2024-01-02 14:00:00")
            .with("checkout", "2024-01-03 11:00:00");

        let mut output = Vec::new();
        let input = Cursor::new("seven\n\n7\r\n12\n");
        let mut prompter = LinePrompter::new(input, &mut output);
        let fields = resolve_fields(spec, supplied, &mut prompter).unwrap();

        assert_eq!(fields.get("roomid"), Some("7"));
        assert_eq!(fields.get("customerid"), Some("12"));
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Error: 'seven' is not a valid integer."));
        assert_eq!(transcript.matches("Room ID: ").count(), 3);
    }

    #[test]
    fn closed_input_aborts() {
        let registry = CommandRegistry::standard().unwrap();
        let spec = registry.get("add_employee").unwrap();

        let mut prompter = LinePrompter::new(Cursor::new("Basil\n"), Vec::new());
        let err = resolve_fields(spec, FieldValues::new(), &mut prompter).unwrap_err();
        assert!(matches!(err, PromptError::Closed { label } if label == "Login ID"));
    }
}
