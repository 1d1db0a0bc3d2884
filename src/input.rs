//! Interactive input collection
//!
//! `Prompter` asks questions over any reader/writer pair and keeps asking
//! until it gets a usable number. `parse_number` is the validation both
//! programs share.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{CatError, CatResult, NumberKind};

/// Parse `text` as the given kind of number, ignoring surrounding whitespace
pub fn parse_number<T: FromStr>(text: &str, kind: NumberKind) -> CatResult<T> {
    text.trim()
        .parse::<T>()
        .map_err(|_| CatError::invalid_number(kind, text))
}

/// Message printed before asking again
pub fn reprompt_message(kind: NumberKind) -> &'static str {
    match kind {
        NumberKind::Float => "❌ Invalid input. Please enter a number.",
        NumberKind::Integer | NumberKind::NonNegativeInteger => {
            "❌ Invalid input. Please enter a whole number."
        }
    }
}

/// Line-based prompts over a reader and a writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer the prompts go to
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Show `prompt` and read one line without its line ending
    ///
    /// # Errors
    ///
    /// Returns [`CatError::InputClosed`] once the input is exhausted.
    pub fn prompt_line(&mut self, prompt: &str) -> CatResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CatError::InputClosed);
        }

        Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }

    /// Ask for a number until one parses
    ///
    /// An empty answer returns `default` when there is one. Anything else,
    /// whitespace included, has to parse.
    pub fn prompt_number<T: FromStr>(
        &mut self,
        prompt: &str,
        kind: NumberKind,
        default: Option<T>,
    ) -> CatResult<T> {
        let mut default = default;
        loop {
            let answer = self.prompt_line(prompt)?;

            if answer.is_empty() {
                if let Some(value) = default.take() {
                    return Ok(value);
                }
            }

            match parse_number::<T>(&answer, kind) {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "{}", reprompt_message(kind))?,
            }
        }
    }

    /// Ask for a decimal amount
    pub fn prompt_float(&mut self, prompt: &str, default: Option<f64>) -> CatResult<f64> {
        self.prompt_number(prompt, NumberKind::Float, default)
    }

    /// Ask for a whole number
    pub fn prompt_int(&mut self, prompt: &str, default: Option<i64>) -> CatResult<i64> {
        self.prompt_number(prompt, NumberKind::Integer, default)
    }
}
