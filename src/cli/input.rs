//! User input utilities for interactive CLI prompts
//!
//! Prompts are written to any `Write` and answers read from any `BufRead`,
//! so sessions can be driven from in-memory buffers in tests.

use crate::error::Result;
use std::io::{BufRead, Write};

/// Line-oriented prompt reader/writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show `prompt` and read one answer. `None` means input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask repeatedly until `parse` accepts the answer.
    ///
    /// Each rejection is shown to the user before asking again.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };

            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(rejection) => self.say(&format!("\n{}. Please try again.\n", rejection))?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
