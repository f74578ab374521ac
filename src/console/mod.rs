//! Console input helpers.
//!
//! [`Prompter`] reads one value per line and keeps asking until the line parses
//! and passes an optional predicate. [`Session`] drives the interactive menu on
//! top of it.

mod session;

use std::io::{BufRead, Write};
use std::str::FromStr;

pub use session::Session;

use crate::config::ConsoleConfig;
use crate::error::input::InputError;

/// Result type for console input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Returns `tabs` tab characters.
pub fn indenter(tabs: usize) -> String {
    "\t".repeat(tabs)
}

/// Reads validated values from a line-oriented reader.
///
/// Prompts and error messages go to `writer`, indented by the configured
/// number of tabs; error messages get one extra tab.
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    indent_tabs: usize,
    format_error_message: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter with no indentation and the default format error message.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_config(reader, writer, &ConsoleConfig::default())
    }

    /// Creates a prompter using the indentation and messages from `config`.
    pub fn with_config(reader: R, writer: W, config: &ConsoleConfig) -> Self {
        Self {
            reader,
            writer,
            indent_tabs: config.indent_tabs,
            format_error_message: config.format_error_message.clone(),
        }
    }

    /// Returns the output sink.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the prompter, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Prompts once, then reads lines until one yields an acceptable `T`.
    ///
    /// Leading whitespace and the line terminator are dropped; the remainder
    /// must parse as a whole, so trailing garbage is rejected by `T::from_str`.
    ///
    /// # Arguments
    ///
    /// * `prompt` - Text written before the first read.
    /// * `validator` - Optional predicate the parsed value has to satisfy.
    /// * `error_message` - Text written when the predicate rejects a value.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The first value that parsed and passed validation.
    /// * `Err(InputError::UnexpectedEof)` - Input ended first.
    pub fn read_validated<T>(
        &mut self,
        prompt: &str,
        validator: Option<&dyn Fn(&T) -> bool>,
        error_message: &str,
    ) -> InputResult<T>
    where
        T: FromStr,
    {
        let indent = indenter(self.indent_tabs);
        write!(self.writer, "{indent}{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof);
            }

            let candidate = line.trim_end_matches(&['\n', '\r'][..]).trim_start();
            match candidate.parse::<T>() {
                Ok(value) if validator.map_or(true, |accept| accept(&value)) => {
                    return Ok(value)
                }
                Ok(_) => {
                    tracing::debug!(input = %candidate, "Input rejected by validator");
                    writeln!(self.writer, "{indent}\t{error_message}")?;
                }
                Err(_) => {
                    tracing::debug!(input = %candidate, "Input failed to parse");
                    writeln!(self.writer, "{indent}\t{}", self.format_error_message)?;
                }
            }
            self.writer.flush()?;
        }
    }

    /// Reads one raw line, without the terminator.
    pub fn read_line(&mut self, prompt: &str) -> InputResult<String> {
        write!(self.writer, "{}{prompt}", indenter(self.indent_tabs))?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof);
        }
        Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }
}
