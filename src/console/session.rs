//! Interactive dictionary session.

use std::io::{BufRead, Write};

use super::{InputResult, Prompter};
use crate::config::ConsoleConfig;
use crate::dictionary::Dictionary;
use crate::error::input::InputError;

const MENU: &str = "\
1. Look up a word
2. Check a prefix
3. Auto-complete
4. List all words
5. Quit
";

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Lookup,
    Prefix,
    Complete,
    List,
    Quit,
}

impl Action {
    fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Self::Lookup),
            2 => Some(Self::Prefix),
            3 => Some(Self::Complete),
            4 => Some(Self::List),
            5 => Some(Self::Quit),
            _ => None,
        }
    }
}

/// A menu loop answering queries against a [`Dictionary`].
#[derive(Debug)]
pub struct Session<'d, 'a, R, W> {
    dictionary: &'d Dictionary<'a>,
    prompter: Prompter<R, W>,
    invalid_choice_message: String,
}

impl<'d, 'a, R: BufRead, W: Write> Session<'d, 'a, R, W> {
    /// Creates a session reading from `reader` and writing to `writer`.
    pub fn new(dictionary: &'d Dictionary<'a>, reader: R, writer: W, config: &ConsoleConfig) -> Self {
        Self {
            dictionary,
            prompter: Prompter::with_config(reader, writer, config),
            invalid_choice_message: config.invalid_choice_message.clone(),
        }
    }

    /// Runs until the user quits or input ends.
    ///
    /// End of input is a normal way to leave the session and is not an error.
    pub fn run(&mut self) -> InputResult<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) | Err(InputError::UnexpectedEof) => break,
                Err(e) => return Err(e),
            }
        }
        tracing::debug!("Interactive session finished");
        Ok(())
    }

    /// Handles one menu round; returns `false` when the user chose to quit.
    fn step(&mut self) -> InputResult<bool> {
        write!(self.prompter.writer(), "\n{MENU}")?;
        let accept: &dyn Fn(&u8) -> bool = &|choice: &u8| Action::from_choice(*choice).is_some();
        let choice: u8 =
            self.prompter
                .read_validated("Choice: ", Some(accept), &self.invalid_choice_message)?;

        // The validator only lets known choices through
        let Some(action) = Action::from_choice(choice) else {
            return Ok(true);
        };

        match action {
            Action::Lookup => {
                let word = self.prompter.read_line("Word: ")?;
                let answer = match self.dictionary.lookup(word.trim()) {
                    Some(entry) => entry.to_string(),
                    None => format!("\"{}\" is not in the dictionary", word.trim()),
                };
                writeln!(self.prompter.writer(), "{answer}")?;
            }
            Action::Prefix => {
                let prefix = self.prompter.read_line("Prefix: ")?;
                let verdict = if self.dictionary.has_prefix(prefix.trim()) {
                    "Some words start with"
                } else {
                    "No word starts with"
                };
                writeln!(self.prompter.writer(), "{verdict} \"{}\"", prefix.trim())?;
            }
            Action::Complete => {
                let prefix = self.prompter.read_line("Prefix: ")?;
                let suggestions = self.dictionary.suggest(prefix.trim());
                if suggestions.is_empty() {
                    writeln!(self.prompter.writer(), "No suggestions")?;
                }
                for entry in suggestions {
                    writeln!(self.prompter.writer(), "{entry}")?;
                }
            }
            Action::List => {
                for entry in self.dictionary.all() {
                    writeln!(self.prompter.writer(), "{entry}")?;
                }
            }
            Action::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// Consumes the session, returning the output sink.
    pub fn into_writer(self) -> W {
        self.prompter.into_parts().1
    }
}
