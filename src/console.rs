//! Text input and output used by the game.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

const CLEAR_SEQUENCE: &str = "\u{1b}[2J\u{1b}[H";

/// A line-oriented text console.
pub trait Console {
    /// Shows `prompt` and blocks until a line of input is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read. End of input is
    /// reported as [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Prints a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn print(&mut self, line: &str) -> io::Result<()>;

    /// Clears the visible output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn clear(&mut self) -> io::Result<()>;
}

/// Console backed by the process's stdin and stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        Ok(input)
    }

    fn print(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(CLEAR_SEQUENCE.as_bytes())?;
        stdout.flush()
    }
}

/// Console that replays canned input and records everything printed.
///
/// ```
/// use twentyone::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["h", "s"]);
/// assert_eq!(console.read_line("Hit or Stay? ").unwrap(), "h");
/// console.print("Player decided to hit.").unwrap();
/// assert!(console.contains("decided to hit"));
/// assert_eq!(console.remaining_input(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    /// Creates a console that answers prompts with `input`, in order.
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Returns every printed line.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Returns every prompt shown.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns how many times the output was cleared.
    #[must_use]
    pub const fn clears(&self) -> usize {
        self.clears
    }

    /// Returns the number of input lines not yet consumed.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// Returns whether any printed line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_owned());
        self.input.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }

    fn print(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
