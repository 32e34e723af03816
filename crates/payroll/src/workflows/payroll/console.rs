use std::io::{self, BufRead, Write};

use tracing::debug;

use super::validation::ValidationError;

/// Line-oriented prompt over any reader and writer.
///
/// The interactive binary wraps locked stdin/stdout; tests drive it with an
/// in-memory script and a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` as-is and flushes so prompts without a newline show up.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Reads one line without its terminator. Fails with `Closed` at end of input.
    pub fn next_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompts until `parse` accepts a line, echoing each rejection message.
    pub fn prompt_until<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, ConsoleError>
    where
        F: FnMut(&str) -> Result<T, ValidationError>,
    {
        loop {
            self.write_str(prompt)?;
            let raw = self.next_line()?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(prompt = prompt.trim_end(), input = %raw, reason = ?err, "rejected input");
                    self.write_line(&err.to_string())?;
                }
            }
        }
    }
}
