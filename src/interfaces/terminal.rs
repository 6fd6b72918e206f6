use crate::error::{OrderError, Result};
use std::io::{BufRead, Write};

/// Line-oriented prompt helper over any `BufRead` + `Write` pair.
///
/// Generic over the std I/O traits so the interactive session can run
/// against locked stdin/stdout in production and in-memory buffers in tests.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `label` without a newline, flushes, and reads one input line.
    ///
    /// The trailing line terminator is stripped; end of stream before the
    /// session finishes is an error, since every prompt expects an answer.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(OrderError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_echoes_label_and_reads_line() {
        let input = Cursor::new("Jane Doe\n");
        let mut out = Vec::new();
        let mut term = Terminal::new(input, &mut out);

        let answer = term.prompt("Enter your name: ").unwrap();
        assert_eq!(answer, "Jane Doe");
        assert_eq!(String::from_utf8(out).unwrap(), "Enter your name: ");
    }

    #[test]
    fn test_prompt_strips_crlf() {
        let input = Cursor::new("9876543210\r\n");
        let mut out = Vec::new();
        let mut term = Terminal::new(input, &mut out);
        assert_eq!(term.prompt("> ").unwrap(), "9876543210");
    }

    #[test]
    fn test_exhausted_input_is_an_error() {
        let input = Cursor::new("");
        let mut out = Vec::new();
        let mut term = Terminal::new(input, &mut out);
        assert!(matches!(term.prompt("> "), Err(OrderError::InputClosed)));
    }
}
