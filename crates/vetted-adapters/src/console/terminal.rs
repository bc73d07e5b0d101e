//! Stream-backed reader and writer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::trace;
use vetted_core::{
    application::ports::{LineReader, LineWriter},
    error::VettedResult,
};

use super::io_error;

/// Shows the prompt without a newline and reads one line.
pub struct TerminalReader<R = StdinLock<'static>, W = Stdout> {
    input: R,
    prompt_out: W,
}

impl TerminalReader {
    /// Read from stdin, prompt on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.prompt_out)
    }
}

impl<R: BufRead, W: Write> LineReader for TerminalReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> VettedResult<Option<String>> {
        self.prompt_out
            .write_all(prompt.as_bytes())
            .and_then(|()| self.prompt_out.flush())
            .map_err(io_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            trace!("End of input");
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Writes each line followed by a newline.
pub struct TerminalWriter<W = Stdout> {
    out: W,
}

impl TerminalWriter {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LineWriter for TerminalWriter<W> {
    fn write_line(&mut self, line: &str) -> VettedResult<()> {
        writeln!(self.out, "{line}")
            .and_then(|()| self.out.flush())
            .map_err(io_error)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn prompt_is_written_without_newline() {
        let mut reader = TerminalReader::new(Cursor::new("Ada\n"), Vec::new());

        let line = reader.read_line("Name? ").unwrap();

        assert_eq!(line.as_deref(), Some("Ada"));
        let (_, shown) = reader.into_parts();
        assert_eq!(shown, b"Name? ");
    }

    #[test]
    fn crlf_is_stripped_but_spaces_are_kept() {
        let mut reader = TerminalReader::new(Cursor::new("  42 \r\nnext\n"), Vec::new());

        assert_eq!(reader.read_line("").unwrap().as_deref(), Some("  42 "));
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn last_line_without_terminator_is_returned() {
        let mut reader = TerminalReader::new(Cursor::new("tail"), Vec::new());
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some("tail"));
        assert_eq!(reader.read_line("").unwrap(), None);
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut reader = TerminalReader::new(Cursor::new("\n"), Vec::new());
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some(""));
        assert_eq!(reader.read_line("").unwrap(), None);
    }

    #[test]
    fn writer_appends_newline() {
        let mut writer = TerminalWriter::new(Vec::new());
        writer.write_line("Input does not meet criteria").unwrap();
        assert_eq!(writer.into_inner(), b"Input does not meet criteria\n");
    }
}
