//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the prompt engine needs from the console.
//! The `vetted-adapters` crate provides implementations.

use crate::error::VettedResult;

/// Port for reading input.
///
/// Implemented by:
/// - `vetted_adapters::console::TerminalReader` (production, stdin)
/// - `vetted_adapters::console::ScriptedReader` (testing, queued lines)
///
/// ## Design Notes
///
/// - Blocks until a full line is available; there is no timeout
/// - The returned line has its terminator (`\n` or `\r\n`) removed
#[cfg_attr(test, mockall::automock)]
pub trait LineReader {
    /// Display `prompt` and read one line.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> VettedResult<Option<String>>;
}

/// Port for user-facing feedback (rejection messages).
///
/// Implemented by:
/// - `vetted_adapters::console::TerminalWriter` (production, stdout)
/// - `vetted_adapters::console::RecordingWriter` (testing, captured lines)
/// - the CLI's `OutputManager` (styled output)
#[cfg_attr(test, mockall::automock)]
pub trait LineWriter {
    /// Write one line of text.
    fn write_line(&mut self, line: &str) -> VettedResult<()>;
}
