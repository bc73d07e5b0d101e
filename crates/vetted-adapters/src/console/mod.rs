//! Console adapters for the line ports.
//!
//! `terminal` talks to real streams. `scripted` replays queued answers and
//! records what was shown, for tests and non-interactive runs.

pub mod scripted;
pub mod terminal;

pub use scripted::{RecordingWriter, ScriptedReader};
pub use terminal::{TerminalReader, TerminalWriter};

use vetted_core::{application::ApplicationError, error::VettedError};

fn io_error(err: std::io::Error) -> VettedError {
    ApplicationError::Io {
        reason: err.to_string(),
    }
    .into()
}
