//! Traits the engine drives. `vetted-adapters` provides a terminal pair and
//! a scripted pair for tests; the CLI also writes feedback through its own
//! output manager.

pub mod output;

pub use output::{LineReader, LineWriter};
