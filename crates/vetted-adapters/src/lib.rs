//! Infrastructure adapters for Vetted.
//!
//! This crate implements the ports defined in `vetted-core::application::ports`
//! and the loaders that feed the core. It contains all I/O.

pub mod console;
pub mod form_loader;
pub mod inventory;

// Re-export commonly used adapters
pub use console::{RecordingWriter, ScriptedReader, TerminalReader, TerminalWriter};
pub use form_loader::{DocumentFormat, FormLoader};
pub use inventory::{InventoryError, InventoryReader, InventoryRecord};
