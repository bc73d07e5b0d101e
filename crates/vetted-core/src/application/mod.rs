//! Use cases over the domain: the prompt engine and the selection and form
//! flows built on it. Input and feedback reach the outside world only
//! through the traits in [`ports`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{LineReader, LineWriter};
pub use services::{CancellationToken, FormService, PromptEngine, RetryPolicy, SelectionService};
