//! Command handlers, one module per subcommand.

use std::io;

use tracing::debug;
use vetted_adapters::TerminalReader;
use vetted_core::application::{LineReader, PromptEngine, RetryPolicy};

use crate::output::OutputManager;

pub mod completions;
pub mod config;
pub mod form;
pub mod init;
pub mod inventory;
pub mod shop;

/// Engine reading stdin and reporting rejections through `output`.
///
/// `max_attempts` of `0` keeps asking until the input is valid or closed.
/// With JSON output the prompts go to stderr so stdout holds only the result.
fn prompt_engine(output: &OutputManager, max_attempts: u32) -> PromptEngine {
    let policy = RetryPolicy::from_limit(max_attempts);
    debug!(max_attempts = ?policy.limit(), json = output.is_json(), "Prompt engine ready");

    let reader: Box<dyn LineReader> = if output.is_json() {
        Box::new(TerminalReader::new(io::stdin().lock(), io::stderr()))
    } else {
        Box::new(TerminalReader::stdio())
    };
    PromptEngine::new(reader, Box::new(output.clone())).with_policy(policy)
}
