//! Prompt Engine - ask until valid.
//!
//! Each attempt:
//! 1. Check the cancellation token
//! 2. Read one line through the [`LineReader`] port
//! 3. Coerce it and run the predicate ([`PromptRequest::evaluate`])
//! 4. On rejection, write the message through [`LineWriter`] and ask again
//!
//! Rejections are user errors and stay inside the loop. The loop only ends
//! with an error when the retry policy runs out, the token is cancelled, or
//! the input source is closed.

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{LineReader, LineWriter},
        services::retry::{CancellationToken, RetryPolicy},
    },
    domain::{PromptRequest, Rejection, Value},
    error::VettedResult,
};

/// Runs [`PromptRequest`]s against an input source and a feedback sink.
pub struct PromptEngine {
    reader: Box<dyn LineReader>,
    writer: Box<dyn LineWriter>,
    policy: RetryPolicy,
    cancellation: Option<CancellationToken>,
}

impl PromptEngine {
    /// Create an engine with an unbounded retry policy.
    pub fn new(reader: Box<dyn LineReader>, writer: Box<dyn LineWriter>) -> Self {
        Self {
            reader,
            writer,
            policy: RetryPolicy::unbounded(),
            cancellation: None,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Ask until `request` is satisfied.
    ///
    /// Never returns a value that failed coercion or the predicate.
    #[instrument(skip_all, fields(target = %request.target()))]
    pub fn obtain(&mut self, request: &PromptRequest) -> VettedResult<Value> {
        let mut rejected: u32 = 0;

        loop {
            if self
                .cancellation
                .as_ref()
                .is_some_and(CancellationToken::is_cancelled)
            {
                debug!(rejected, "Prompt cancelled");
                return Err(ApplicationError::Cancelled.into());
            }

            let Some(raw) = self.reader.read_line(request.prompt())? else {
                warn!(rejected, "Input closed while waiting for a value");
                return Err(ApplicationError::InputClosed.into());
            };

            let rejection = match request.evaluate(&raw) {
                Ok(value) => {
                    debug!(attempts = rejected + 1, "Value accepted");
                    return Ok(value);
                }
                Err(rejection) => rejection,
            };

            rejected += 1;
            debug!(
                attempt = rejected,
                reason = match rejection {
                    Rejection::Coercion(_) => "coercion",
                    Rejection::Predicate(_) => "predicate",
                },
                "Input rejected"
            );
            self.writer.write_line(&request.message_for(&rejection))?;

            if self.policy.is_exhausted(rejected) {
                warn!(attempts = rejected, "Retry limit reached");
                return Err(ApplicationError::AttemptsExhausted { attempts: rejected }.into());
            }
        }
    }
}
