//! When the prompt engine stops asking.

use std::num::NonZeroU32;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Limit on rejected attempts for a single prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: Option<NonZeroU32>,
}

impl RetryPolicy {
    /// Keep asking until a valid value arrives.
    pub const fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Give up after `attempts` rejected answers.
    pub const fn max_attempts(attempts: NonZeroU32) -> Self {
        Self {
            max_attempts: Some(attempts),
        }
    }

    /// `0` means unbounded, matching the config file convention.
    pub fn from_limit(limit: u32) -> Self {
        Self {
            max_attempts: NonZeroU32::new(limit),
        }
    }

    pub fn limit(&self) -> Option<u32> {
        self.max_attempts.map(NonZeroU32::get)
    }

    pub fn is_exhausted(&self, rejected: u32) -> bool {
        self.max_attempts.is_some_and(|max| rejected >= max.get())
    }
}

/// Shared flag checked by the engine between attempts.
///
/// Clones observe the same flag, so one clone can be handed to a signal
/// handler while the engine holds another.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
