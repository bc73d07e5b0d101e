//! Unified error handling for Vetted Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Vetted Core operations.
///
/// User input mistakes never show up here: the engine reports them and asks
/// again. What does show up is either a configuration error raised before
/// prompting, or a reason the prompting itself had to stop.
#[derive(Debug, Error, Clone)]
pub enum VettedError {
    /// Errors from the domain layer (bad field or request configuration).
    #[error("Configuration error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (prompting stopped).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl VettedError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Vetted".into(),
                "Please report this issue at: https://github.com/cosecruz/vetted/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the error came from a misconfigured prompt or form rather
    /// than from the input source.
    pub fn is_configuration(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input source could not produce an acceptable value.
    Input,
    Configuration,
    NotFound,
    Cancelled,
    Internal,
}

/// Convenient result type alias.
pub type VettedResult<T> = Result<T, VettedError>;
