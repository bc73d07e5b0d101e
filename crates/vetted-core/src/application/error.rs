//! Application layer errors.
//!
//! These errors represent failures in orchestration, not configuration.
//! Configuration errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;
use crate::error::ErrorCategory;

/// Errors that occur while running prompts.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The retry policy ran out before a valid value was entered.
    #[error("No acceptable value after {attempts} attempt(s)")]
    AttemptsExhausted { attempts: u32 },

    /// The cancellation token fired between attempts.
    #[error("Prompt cancelled")]
    Cancelled,

    /// The input source reached its end before a valid value was entered.
    #[error("Input closed before a valid value was entered")]
    InputClosed,

    /// Reading or writing a line failed.
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// The requested form is not in the document.
    #[error("Form '{name}' not found")]
    FormNotFound { name: String, available: Vec<String> },

    /// The forms document could not be read or parsed.
    #[error("Failed to load forms document {path}: {reason}")]
    DocumentLoad { path: PathBuf, reason: String },

    /// A field of a form cannot be turned into a prompt.
    #[error("Invalid field '{field}': {source}")]
    InvalidField { field: String, source: DomainError },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AttemptsExhausted { attempts } => vec![
                format!("Gave up after {} rejected answers", attempts),
                "Raise prompt.max_attempts (0 = unlimited) or --max-attempts".into(),
            ],
            Self::InputClosed => vec![
                "Standard input was closed while a prompt was waiting".into(),
                "When piping answers, provide one line per prompt".into(),
            ],
            Self::FormNotFound { available, .. } => {
                let mut suggestions = vec!["Available forms:".to_string()];
                suggestions.extend(available.iter().map(|name| format!("  • {}", name)));
                suggestions
            }
            Self::DocumentLoad { path, .. } => vec![
                format!("Check that {} exists and is valid JSON or TOML", path.display()),
                "Set forms.path in the config file or pass --file".into(),
            ],
            Self::InvalidField { field, source } => {
                let mut suggestions = vec![format!("Fix the definition of field '{}'", field)];
                suggestions.extend(source.suggestions());
                suggestions
            }
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AttemptsExhausted { .. } | Self::InputClosed => ErrorCategory::Input,
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::Io { .. } => ErrorCategory::Internal,
            Self::FormNotFound { .. } => ErrorCategory::NotFound,
            Self::DocumentLoad { .. } | Self::InvalidField { .. } => ErrorCategory::Configuration,
        }
    }
}
