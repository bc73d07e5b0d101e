// ============================================================================
// domain/error.rs - CONFIGURATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is a configuration or programmer error: it is raised while a
/// prompt is being set up, never retried, and aborts the operation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Field errors
    // ========================================================================
    #[error("Unimplemented type mapping for '{type_name}'")]
    UnimplementedMapping { type_name: String },

    #[error("Invalid bound '{key}' = {value}: {reason}")]
    InvalidBound {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Bounds can never be satisfied: min {min} is greater than max {max}")]
    EmptyRange { min: String, max: String },

    // ========================================================================
    // Prompt request errors
    // ========================================================================
    #[error("Predicate measures {found} values but the prompt expects {expected}")]
    PredicateMismatch { expected: String, found: String },

    // ========================================================================
    // Selection errors
    // ========================================================================
    #[error("Must provide a non-empty collection to select from")]
    EmptySelection,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnimplementedMapping { type_name } => vec![
                format!("'{}' is not a supported field type", type_name),
                "Supported types:".into(),
                "  • text    (or str)".into(),
                "  • integer (or int)".into(),
                "  • decimal (or float)".into(),
            ],
            Self::InvalidBound { key, .. } => vec![
                format!("'{}' must be a number", key),
                "Numeric strings such as \"5\" are accepted too".into(),
            ],
            Self::EmptyRange { .. } => vec![
                "Swap the min and max values in the field's predicate block".into(),
            ],
            Self::EmptySelection => vec!["Add at least one choice to the list".into()],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnimplementedMapping { .. }
            | Self::InvalidBound { .. }
            | Self::EmptyRange { .. }
            | Self::EmptySelection => ErrorCategory::Configuration,
            Self::PredicateMismatch { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Internal,
}
