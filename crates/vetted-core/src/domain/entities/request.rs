//! Prompt requests: everything the engine needs to ask for one value.
//!
//! A [`PromptRequest`] is immutable once built. Evaluating one raw line
//! against it is pure ([`PromptRequest::evaluate`]); the engine only adds the
//! I/O and the retry loop around it.

use std::fmt;
use std::sync::Arc;

use crate::domain::{
    bounds::BoundRule,
    error::DomainError,
    value_objects::{CoercionError, TargetType, Value},
};

/// Fallback message when a predicate rejects a value and no message was set.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Input does not meet criteria";

type CheckFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

// ── Predicate ─────────────────────────────────────────────────────────────────

/// Acceptance check evaluated on a value that already coerced successfully.
#[derive(Clone)]
pub enum Predicate {
    /// A synthesized min/max check.
    Bound(BoundRule),
    /// A caller-supplied check. `family` is the type it was written for, or
    /// `None` when it inspects any [`Value`].
    Custom {
        family: Option<TargetType>,
        check: CheckFn,
    },
}

impl Predicate {
    /// A check over any value.
    pub fn custom(check: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom {
            family: None,
            check: Arc::new(check),
        }
    }

    pub fn text(check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom {
            family: Some(TargetType::Text),
            check: Arc::new(move |v: &Value| v.as_text().is_some_and(&check)),
        }
    }

    pub fn integer(check: impl Fn(i64) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom {
            family: Some(TargetType::Integer),
            check: Arc::new(move |v: &Value| v.as_integer().is_some_and(&check)),
        }
    }

    pub fn decimal(check: impl Fn(f64) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom {
            family: Some(TargetType::Decimal),
            check: Arc::new(move |v: &Value| v.as_decimal().is_some_and(&check)),
        }
    }

    /// The target type this predicate can evaluate, if it is restricted.
    pub fn family(&self) -> Option<TargetType> {
        match self {
            Self::Bound(rule) => Some(rule.target_type()),
            Self::Custom { family, .. } => *family,
        }
    }

    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::Bound(rule) => rule.accepts(value),
            Self::Custom { check, .. } => check(value),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bound(rule) => f.debug_tuple("Bound").field(rule).finish(),
            Self::Custom { family, .. } => f
                .debug_struct("Custom")
                .field("family", family)
                .finish_non_exhaustive(),
        }
    }
}

// ── Rejection ─────────────────────────────────────────────────────────────────

/// Why a single attempt was not accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// The raw text was not a valid representation of the target type.
    Coercion(CoercionError),
    /// The value coerced but the predicate returned false.
    Predicate(Value),
}

// ── PromptRequest ─────────────────────────────────────────────────────────────

/// Configuration for one validated prompt.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    prompt: String,
    target: TargetType,
    predicate: Option<Predicate>,
    coercion_message: Option<String>,
    rejection_message: Option<String>,
}

impl PromptRequest {
    /// Start building a request that displays `prompt`. Defaults to text.
    pub fn builder(prompt: impl Into<String>) -> PromptRequestBuilder {
        PromptRequestBuilder {
            prompt: prompt.into(),
            target: TargetType::Text,
            predicate: None,
            coercion_message: None,
            rejection_message: None,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn target(&self) -> TargetType {
        self.target
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    pub fn coercion_message(&self) -> Option<&str> {
        self.coercion_message.as_deref()
    }

    pub fn rejection_message(&self) -> Option<&str> {
        self.rejection_message.as_deref()
    }

    /// Coerce `raw` and run the predicate on the result.
    ///
    /// The predicate is never called when coercion fails.
    pub fn evaluate(&self, raw: &str) -> Result<Value, Rejection> {
        let value = self.target.coerce(raw).map_err(Rejection::Coercion)?;

        match &self.predicate {
            Some(predicate) if !predicate.accepts(&value) => Err(Rejection::Predicate(value)),
            _ => Ok(value),
        }
    }

    /// The line to show the user for a rejected attempt.
    pub fn message_for(&self, rejection: &Rejection) -> String {
        match rejection {
            Rejection::Coercion(err) => self
                .coercion_message
                .clone()
                .unwrap_or_else(|| err.to_string()),
            Rejection::Predicate(_) => self
                .rejection_message
                .clone()
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_owned()),
        }
    }
}

/// Builder for [`PromptRequest`].
#[derive(Debug)]
#[must_use]
pub struct PromptRequestBuilder {
    prompt: String,
    target: TargetType,
    predicate: Option<Predicate>,
    coercion_message: Option<String>,
    rejection_message: Option<String>,
}

impl PromptRequestBuilder {
    pub fn target(mut self, target: TargetType) -> Self {
        self.target = target;
        self
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Use a bound rule as the predicate. Its own message becomes the
    /// rejection message unless one is set explicitly.
    pub fn bounds(self, rule: BoundRule) -> Self {
        self.predicate(Predicate::Bound(rule))
    }

    pub fn coercion_message(mut self, message: impl Into<String>) -> Self {
        self.coercion_message = Some(message.into());
        self
    }

    pub fn coercion_message_opt(mut self, message: Option<String>) -> Self {
        self.coercion_message = message;
        self
    }

    pub fn rejection_message(mut self, message: impl Into<String>) -> Self {
        self.rejection_message = Some(message.into());
        self
    }

    /// Validate and freeze the request.
    ///
    /// Fails with [`DomainError::PredicateMismatch`] when the predicate was
    /// written for a different value family than the target type.
    pub fn build(self) -> Result<PromptRequest, DomainError> {
        let mut predicate = self.predicate;
        let mut rejection_message = self.rejection_message;

        if let Some(p) = &predicate {
            if let Some(family) = p.family() {
                if family != self.target {
                    return Err(DomainError::PredicateMismatch {
                        expected: self.target.to_string(),
                        found: family.to_string(),
                    });
                }
            }
        }

        if let Some(Predicate::Bound(rule)) = &predicate {
            if rule.is_none() {
                predicate = None;
            } else if rejection_message.is_none() {
                rejection_message = rule.rejection_message();
            }
        }

        Ok(PromptRequest {
            prompt: self.prompt,
            target: self.target,
            predicate,
            coercion_message: self.coercion_message,
            rejection_message,
        })
    }
}
