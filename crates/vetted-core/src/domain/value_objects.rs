//! Domain value objects: TargetType and Value.
//!
//! # Design
//!
//! `TargetType` is the closed set of semantic types a prompt can ask for.
//! Each variant owns its coercion; there is no runtime type object passed
//! around. `Value` is what a successful coercion produces.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant to `TargetType` and `Value`
//! 2. Add the `as_str`, `FromStr` and `coerce` arms here
//! 3. Add a `BoundRule` variant in `bounds.rs` if the type can be bounded

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── TargetType ────────────────────────────────────────────────────────────────

/// The semantic type a prompt coerces raw text into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Text,
    Integer,
    Decimal,
}

impl TargetType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
        }
    }

    /// Indefinite article for the type name.
    pub const fn article(&self) -> &'static str {
        match self {
            Self::Integer => "an",
            Self::Text | Self::Decimal => "a",
        }
    }

    /// Convert raw input text into a [`Value`] of this type.
    ///
    /// Numeric types ignore surrounding whitespace. Text is taken verbatim,
    /// so it never fails.
    pub fn coerce(self, raw: &str) -> Result<Value, CoercionError> {
        match self {
            Self::Text => Ok(Value::Text(raw.to_owned())),
            Self::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| CoercionError { expected: self }),
            Self::Decimal => raw
                .trim()
                .parse::<f64>()
                .map(Value::Decimal)
                .map_err(|_| CoercionError { expected: self }),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the type names used by forms documents.
///
/// The table is fixed and case-sensitive: `text`/`str`, `integer`/`int`,
/// `decimal`/`float`.
impl FromStr for TargetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "str" => Ok(Self::Text),
            "integer" | "int" => Ok(Self::Integer),
            "decimal" | "float" => Ok(Self::Decimal),
            other => Err(DomainError::UnimplementedMapping {
                type_name: other.to_owned(),
            }),
        }
    }
}

// ── CoercionError ─────────────────────────────────────────────────────────────

/// Raw text was not a well-formed representation of the target type.
///
/// This is a user input error: the engine reports it and asks again. It is
/// never propagated out of [`crate::application::PromptEngine::obtain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid data was given. Expected {} {}", .expected.article(), .expected)]
pub struct CoercionError {
    pub expected: TargetType,
}

// ── Value ─────────────────────────────────────────────────────────────────────

/// A coerced, accepted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl Value {
    pub const fn target_type(&self) -> TargetType {
        match self {
            Self::Text(_) => TargetType::Text,
            Self::Integer(_) => TargetType::Integer,
            Self::Decimal(_) => TargetType::Decimal,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub const fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d:?}"),
        }
    }
}
