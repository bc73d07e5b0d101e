//! Bound checks: the closed set of min/max predicates a field can declare.
//!
//! A [`BoundCheck`] knows how to accept or reject a value. A [`BoundRule`]
//! ties a check to the value family it measures (text length, integer,
//! decimal) and owns the rejection message for each variant.

use std::fmt;

use crate::domain::{error::DomainError, value_objects::TargetType, value_objects::Value};

/// A minimum and/or maximum constraint, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundCheck<T> {
    None,
    LowerBound(T),
    UpperBound(T),
    Range(T, T),
}

impl<T> BoundCheck<T>
where
    T: PartialOrd + Copy + fmt::Display,
{
    /// Pick the variant matching which limits are present.
    ///
    /// Fails with [`DomainError::EmptyRange`] when `min > max`, since no value
    /// could ever satisfy the check.
    pub fn from_limits(min: Option<T>, max: Option<T>) -> Result<Self, DomainError> {
        match (min, max) {
            (Some(min), Some(max)) if min > max => Err(DomainError::EmptyRange {
                min: min.to_string(),
                max: max.to_string(),
            }),
            (Some(min), Some(max)) => Ok(Self::Range(min, max)),
            (Some(min), None) => Ok(Self::LowerBound(min)),
            (None, Some(max)) => Ok(Self::UpperBound(max)),
            (None, None) => Ok(Self::None),
        }
    }

    pub fn accepts(&self, value: T) -> bool {
        match *self {
            Self::None => true,
            Self::LowerBound(min) => value >= min,
            Self::UpperBound(max) => value <= max,
            Self::Range(min, max) => min <= value && value <= max,
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// A bound check bound to the value family it measures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundRule {
    /// Character count of a text value.
    Length(BoundCheck<usize>),
    Integer(BoundCheck<i64>),
    Decimal(BoundCheck<f64>),
}

impl BoundRule {
    /// The target type whose values this rule can measure.
    pub const fn target_type(&self) -> TargetType {
        match self {
            Self::Length(_) => TargetType::Text,
            Self::Integer(_) => TargetType::Integer,
            Self::Decimal(_) => TargetType::Decimal,
        }
    }

    pub const fn is_none(&self) -> bool {
        match self {
            Self::Length(c) => c.is_none(),
            Self::Integer(c) => c.is_none(),
            Self::Decimal(c) => c.is_none(),
        }
    }

    /// Evaluate the rule. A value of the wrong family is never accepted.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Length(check), Value::Text(s)) => check.accepts(s.chars().count()),
            (Self::Integer(check), Value::Integer(n)) => check.accepts(*n),
            (Self::Decimal(check), Value::Decimal(d)) => check.accepts(*d),
            _ => false,
        }
    }

    /// Message shown when a value is rejected, or `None` for an empty rule.
    pub fn rejection_message(&self) -> Option<String> {
        match self {
            Self::Length(check) => length_message(check),
            Self::Integer(check) => value_message(check, |n| n.to_string()),
            Self::Decimal(check) => value_message(check, |d| format!("{d:?}")),
        }
    }
}

fn length_message(check: &BoundCheck<usize>) -> Option<String> {
    match *check {
        BoundCheck::None => None,
        BoundCheck::Range(min, max) => Some(format!(
            "Must be at least {min} to {max} characters in length"
        )),
        BoundCheck::LowerBound(min) => Some(format!("Must be at least {min} characters in length")),
        BoundCheck::UpperBound(max) => Some(format!("Cannot exceed {max} characters in length")),
    }
}

fn value_message<T: Copy>(check: &BoundCheck<T>, show: impl Fn(T) -> String) -> Option<String> {
    match *check {
        BoundCheck::None => None,
        BoundCheck::Range(min, max) => Some(format!(
            "Expected a value between {} and {}",
            show(min),
            show(max)
        )),
        BoundCheck::LowerBound(min) => Some(format!(
            "Expected a value greater than or equal to {}",
            show(min)
        )),
        BoundCheck::UpperBound(max) => Some(format!(
            "Expected a value less than or equal to {}",
            show(max)
        )),
    }
}
