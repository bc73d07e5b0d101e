//! Declarative form descriptions and the adapter that turns a field into a
//! [`PromptRequest`].
//!
//! # Document shape
//!
//! ```json
//! {
//!   "user-registration": {
//!     "fields": {
//!       "username": { "type": "text", "message": "Username:",
//!                     "predicate": { "minLength": 3, "maxLength": 16 } },
//!       "age":      { "type": "int",  "message": "Age:",
//!                     "errorMessage": "Age must be a whole number",
//!                     "predicate": { "min": 1, "max": 130 } }
//!     }
//!   }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    bounds::{BoundCheck, BoundRule},
    entities::{common::OrderedMap, request::PromptRequest},
    error::DomainError,
    value_objects::{TargetType, Value},
};

/// Appended to every field message before it is shown.
pub const PROMPT_SEPARATOR: &str = " ";

// ── BoundValue ────────────────────────────────────────────────────────────────

/// A bound as written in a document: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl BoundValue {
    /// Cast to an integer. Decimals truncate toward zero.
    pub fn to_integer(&self, key: &'static str) -> Result<i64, DomainError> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Decimal(d) if d.is_finite() => Ok(d.trunc() as i64),
            Self::Decimal(_) => Err(self.invalid(key, "not a finite number")),
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| self.invalid(key, e.to_string())),
        }
    }

    pub fn to_decimal(&self, key: &'static str) -> Result<f64, DomainError> {
        match self {
            Self::Integer(n) => Ok(*n as f64),
            Self::Decimal(d) => Ok(*d),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| self.invalid(key, e.to_string())),
        }
    }

    pub fn to_length(&self, key: &'static str) -> Result<usize, DomainError> {
        let n = self.to_integer(key)?;
        usize::try_from(n).map_err(|_| self.invalid(key, "a length cannot be negative"))
    }

    fn invalid(&self, key: &'static str, reason: impl Into<String>) -> DomainError {
        DomainError::InvalidBound {
            key,
            value: self.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BoundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d:?}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

// ── PredicateBlock ────────────────────────────────────────────────────────────

/// The optional `predicate` object of a field.
///
/// Text fields read `minLength`/`maxLength`; numeric fields read `min`/`max`.
/// Keys that do not apply to the field's type are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredicateBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<BoundValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<BoundValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<BoundValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<BoundValue>,
}

impl PredicateBlock {
    /// Synthesize the single bound rule this block describes for `target`.
    pub fn bound_rule(&self, target: TargetType) -> Result<BoundRule, DomainError> {
        match target {
            TargetType::Text => {
                let min = cast(&self.min_length, "minLength", BoundValue::to_length)?;
                let max = cast(&self.max_length, "maxLength", BoundValue::to_length)?;
                Ok(BoundRule::Length(BoundCheck::from_limits(min, max)?))
            }
            TargetType::Integer => {
                let min = cast(&self.min, "min", BoundValue::to_integer)?;
                let max = cast(&self.max, "max", BoundValue::to_integer)?;
                Ok(BoundRule::Integer(BoundCheck::from_limits(min, max)?))
            }
            TargetType::Decimal => {
                let min = cast(&self.min, "min", BoundValue::to_decimal)?;
                let max = cast(&self.max, "max", BoundValue::to_decimal)?;
                Ok(BoundRule::Decimal(BoundCheck::from_limits(min, max)?))
            }
        }
    }
}

fn cast<T>(
    bound: &Option<BoundValue>,
    key: &'static str,
    convert: fn(&BoundValue, &'static str) -> Result<T, DomainError>,
) -> Result<Option<T>, DomainError> {
    bound.as_ref().map(|b| convert(b, key)).transpose()
}

// ── FieldSpec ─────────────────────────────────────────────────────────────────

/// One declared form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Type name, resolved through [`TargetType`]'s `FromStr`.
    #[serde(rename = "type")]
    pub type_name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<PredicateBlock>,
}

impl FieldSpec {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            error_message: None,
            predicate: None,
        }
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_predicate(mut self, predicate: PredicateBlock) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn target_type(&self) -> Result<TargetType, DomainError> {
        self.type_name.parse()
    }

    /// Build the prompt request for this field.
    ///
    /// Configuration problems (unknown type name, unusable bound) are
    /// returned as errors before anything is shown to the user.
    pub fn to_prompt_request(&self) -> Result<PromptRequest, DomainError> {
        let target = self.target_type()?;

        let mut builder = PromptRequest::builder(format!("{}{}", self.message, PROMPT_SEPARATOR))
            .target(target)
            .coercion_message_opt(self.error_message.clone());

        if let Some(block) = &self.predicate {
            builder = builder.bounds(block.bound_rule(target)?);
        }

        builder.build()
    }
}

// ── FormSpec / FormsDocument ──────────────────────────────────────────────────

/// A named list of fields, prompted in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSpec {
    pub fields: OrderedMap<FieldSpec>,
}

/// Top-level document: form name to form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormsDocument {
    forms: OrderedMap<FormSpec>,
}

impl FormsDocument {
    pub fn form(&self, name: &str) -> Option<&FormSpec> {
        self.forms.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.forms.keys()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl FromIterator<(String, FormSpec)> for FormsDocument {
    fn from_iter<I: IntoIterator<Item = (String, FormSpec)>>(iter: I) -> Self {
        Self {
            forms: iter.into_iter().collect(),
        }
    }
}

// ── FormResponse ──────────────────────────────────────────────────────────────

/// Validated values keyed by field name, in field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormResponse {
    values: OrderedMap<Value>,
}

impl FormResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, field: impl Into<String>, value: Value) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::request::Rejection;

    fn block(json: &str) -> PredicateBlock {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn message_gets_trailing_separator() {
        let req = FieldSpec::new("text", "Name?").to_prompt_request().unwrap();
        assert_eq!(req.prompt(), "Name? ");
        assert!(req.predicate().is_none());
    }

    #[test]
    fn error_message_becomes_coercion_message() {
        let req = FieldSpec::new("int", "Age?")
            .with_error_message("Whole numbers only")
            .to_prompt_request()
            .unwrap();
        assert_eq!(req.coercion_message(), Some("Whole numbers only"));
    }

    #[test]
    fn unknown_type_is_fatal() {
        let err = FieldSpec::new("date", "When?").to_prompt_request().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnimplementedMapping {
                type_name: "date".into()
            }
        );
    }

    #[test]
    fn text_range_rule() {
        let req = FieldSpec::new("str", "User:")
            .with_predicate(block(r#"{"minLength": 3, "maxLength": 5}"#))
            .to_prompt_request()
            .unwrap();
        assert_eq!(
            req.rejection_message(),
            Some("Must be at least 3 to 5 characters in length")
        );
        assert!(req.evaluate("abc").is_ok());
        assert!(req.evaluate("abcde").is_ok());
        assert!(matches!(req.evaluate("ab"), Err(Rejection::Predicate(_))));
        assert!(matches!(req.evaluate("abcdef"), Err(Rejection::Predicate(_))));
    }

    #[test]
    fn text_one_sided_rules() {
        let min = FieldSpec::new("text", "x")
            .with_predicate(block(r#"{"minLength": "2"}"#))
            .to_prompt_request()
            .unwrap();
        assert_eq!(
            min.rejection_message(),
            Some("Must be at least 2 characters in length")
        );

        let max = FieldSpec::new("text", "x")
            .with_predicate(block(r#"{"maxLength": 4}"#))
            .to_prompt_request()
            .unwrap();
        assert_eq!(
            max.rejection_message(),
            Some("Cannot exceed 4 characters in length")
        );
    }

    #[test]
    fn integer_range_from_age_field() {
        let field: FieldSpec = serde_json::from_str(
            r#"{"type":"integer","message":"Age?","predicate":{"min":1,"max":130}}"#,
        )
        .unwrap();
        let req = field.to_prompt_request().unwrap();
        assert_eq!(req.target(), TargetType::Integer);
        assert_eq!(
            req.rejection_message(),
            Some("Expected a value between 1 and 130")
        );
        assert!(req.evaluate("1").is_ok());
        assert!(req.evaluate("130").is_ok());
        assert!(req.evaluate("0").is_err());
        assert!(req.evaluate("131").is_err());
    }

    #[test]
    fn numeric_bounds_are_cast_to_target_type() {
        let int = FieldSpec::new("int", "x")
            .with_predicate(block(r#"{"min": 2.9}"#))
            .to_prompt_request()
            .unwrap();
        assert_eq!(
            int.rejection_message(),
            Some("Expected a value greater than or equal to 2")
        );

        let dec = FieldSpec::new("float", "x")
            .with_predicate(block(r#"{"max": 10}"#))
            .to_prompt_request()
            .unwrap();
        assert_eq!(
            dec.rejection_message(),
            Some("Expected a value less than or equal to 10.0")
        );
        assert!(dec.evaluate("10").is_ok());
        assert!(dec.evaluate("10.01").is_err());
    }

    #[test]
    fn block_without_recognized_keys_yields_no_predicate() {
        let req = FieldSpec::new("int", "x")
            .with_predicate(block(r#"{"minLength": 3}"#))
            .to_prompt_request()
            .unwrap();
        assert!(req.predicate().is_none());

        let req = FieldSpec::new("text", "x")
            .with_predicate(block("{}"))
            .to_prompt_request()
            .unwrap();
        assert!(req.predicate().is_none());
    }

    #[test]
    fn unparsable_bound_is_fatal() {
        let err = FieldSpec::new("int", "x")
            .with_predicate(block(r#"{"min": "lots"}"#))
            .to_prompt_request()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidBound { key: "min", .. }));

        let err = FieldSpec::new("text", "x")
            .with_predicate(block(r#"{"minLength": -1}"#))
            .to_prompt_request()
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidBound {
                key: "minLength",
                ..
            }
        ));
    }

    #[test]
    fn inverted_bounds_are_fatal() {
        let err = FieldSpec::new("int", "x")
            .with_predicate(block(r#"{"min": 5, "max": 1}"#))
            .to_prompt_request()
            .unwrap_err();
        assert!(matches!(err, DomainError::EmptyRange { .. }));
    }

    #[test]
    fn document_keeps_form_and_field_order() {
        let doc: FormsDocument = serde_json::from_str(
            r#"{
                "user-registration": {"fields": {
                    "username": {"type": "text", "message": "User:"},
                    "age": {"type": "int", "message": "Age:"},
                    "height": {"type": "float", "message": "Height:"}
                }},
                "feedback": {"fields": {}}
            }"#,
        )
        .unwrap();

        assert_eq!(doc.names().collect::<Vec<_>>(), ["user-registration", "feedback"]);
        let form = doc.form("user-registration").unwrap();
        assert_eq!(
            form.fields.keys().collect::<Vec<_>>(),
            ["username", "age", "height"]
        );
        assert!(doc.form("missing").is_none());
    }

    #[test]
    fn response_serializes_as_object() {
        let mut response = FormResponse::new();
        response.record("name", Value::Text("Ada".into()));
        response.record("age", Value::Integer(36));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"name":"Ada","age":36}"#
        );
    }
}
