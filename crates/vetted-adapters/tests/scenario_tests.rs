//! End-to-end prompting scenarios with scripted console adapters.

use std::io::Write;

use vetted_adapters::{FormLoader, RecordingWriter, ScriptedReader};
use vetted_core::{
    application::{ApplicationError, FormService, PromptEngine, RetryPolicy, SelectionService},
    domain::{
        BoundCheck, BoundRule, DomainError, FieldSpec, IndexBase, Predicate, PromptRequest,
        TargetType, Value,
    },
    error::VettedError,
};

fn engine(answers: &[&str]) -> (PromptEngine, ScriptedReader, RecordingWriter) {
    let reader = ScriptedReader::new(answers.iter().copied());
    let writer = RecordingWriter::new();
    let engine = PromptEngine::new(Box::new(reader.clone()), Box::new(writer.clone()));
    (engine, reader, writer)
}

#[test]
fn first_answer_in_bounds_is_returned() {
    let (mut engine, reader, writer) = engine(&["7", "unused"]);
    let request = PromptRequest::builder("Pick: ")
        .target(TargetType::Integer)
        .bounds(BoundRule::Integer(BoundCheck::Range(1, 10)))
        .build()
        .unwrap();

    assert_eq!(engine.obtain(&request).unwrap(), Value::Integer(7));
    assert_eq!(reader.consumed(), 1);
    assert!(writer.lines().is_empty());
}

#[test]
fn boundaries_are_inclusive() {
    for answer in ["1", "10"] {
        let (mut engine, _, writer) = engine(&[answer]);
        let request = PromptRequest::builder("")
            .target(TargetType::Integer)
            .bounds(BoundRule::Integer(BoundCheck::Range(1, 10)))
            .build()
            .unwrap();
        assert!(engine.obtain(&request).is_ok());
        assert!(writer.lines().is_empty());
    }
}

#[test]
fn coercion_failures_never_escape() {
    let (mut engine, reader, writer) = engine(&["", "  ", "3.5", "x", " 12 "]);
    let request = PromptRequest::builder("n: ")
        .target(TargetType::Integer)
        .build()
        .unwrap();

    assert_eq!(engine.obtain(&request).unwrap(), Value::Integer(12));
    assert_eq!(reader.consumed(), 5);
    assert_eq!(writer.lines().len(), 4);
    assert!(
        writer
            .lines()
            .iter()
            .all(|l| l == "Invalid data was given. Expected an integer")
    );
}

#[test]
fn custom_predicate_uses_default_message() {
    let (mut engine, _, writer) = engine(&["bob", "alice"]);
    let request = PromptRequest::builder("Name: ")
        .predicate(Predicate::text(|s| s.starts_with('a')))
        .build()
        .unwrap();

    assert_eq!(engine.obtain(&request).unwrap(), Value::Text("alice".into()));
    assert_eq!(writer.lines(), ["Input does not meet criteria"]);
}

#[test]
fn age_field_from_form_entry() {
    let (mut engine, reader, writer) = engine(&["abc", "0", "131", "42"]);
    let field = FieldSpec::new("int", "Age:").with_predicate(
        serde_json::from_str(r#"{ "min": 1, "max": 130 }"#).unwrap(),
    );
    let request = field.to_prompt_request().unwrap();

    assert_eq!(engine.obtain(&request).unwrap(), Value::Integer(42));
    assert_eq!(
        writer.lines(),
        [
            "Invalid data was given. Expected an integer",
            "Expected a value between 1 and 130",
            "Expected a value between 1 and 130",
        ]
    );
    assert_eq!(reader.prompts(), vec!["Age: "; 4]);
}

#[test]
fn selection_out_of_range_then_valid() {
    let (mut engine, _, writer) = engine(&["0", "1"]);
    let market = ["Sword", "Shield"];

    let item = SelectionService::new(&mut engine)
        .select_one("Buy? ", "Shop Goods", &market, IndexBase::One)
        .unwrap();

    assert_eq!(*item, "Sword");
    assert_eq!(writer.lines(), ["Please select a number between 1 - 2"]);
}

#[test]
fn unknown_type_in_document_issues_no_prompt() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{ "signup": {{ "fields": {{
            "name": {{ "type": "str", "message": "Name:" }},
            "dob":  {{ "type": "date", "message": "Birthday:" }}
        }} }} }}"#
    )
    .unwrap();

    let document = FormLoader::load(file.path()).unwrap();
    let form = FormService::find_form(&document, "signup").unwrap();

    let (mut engine, reader, _) = engine(&["Ada"]);
    let err = FormService::new(&mut engine).run(form).unwrap_err();

    assert!(matches!(
        err,
        VettedError::Application(ApplicationError::InvalidField {
            source: DomainError::UnimplementedMapping { .. },
            ..
        })
    ));
    assert!(reader.prompts().is_empty());
}

#[test]
fn form_response_serializes_in_field_order() {
    let document = FormLoader::parse(
        r#"{ "signup": { "fields": {
            "username": { "type": "str", "message": "Username:",
                          "predicate": { "minLength": 3 } },
            "height":   { "type": "float", "message": "Height:",
                          "predicate": { "min": 0.5, "max": "2.5" } }
        } } }"#,
        vetted_adapters::DocumentFormat::Json,
    )
    .unwrap();
    let form = document.form("signup").unwrap();

    let (mut engine, _, writer) = engine(&["al", "alan", "3", "1.8"]);
    let response = FormService::new(&mut engine).run(form).unwrap();

    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"username":"alan","height":1.8}"#
    );
    assert_eq!(
        writer.lines(),
        [
            "Must be at least 3 characters in length",
            "Expected a value between 0.5 and 2.5",
        ]
    );
}

#[test]
fn exhausted_policy_and_closed_input() {
    let request = PromptRequest::builder("n: ")
        .target(TargetType::Decimal)
        .build()
        .unwrap();

    let (engine_a, _, _) = engine(&["a", "b", "c"]);
    let mut bounded = engine_a.with_policy(RetryPolicy::from_limit(2));
    assert!(matches!(
        bounded.obtain(&request),
        Err(VettedError::Application(
            ApplicationError::AttemptsExhausted { attempts: 2 }
        ))
    ));

    let (mut closed, _, _) = engine(&["a"]);
    assert!(matches!(
        closed.obtain(&request),
        Err(VettedError::Application(ApplicationError::InputClosed))
    ));
}
