//! Core domain layer for Vetted.
//!
//! Pure logic only: coercion, bound checks, prompt requests, field specs and
//! selection menus. Reading and writing lines happens through ports defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No console, filesystem, or network access
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable requests**: A `PromptRequest` cannot change after `build()`
pub mod bounds;
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use bounds::{BoundCheck, BoundRule};
pub use entities::{
    common::OrderedMap,
    field::{BoundValue, FieldSpec, FormResponse, FormSpec, FormsDocument, PredicateBlock},
    request::{Predicate, PromptRequest, PromptRequestBuilder, Rejection},
    selection::{IndexBase, SelectionList},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{CoercionError, TargetType, Value};
