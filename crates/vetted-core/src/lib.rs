//! Vetted Core - ask until valid.
//!
//! This crate provides the domain and application layers for Vetted: typed
//! prompts that keep asking until the answer coerces to the target type and
//! passes its predicate, plus numbered selection menus and declarative forms
//! built on the same loop.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            vetted-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (PromptEngine, SelectionService, Form)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (LineReader, LineWriter)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     vetted-adapters (Infrastructure)    │
//! │  (TerminalReader, ScriptedReader, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vetted_core::prelude::*;
//! # fn reader() -> Box<dyn LineReader> { unimplemented!() }
//! # fn writer() -> Box<dyn LineWriter> { unimplemented!() }
//!
//! let request = PromptRequest::builder("How old are you? ")
//!     .target(TargetType::Integer)
//!     .bounds(BoundRule::Integer(BoundCheck::Range(1, 130)))
//!     .build()?;
//!
//! let mut engine = PromptEngine::new(reader(), writer());
//! let age = engine.obtain(&request)?;
//! # Ok::<(), VettedError>(())
//! ```

pub mod domain;

pub mod application;

pub mod error;

pub mod prelude {
    pub use crate::application::{
        CancellationToken, FormService, PromptEngine, RetryPolicy, SelectionService,
        ports::{LineReader, LineWriter},
    };
    pub use crate::domain::{
        BoundCheck, BoundRule, FieldSpec, FormResponse, FormSpec, FormsDocument, IndexBase,
        Predicate, PromptRequest, SelectionList, TargetType, Value,
    };
    pub use crate::error::{VettedError, VettedResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
