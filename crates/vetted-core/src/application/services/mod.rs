//! Application services - orchestrate use cases.
//!
//! The prompt engine is the single place that talks to the ports. The
//! selection and form services borrow it and translate their inputs into
//! prompt requests.

pub mod form_service;
pub mod prompt_engine;
pub mod retry;
pub mod selection_service;

pub use form_service::FormService;
pub use prompt_engine::PromptEngine;
pub use retry::{CancellationToken, RetryPolicy};
pub use selection_service::SelectionService;
