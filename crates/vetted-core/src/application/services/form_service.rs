//! Form Service - prompt every field of a form in order.
//!
//! All fields are converted to prompt requests before the first prompt is
//! shown. A misconfigured field therefore aborts the form with nothing asked.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, services::prompt_engine::PromptEngine},
    domain::{FormResponse, FormSpec, FormsDocument, PromptRequest},
    error::{VettedError, VettedResult},
};

/// Runs a [`FormSpec`] through a borrowed [`PromptEngine`].
pub struct FormService<'e> {
    engine: &'e mut PromptEngine,
}

impl<'e> FormService<'e> {
    pub fn new(engine: &'e mut PromptEngine) -> Self {
        Self { engine }
    }

    /// Look up `name` in `document`.
    pub fn find_form<'d>(document: &'d FormsDocument, name: &str) -> VettedResult<&'d FormSpec> {
        document.form(name).ok_or_else(|| {
            ApplicationError::FormNotFound {
                name: name.to_owned(),
                available: document.names().map(str::to_owned).collect(),
            }
            .into()
        })
    }

    /// Convert every field, in declaration order.
    pub fn prepare(form: &FormSpec) -> VettedResult<Vec<(String, PromptRequest)>> {
        form.fields
            .iter()
            .map(|(name, field)| {
                field
                    .to_prompt_request()
                    .map(|request| (name.to_owned(), request))
                    .map_err(|source| {
                        VettedError::from(ApplicationError::InvalidField {
                            field: name.to_owned(),
                            source,
                        })
                    })
            })
            .collect()
    }

    /// Prompt for each field and collect the answers.
    #[instrument(skip_all, fields(fields = form.fields.len()))]
    pub fn run(&mut self, form: &FormSpec) -> VettedResult<FormResponse> {
        let requests = Self::prepare(form)?;
        info!("Running form");

        let mut response = FormResponse::new();
        for (name, request) in requests {
            let value = self.engine.obtain(&request)?;
            debug!(field = %name, "Field answered");
            response.record(name, value);
        }

        Ok(response)
    }
}
