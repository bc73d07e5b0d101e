//! Selection Service - pick one item from a numbered menu.

use std::fmt::Display;

use tracing::{debug, instrument};

use crate::{
    application::services::prompt_engine::PromptEngine,
    domain::{IndexBase, PromptRequest, SelectionList, TargetType},
    error::{VettedError, VettedResult},
};

/// Asks for a menu number through a borrowed [`PromptEngine`].
pub struct SelectionService<'e> {
    engine: &'e mut PromptEngine,
    coercion_message: Option<String>,
}

impl<'e> SelectionService<'e> {
    pub fn new(engine: &'e mut PromptEngine) -> Self {
        Self {
            engine,
            coercion_message: None,
        }
    }

    /// Replace the generic message shown for non-numeric answers.
    pub fn with_coercion_message(mut self, message: impl Into<String>) -> Self {
        self.coercion_message = Some(message.into());
        self
    }

    /// Show `title` and the numbered `choices`, then ask with `prompt` until
    /// a listed number is entered.
    #[instrument(skip_all, fields(title = %title, choices = choices.len()))]
    pub fn select_one<'c, T: Display>(
        &mut self,
        prompt: &str,
        title: &str,
        choices: &'c [T],
        base: IndexBase,
    ) -> VettedResult<&'c T> {
        let list = SelectionList::new(title, choices, base)?;
        let index = self.select_index(prompt, &list)?;
        Ok(&choices[index])
    }

    /// Same as [`select_one`](Self::select_one) for a prepared list.
    pub fn select_from<'l, T: Display>(
        &mut self,
        prompt: &str,
        list: &'l SelectionList<T>,
    ) -> VettedResult<&'l T> {
        let index = self.select_index(prompt, list)?;
        Ok(&list.items()[index])
    }

    fn select_index<T: Display>(
        &mut self,
        prompt: &str,
        list: &SelectionList<T>,
    ) -> VettedResult<usize> {
        let request = PromptRequest::builder(list.render(prompt))
            .target(TargetType::Integer)
            .bounds(list.bound_rule())
            .rejection_message(list.rejection_message())
            .coercion_message_opt(self.coercion_message.clone())
            .build()?;

        let value = self.engine.obtain(&request)?;
        let number = value.as_integer().ok_or_else(|| VettedError::Internal {
            message: format!("selection returned a non-integer value {value}"),
        })?;

        let index = number - list.base().offset();
        debug!(number, index, "Selection accepted");

        usize::try_from(index)
            .ok()
            .filter(|i| *i < list.items().len())
            .ok_or_else(|| VettedError::Internal {
                message: format!("selection {number} is outside the menu"),
            })
    }
}
