//! `vetted shop` - the traveler's shop demo.
//!
//! Asks for a name, then an age between 1 and 130, then for one item from
//! the market.

use tracing::debug;
use vetted_core::{
    application::SelectionService,
    domain::{IndexBase, Predicate, PromptRequest, TargetType},
};

use crate::{cli::ShopArgs, config::AppConfig, error::CliResult, output::OutputManager};

const NAME_PROMPT: &str = "Welcome traveler! What's your name? ";
const AGE_REJECTION: &str = "Please provide a number between 1 and 130!";
const SHOP_TITLE: &str = "Shop Goods";
const SHOP_PROMPT: &str = "Welcome to my shop! What would you like to buy? ";

pub fn execute(args: ShopArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut engine = super::prompt_engine(
        &output,
        args.max_attempts.unwrap_or(config.prompt.max_attempts),
    );

    let name_request = PromptRequest::builder(NAME_PROMPT).build()?;
    let username = engine.obtain(&name_request)?;

    let age_request = PromptRequest::builder(format!("Hello there, {username}! How old are you? "))
        .target(TargetType::Integer)
        .predicate(Predicate::integer(|age| 0 < age && age <= 130))
        .rejection_message(AGE_REJECTION)
        .build()?;
    let age = engine.obtain(&age_request)?;
    debug!(%username, %age, "Traveler registered");

    let items = if args.items.is_empty() {
        config.shop.items
    } else {
        args.items
    };
    let base = IndexBase::from_start_at_zero(args.start_at_zero || config.shop.start_at_zero);

    let item = SelectionService::new(&mut engine).select_one(SHOP_PROMPT, SHOP_TITLE, &items, base)?;

    output.data(&format!("You have acquired a {item}"))?;
    Ok(())
}
