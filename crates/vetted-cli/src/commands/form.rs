//! `vetted form` - prompt for every field of a form.

use tracing::info;
use vetted_adapters::FormLoader;
use vetted_core::{
    application::FormService,
    domain::{FormResponse, FormsDocument},
};

use crate::{
    cli::FormArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: FormArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let path = args
        .file
        .or(config.forms.path)
        .ok_or(CliError::NoFormsDocument)?;
    let document = FormLoader::load(&path)?;

    if args.list {
        return list_forms(&document, &output);
    }

    let name = args.name.unwrap_or(config.forms.default_form);
    let form = FormService::find_form(&document, &name)?;
    info!(form = %name, fields = form.fields.len(), "Starting form");

    let mut engine = super::prompt_engine(
        &output,
        args.max_attempts.unwrap_or(config.prompt.max_attempts),
    );
    let response = FormService::new(&mut engine).run(form)?;

    print_response(&name, &response, &output)
}

fn list_forms(document: &FormsDocument, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let names: Vec<&str> = document.names().collect();
        output.data(&serde_json::to_string(&names).map_err(std::io::Error::from)?)?;
        return Ok(());
    }

    output.header("Available Forms:")?;
    for name in document.names() {
        output.data(&format!("  {name}"))?;
    }
    Ok(())
}

fn print_response(name: &str, response: &FormResponse, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let json = serde_json::to_string_pretty(response).map_err(std::io::Error::from)?;
        output.data(&json)?;
        return Ok(());
    }

    output.success(&format!("Form '{name}' complete"))?;
    for (field, value) in response.iter() {
        output.data(&format!("  {field}: {value}"))?;
    }
    Ok(())
}
