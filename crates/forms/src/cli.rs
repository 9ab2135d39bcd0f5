//! CLI command implementations.
//!
//! Commands load a form definition, then render it, validate a response
//! against it, or list its elements. Output goes to stdout; diagnostics go
//! through tracing.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::Config;
use crate::form::{FormBuilder, FormDefinition};

/// Load and build the form named by a CLI argument.
pub fn load_form(config: &Config, definition: &str) -> Result<FormBuilder> {
    let path = config.resolve_definition(definition);
    let form = FormDefinition::load(&path)?.build();
    info!(
        path = %path.display(),
        title = %form.title(),
        elements = form.len(),
        "form definition loaded"
    );
    Ok(form)
}

/// Print the client payload for a definition.
pub fn cmd_render(config: &Config, definition: &str) -> Result<()> {
    let form = load_form(config, definition)?;
    println!("{}", to_json(&form.to_payload(), config.pretty)?);
    Ok(())
}

/// Validate a response file (or `-` for stdin) and print the output mapping.
pub fn cmd_validate(config: &Config, definition: &str, response: &Path) -> Result<()> {
    let form = load_form(config, definition)?;
    let source = read_response(response)?;
    println!("{}", validate_response(&form, &source, config.pretty)?);
    Ok(())
}

/// Print a table of the form's elements.
pub fn cmd_inspect(config: &Config, definition: &str) -> Result<()> {
    let form = load_form(config, definition)?;
    print!("{}", inspect_table(&form));
    Ok(())
}

/// Process a JSON response against `form` and render the result.
pub fn validate_response(form: &FormBuilder, source: &str, pretty: bool) -> Result<String> {
    let raw: Value = serde_json::from_str(source).context("response is not valid JSON")?;
    let response = form.process_data(raw).inspect_err(|e| {
        warn!(form = %form.title(), error = %e, "response failed validation");
    })?;
    to_json(&response.into_value(), pretty)
}

/// Tabular listing of index, type, label, and readonly flag.
pub fn inspect_table(form: &FormBuilder) -> String {
    let mut out = format!("{}\n", form.title());
    out.push_str(&format!(
        "{:<6} {:<12} {:<20} {:<8}\n",
        "INDEX", "TYPE", "LABEL", "READONLY"
    ));
    out.push_str(&format!("{}\n", "-".repeat(49)));

    for (index, (element, slot)) in form.content().iter().zip(form.slots()).enumerate() {
        let readonly = if slot.readonly { "yes" } else { "no" };
        out.push_str(&format!(
            "{:<6} {:<12} {:<20} {}\n",
            index,
            element.type_name(),
            slot.label,
            readonly
        ));
    }

    out.push_str(&format!(
        "\n{} element(s), {} response value(s) expected\n",
        form.len(),
        form.response_len()
    ));
    out
}

fn read_response(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read response from stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn to_json(value: &impl Serialize, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
