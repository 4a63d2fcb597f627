use askama::Template;
use tracing::debug;

use super::manifest::BenchCase;
use crate::error::{GenerateError, Result};

/// Template data for the file header (banner, imports, asset helpers)
#[derive(Template)]
#[template(path = "bench_header.rs.txt", escape = "none")]
pub struct HeaderTemplateData<'a> {
    /// Output path quoted in the regeneration marker
    pub output_path: &'a str,
}

/// Template data for the three benchmark functions of one asset
///
/// Both fields are substituted verbatim.
#[derive(Template)]
#[template(path = "bench_entry.rs.txt", escape = "none")]
pub struct EntryTemplateData<'a> {
    /// Sanitized asset name used inside function names
    pub identifier: &'a str,
    /// Raw manifest entry passed to the asset loaders
    pub filename: &'a str,
}

/// Template data for the criterion registration at the end of the file
#[derive(Template)]
#[template(path = "bench_footer.rs.txt", escape = "none")]
pub struct FooterTemplateData {
    /// Every generated benchmark function, in emission order
    pub functions: Vec<String>,
}

fn render_err(what: &str, err: askama::Error) -> GenerateError {
    GenerateError::malformed(format!("failed to render {what} template: {err}"))
}

/// Render the fixed header.
///
/// # Errors
///
/// Returns [`GenerateError::MalformedSource`] if the template engine fails.
pub fn render_header(output_path: &str) -> Result<String> {
    HeaderTemplateData { output_path }
        .render()
        .map_err(|e| render_err("header", e))
}

/// Render the benchmark functions for one manifest entry.
///
/// # Errors
///
/// Returns [`GenerateError::MalformedSource`] if the template engine fails.
pub fn render_entry(filename: &str) -> Result<String> {
    let case = BenchCase::new(filename);
    render_case(&case)
}

pub(crate) fn render_case(case: &BenchCase<'_>) -> Result<String> {
    let rendered = EntryTemplateData {
        identifier: &case.identifier,
        filename: case.filename,
    }
    .render()
    .map_err(|e| render_err("entry", e))?;
    debug!(filename = case.filename, identifier = %case.identifier, "rendered entry");
    Ok(rendered)
}

/// Render the `criterion_group!`/`criterion_main!` registration for `cases`.
///
/// # Errors
///
/// Returns [`GenerateError::MalformedSource`] if the template engine fails.
pub fn render_footer(cases: &[BenchCase<'_>]) -> Result<String> {
    FooterTemplateData {
        functions: cases.iter().flat_map(BenchCase::function_names).collect(),
    }
    .render()
    .map_err(|e| render_err("footer", e))
}
