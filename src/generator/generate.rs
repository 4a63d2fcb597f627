use std::path::PathBuf;

use tracing::{error, info};

use super::assemble::assemble;
use super::format::format_source;
use super::write::write_output;
use crate::config::GenerationConfig;
use crate::error::Result;

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// File that was written
    pub output_path: PathBuf,
    /// Manifest entries rendered
    pub cases: usize,
    /// Benchmark functions emitted
    pub functions: usize,
    /// Size of the formatted source
    pub bytes: usize,
}

/// Assemble, format and write the benchmark source for `manifest`.
///
/// Nothing is written unless formatting succeeds, so a failed run never
/// touches an existing output file.
///
/// # Errors
///
/// [`crate::GenerateError::MalformedSource`] if the assembled text is not
/// valid Rust (including duplicate identifiers from colliding names);
/// [`crate::GenerateError::Io`] if the output cannot be written.
pub fn generate(config: &GenerationConfig, manifest: &[&str]) -> Result<GenerationReport> {
    let output = config.output_display();
    let source = assemble(&output, manifest)?;
    info!(cases = manifest.len(), bytes = source.len(), "assembled benchmark source");

    let formatter = config.formatter.build();
    let formatted = format_source(formatter.as_ref(), &source).inspect_err(|e| {
        error!(error = %e, "generated source rejected");
    })?;

    write_output(&config.output_path, &formatted).inspect_err(|e| {
        error!(error = %e, "failed to write generated source");
    })?;

    let report = GenerationReport {
        output_path: config.output_path.clone(),
        cases: manifest.len(),
        functions: manifest.len() * super::manifest::IMPLEMENTATIONS.len(),
        bytes: formatted.len(),
    };
    info!(
        path = %report.output_path.display(),
        cases = report.cases,
        functions = report.functions,
        bytes = report.bytes,
        "wrote benchmark source"
    );
    Ok(report)
}
