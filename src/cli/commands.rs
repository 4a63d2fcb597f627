use clap::Parser;
use std::path::PathBuf;

use crate::config::{GenerationConfig, DEFAULT_OUTPUT};
use crate::generator::{generate, GenerationReport, TEST_FILENAMES};

/// Generate criterion benchmarks comparing WebP decoders
#[derive(Parser, Debug)]
#[command(name = "webpbench-gen", version)]
#[command(about = "Generate WebP decoder benchmarks from the built-in asset manifest", long_about = None)]
pub struct Cli {
    /// File to write the generated benchmark source to
    #[arg(short, long, env = "WEBPBENCH_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Cli {
    /// Build the run configuration from the parsed arguments and environment.
    #[must_use]
    pub fn config(&self) -> GenerationConfig {
        GenerationConfig::new(self.output.clone())
    }
}

/// Generate the benchmark file described by `cli`
///
/// # Errors
///
/// Returns an error if the generated source is malformed or cannot be written.
pub fn run_cli(cli: &Cli) -> anyhow::Result<GenerationReport> {
    let config = cli.config();
    let report = generate(&config, TEST_FILENAMES)?;
    Ok(report)
}
