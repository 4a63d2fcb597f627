use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use webpbench::cli::{run_cli, Cli};
use webpbench::logging::{init_logging_with_config, LogConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging_with_config(&LogConfig::from_env()) {
        eprintln!("warning: {e:#}");
    }

    match run_cli(&cli) {
        Ok(report) => {
            info!(path = %report.output_path.display(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("webpbench-gen: {e:#}");
            ExitCode::FAILURE
        }
    }
}
