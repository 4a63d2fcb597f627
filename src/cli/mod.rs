//! # CLI Module
//!
//! Command-line entry point for the benchmark generator.
//!
//! ## Usage
//!
//! ```bash
//! webpbench-gen --output benches/x_decode_benchmark.rs
//! ```
//!
//! Options:
//! - `-o, --output <PATH>` - Destination file (env `WEBPBENCH_OUTPUT`,
//!   default `x_decode_benchmark.rs`)
//!
//! The formatter and log output are configured through the environment, see
//! [`crate::config`] and [`crate::logging`].

mod commands;


pub use commands::{run_cli, Cli};
