//! # Generation Configuration
//!
//! Everything a generation run needs is collected into a [`GenerationConfig`]
//! once, at the top of the binary, and passed down by reference. Nothing in
//! the pipeline reads process-wide state after that point.
//!
//! ## Environment Variables
//!
//! ### `WEBPBENCH_FORMATTER`
//!
//! Selects the formatter applied to the assembled source:
//! - `prettyplease` (default): in-process, no toolchain required
//! - `rustfmt`: runs an external `rustfmt` over stdin
//!
//! ### `WEBPBENCH_RUSTFMT`
//!
//! Path of the `rustfmt` binary used when `WEBPBENCH_FORMATTER=rustfmt`.
//! Default: `rustfmt` (resolved through `PATH`).
//!
//! The output path itself comes from `--output` / `WEBPBENCH_OUTPUT`, see
//! [`crate::cli`].

use std::env;
use std::path::PathBuf;

use crate::generator::{PrettyPlease, Rustfmt, SourceFormatter};

/// Output file used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "x_decode_benchmark.rs";

/// Which formatter the pipeline runs after validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormatterKind {
    /// `prettyplease::unparse`
    #[default]
    PrettyPlease,
    /// External `rustfmt` at the given path
    Rustfmt { bin: String },
}

impl FormatterKind {
    /// Read `WEBPBENCH_FORMATTER` and `WEBPBENCH_RUSTFMT`.
    #[must_use]
    pub fn from_env() -> Self {
        let kind = env::var("WEBPBENCH_FORMATTER").unwrap_or_default();
        let bin = env::var("WEBPBENCH_RUSTFMT").ok();
        Self::parse(&kind, bin)
    }

    /// Unknown names fall back to `prettyplease`.
    #[must_use]
    pub fn parse(kind: &str, rustfmt_bin: Option<String>) -> Self {
        match kind.trim().to_lowercase().as_str() {
            "rustfmt" => FormatterKind::Rustfmt {
                bin: rustfmt_bin.unwrap_or_else(|| "rustfmt".to_string()),
            },
            _ => FormatterKind::PrettyPlease,
        }
    }

    /// Instantiate the formatter.
    #[must_use]
    pub fn build(&self) -> Box<dyn SourceFormatter> {
        match self {
            FormatterKind::PrettyPlease => Box::new(PrettyPlease),
            FormatterKind::Rustfmt { bin } => Box::new(Rustfmt::new(bin.clone())),
        }
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Destination of the generated source
    pub output_path: PathBuf,
    /// Formatter applied before writing
    pub formatter: FormatterKind,
}

impl GenerationConfig {
    /// Config for `output_path` with the formatter taken from the environment.
    #[must_use]
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            formatter: FormatterKind::from_env(),
        }
    }

    /// Replace the formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = formatter;
        self
    }

    /// Output path as quoted in the generated provenance marker.
    #[must_use]
    pub fn output_display(&self) -> String {
        self.output_path.to_string_lossy().into_owned()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            formatter: FormatterKind::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formatter_kind() {
        assert_eq!(FormatterKind::parse("", None), FormatterKind::PrettyPlease);
        assert_eq!(FormatterKind::parse("bogus", None), FormatterKind::PrettyPlease);
        assert_eq!(
            FormatterKind::parse("RustFmt", None),
            FormatterKind::Rustfmt {
                bin: "rustfmt".to_string()
            }
        );
        assert_eq!(
            FormatterKind::parse("rustfmt", Some("/opt/rustfmt".to_string())),
            FormatterKind::Rustfmt {
                bin: "/opt/rustfmt".to_string()
            }
        );
    }

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.formatter, FormatterKind::PrettyPlease);
        assert_eq!(config.output_display(), DEFAULT_OUTPUT);
    }

    #[test]
    fn test_with_formatter_overrides_env() {
        let config = GenerationConfig::new("out.rs").with_formatter(FormatterKind::PrettyPlease);
        assert_eq!(config.formatter, FormatterKind::PrettyPlease);
        assert_eq!(config.output_display(), "out.rs");
    }
}
