use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use syn::Item;
use tracing::debug;

use crate::error::{GenerateError, Result};

/// Turns valid Rust source into canonically formatted source.
///
/// Implementations only see text that already passed [`validate_source`].
pub trait SourceFormatter {
    /// Format `source`, or report it as malformed.
    ///
    /// # Errors
    ///
    /// [`GenerateError::MalformedSource`] when the formatter rejects the input,
    /// [`GenerateError::Io`] when an external formatter cannot be run.
    fn format(&self, source: &str) -> Result<String>;
}

/// In-process formatting through `prettyplease`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyPlease;

impl SourceFormatter for PrettyPlease {
    fn format(&self, source: &str) -> Result<String> {
        let file = parse(source)?;
        Ok(prettyplease::unparse(&file))
    }
}

/// Formatting through an external `rustfmt` binary reading stdin.
#[derive(Debug, Clone)]
pub struct Rustfmt {
    bin: String,
}

impl Rustfmt {
    #[must_use]
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

impl SourceFormatter for Rustfmt {
    fn format(&self, source: &str) -> Result<String> {
        let bin = Path::new(&self.bin);
        let mut child = Command::new(bin)
            .args(["--edition", "2021", "--emit", "stdout"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| GenerateError::io("failed to spawn formatter", bin, e))?;

        // Dropping stdin closes the pipe so rustfmt sees EOF.
        let fed = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(source.as_bytes()),
            None => Ok(()),
        };
        let output = child
            .wait_with_output()
            .map_err(|e| GenerateError::io("failed to wait for formatter", bin, e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GenerateError::malformed(format!(
                "{} exited with {}: {}",
                self.bin,
                output.status,
                stderr.trim()
            )));
        }
        fed.map_err(|e| GenerateError::io("failed to write to formatter", bin, e))?;
        String::from_utf8(output.stdout)
            .map_err(|e| GenerateError::malformed(format!("{} produced non-UTF-8 output: {e}", self.bin)))
    }
}

fn parse(source: &str) -> Result<syn::File> {
    syn::parse_file(source).map_err(|e| GenerateError::malformed(format!("syntax error: {e}")))
}

/// Parse `source` and reject duplicate top-level definitions.
///
/// # Errors
///
/// [`GenerateError::MalformedSource`] naming the syntax error or the first
/// redefined item.
pub fn validate_source(source: &str) -> Result<syn::File> {
    let file = parse(source)?;
    let mut seen = HashSet::new();
    for ident in file.items.iter().filter_map(item_ident) {
        if !seen.insert(ident.to_string()) {
            return Err(GenerateError::malformed(format!(
                "the name `{ident}` is defined multiple times"
            )));
        }
    }
    debug!(items = file.items.len(), "validated generated source");
    Ok(file)
}

fn item_ident(item: &Item) -> Option<&syn::Ident> {
    match item {
        Item::Fn(f) => Some(&f.sig.ident),
        Item::Struct(s) => Some(&s.ident),
        Item::Enum(e) => Some(&e.ident),
        Item::Const(c) => Some(&c.ident),
        Item::Static(s) => Some(&s.ident),
        Item::Type(t) => Some(&t.ident),
        Item::Mod(m) => Some(&m.ident),
        Item::Trait(t) => Some(&t.ident),
        Item::Union(u) => Some(&u.ident),
        _ => None,
    }
}

/// Validate `source`, then format it with `formatter`.
///
/// # Errors
///
/// See [`validate_source`] and [`SourceFormatter::format`].
pub fn format_source(formatter: &dyn SourceFormatter, source: &str) -> Result<String> {
    validate_source(source)?;
    formatter.format(source)
}
