//! # Generator Module
//!
//! Produces a criterion benchmark file that compares WebP decoders on every
//! asset of a fixed manifest.
//!
//! ## Architecture
//!
//! ```text
//! manifest → naming::sanitize → templates (askama) → assemble → format → write
//! ```
//!
//! 1. **Naming** - Each asset filename becomes a bare identifier
//! 2. **Templates** - The header is rendered once, the entry template once per
//!    asset (three benchmark functions), the criterion registration once
//! 3. **Assemble** - Fragments are concatenated in manifest order
//! 4. **Format** - The text is parsed with `syn`, checked for duplicate
//!    definitions, then formatted (`prettyplease` or `rustfmt`)
//! 5. **Write** - The result atomically replaces the output file
//!
//! Any failure in steps 4 or 5 aborts the run without touching the output.
//!
//! ## Generated Structure
//!
//! ```text
//! //! banner + DO NOT EDIT marker
//! use ...;
//! fn load_data(..)  / fn load_cdata(..)      // read ../testdata/<asset>
//! fn BenchmarkDecode_<id>_libwebp(c)         // per asset
//! fn BenchmarkDecode_<id>_libwebp_cbuf(c)
//! fn BenchmarkDecode_<id>_image_webp(c)
//! criterion_group!(benches, ...);
//! criterion_main!(benches);
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use webpbench::config::GenerationConfig;
//! use webpbench::generator::{generate, TEST_FILENAMES};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GenerationConfig::new("benches/x_decode_benchmark.rs");
//! let report = generate(&config, TEST_FILENAMES)?;
//! println!("{} functions", report.functions);
//! # Ok(())
//! # }
//! ```

mod assemble;
mod format;
mod generate;
mod manifest;
mod naming;
mod templates;
mod write;
#[cfg(test)]
mod tests;

pub use assemble::assemble;
pub use format::{format_source, validate_source, PrettyPlease, Rustfmt, SourceFormatter};
pub use generate::{generate, GenerationReport};
pub use manifest::{bench_function_name, BenchCase, IMPLEMENTATIONS, OPERATION, TEST_FILENAMES};
pub use naming::sanitize;
pub use templates::{render_entry, render_footer, render_header};
pub use write::{write_output, OUTPUT_MODE};
