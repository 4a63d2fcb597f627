//! # webpbench
//!
//! **webpbench** generates a criterion benchmark target that pits several WebP
//! decoders against each other on a shared corpus of test assets.
//!
//! ## Overview
//!
//! The asset list is compiled in ([`generator::TEST_FILENAMES`]). For every
//! asset the generator emits three benchmark functions, one per decoder:
//!
//! | tag            | decoder                                             |
//! |----------------|-----------------------------------------------------|
//! | `libwebp`      | `webp::Decoder` over a `Vec<u8>`                    |
//! | `libwebp_cbuf` | `libwebp_sys::WebPDecodeRGBA` over libwebp-owned memory |
//! | `image_webp`   | `image_webp::WebPDecoder`                           |
//!
//! This crate never decodes anything itself; the generated file depends on
//! `criterion`, `webp`, `libwebp-sys` and `image-webp` and reads assets from
//! `../testdata/` when it runs.
//!
//! ## Modules
//!
//! - **[`generator`]** - Naming, templates, assembly, validation/formatting, atomic write
//! - **[`config`]** - Run configuration built once at startup
//! - **[`cli`]** - `webpbench-gen` argument parsing
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`error`]** - [`GenerateError`]
//!
//! ### Generation Flow
//!
//! ```text
//! Start → ParseConfig → Assemble → Format → Write → Done
//!                                    │        │
//!                                    └────────┴──→ Failed
//! ```
//!
//! A failure at `Format` (malformed source) or `Write` (I/O) ends the run with
//! no output written and a non-zero exit status.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run --bin webpbench-gen -- --output benches/x_decode_benchmark.rs
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;

pub use config::{FormatterKind, GenerationConfig};
pub use error::GenerateError;
pub use generator::{generate, sanitize, GenerationReport};
