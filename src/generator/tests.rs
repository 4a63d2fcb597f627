#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::{FormatterKind, GenerationConfig};
use std::fs;
use std::path::Path;

fn config_in(dir: &Path) -> GenerationConfig {
    GenerationConfig::new(dir.join("x_decode_benchmark.rs")).with_formatter(FormatterKind::PrettyPlease)
}

#[test]
fn test_full_manifest_assembles_to_valid_source() {
    let text = assemble("x_decode_benchmark.rs", TEST_FILENAMES).unwrap();
    let file = validate_source(&text).unwrap();
    let fns = file
        .items
        .iter()
        .filter(|item| matches!(item, syn::Item::Fn(f) if f.sig.ident.to_string().starts_with("BenchmarkDecode_")))
        .count();
    assert_eq!(fns, TEST_FILENAMES.len() * IMPLEMENTATIONS.len());
}

#[test]
fn test_every_registered_function_is_defined() {
    let cases: Vec<_> = TEST_FILENAMES.iter().map(|n| BenchCase::new(n)).collect();
    let text = assemble("out.rs", TEST_FILENAMES).unwrap();
    for name in cases.iter().flat_map(BenchCase::function_names) {
        assert!(text.contains(&format!("fn {name}(c: &mut Criterion)")), "{name} not defined");
    }
}

#[test]
fn test_single_entry_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let report = generate(&config, &["tux.lossless.webp"]).unwrap();
    assert_eq!(report.cases, 1);
    assert_eq!(report.functions, 3);

    let out = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(report.bytes, out.len());
    assert_eq!(out.matches("fn BenchmarkDecode_").count(), 3);
    for tag in IMPLEMENTATIONS {
        assert!(out.contains(&format!("fn BenchmarkDecode_tux_lossless_{tag}(")), "{tag}");
    }
    assert_eq!(out.matches("\"tux.lossless.webp\"").count(), 3);
    assert!(out.contains("DO NOT EDIT"));
}

#[test]
fn test_generation_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    generate(&config, TEST_FILENAMES).unwrap();
    let first = fs::read(&config.output_path).unwrap();
    generate(&config, TEST_FILENAMES).unwrap();
    let second = fs::read(&config.output_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_formatted_output_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    generate(&config, TEST_FILENAMES).unwrap();
    let out = fs::read_to_string(&config.output_path).unwrap();
    let mut last = 0;
    for name in TEST_FILENAMES {
        let needle = format!("fn BenchmarkDecode_{}_libwebp(", sanitize(name));
        let pos = out.find(&needle).unwrap();
        assert!(pos >= last, "{name} out of order");
        last = pos;
    }
}

#[test]
fn test_colliding_names_fail_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let err = generate(&config, &["a.b.webp", "a-b.webp"]).unwrap_err();
    assert!(err.is_malformed(), "{err}");
    assert!(err.to_string().contains("BenchmarkDecode_a_b_libwebp"), "{err}");
    assert!(!config.output_path.exists());
}

#[test]
fn test_failed_run_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.output_path, "previous").unwrap();
    assert!(generate(&config, &["dup.webp", "dup.webp"]).is_err());
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "previous");
}

#[test]
fn test_unbalanced_fragment_is_malformed() {
    // A quote in the asset name ends the string literal early.
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let err = generate(&config, &["bad\".webp"]).unwrap_err();
    assert!(err.is_malformed(), "{err}");
}

#[test]
fn test_header_quotes_configured_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    generate(&config, &["tux.lossless.webp"]).unwrap();
    let out = fs::read_to_string(&config.output_path).unwrap();
    assert!(out.contains(&format!("webpbench-gen --output {}", config.output_display())));
}
