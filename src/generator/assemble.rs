use super::manifest::BenchCase;
use super::templates::{render_case, render_footer, render_header};
use crate::error::Result;

/// Build the unformatted source for `manifest`.
///
/// Header first, then one entry per manifest item in manifest order, then the
/// criterion registration. Duplicates are kept as-is.
///
/// # Errors
///
/// Only fails if a template cannot be rendered.
pub fn assemble(output_path: &str, manifest: &[&str]) -> Result<String> {
    let mut buf = render_header(output_path)?;
    let cases: Vec<BenchCase<'_>> = manifest.iter().map(|name| BenchCase::new(name)).collect();
    for case in &cases {
        buf.push('\n');
        buf.push_str(&render_case(case)?);
    }
    buf.push('\n');
    buf.push_str(&render_footer(&cases)?);
    buf.push('\n');
    Ok(buf)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_assemble_preserves_manifest_order() {
        let manifest = ["zeta.webp", "alpha.webp", "mid-1.webp"];
        let text = assemble("out.rs", &manifest).unwrap();
        let positions: Vec<usize> = ["fn BenchmarkDecode_zeta_", "fn BenchmarkDecode_alpha_", "fn BenchmarkDecode_mid_1_"]
            .iter()
            .map(|needle| text.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_assemble_starts_with_header_and_ends_with_registration() {
        let text = assemble("out.rs", &["tux.lossless.webp"]).unwrap();
        assert!(text.starts_with("//! "));
        let main = text.find("criterion_main!(benches);").unwrap();
        let last_fn = text.rfind("fn BenchmarkDecode_").unwrap();
        assert!(last_fn < main);
    }

    #[test]
    fn test_assemble_keeps_duplicates() {
        let text = assemble("out.rs", &["a.webp", "a.webp"]).unwrap();
        assert_eq!(text.matches("fn BenchmarkDecode_a_libwebp(").count(), 2);
    }
}
