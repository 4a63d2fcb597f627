use super::naming::sanitize;

/// Assets benchmarked by the generated file, in emission order.
///
/// Each name is resolved against `../testdata/` when the generated benchmarks
/// run. Editing this list is the only way to change the benchmark set.
pub const TEST_FILENAMES: &[&str] = &[
    "1_webp_a.webp",
    "1_webp_ll.webp",
    "2_webp_a.webp",
    "2_webp_ll.webp",
    "3_webp_a.webp",
    "3_webp_ll.webp",
    "4_webp_a.webp",
    "4_webp_ll.webp",
    "5_webp_a.webp",
    "5_webp_ll.webp",
    "blue-purple-pink-large.lossless.webp",
    "blue-purple-pink-large.no-filter.lossy.webp",
    "blue-purple-pink-large.normal-filter.lossy.webp",
    "blue-purple-pink-large.simple-filter.lossy.webp",
    "blue-purple-pink.lossless.webp",
    "blue-purple-pink.lossy.webp",
    "gopher-doc.1bpp.lossless.webp",
    "gopher-doc.2bpp.lossless.webp",
    "gopher-doc.4bpp.lossless.webp",
    "gopher-doc.8bpp.lossless.webp",
    "tux.lossless.webp",
    "video-001.lossy.webp",
    "video-001.webp",
    "yellow_rose.lossless.webp",
    "yellow_rose.lossy-with-alpha.webp",
    "yellow_rose.lossy.webp",
];

/// Operation measured by every generated case.
pub const OPERATION: &str = "Decode";

/// Decoder implementations compared per asset, in the order the entry
/// template emits them.
pub const IMPLEMENTATIONS: [&str; 3] = ["libwebp", "libwebp_cbuf", "image_webp"];

/// One manifest entry, prepared for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchCase<'a> {
    /// Asset name exactly as listed in the manifest
    pub filename: &'a str,
    /// `sanitize(filename)`
    pub identifier: String,
}

impl<'a> BenchCase<'a> {
    #[must_use]
    pub fn new(filename: &'a str) -> Self {
        Self {
            filename,
            identifier: sanitize(filename),
        }
    }

    /// Names of the benchmark functions generated for this asset.
    #[must_use]
    pub fn function_names(&self) -> Vec<String> {
        IMPLEMENTATIONS
            .iter()
            .map(|tag| bench_function_name(&self.identifier, tag))
            .collect()
    }
}

/// `Benchmark<Operation>_<identifier>_<tag>`
#[must_use]
pub fn bench_function_name(identifier: &str, tag: &str) -> String {
    format!("Benchmark{OPERATION}_{identifier}_{tag}")
}
