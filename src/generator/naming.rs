/// Derive a bare identifier from an asset filename.
///
/// Keeps only the final path segment, drops the last extension, then maps
/// every `.` and `-` to `_`. Anything else passes through untouched, so the
/// caller is responsible for names that would start with a digit or hit a
/// keyword once embedded in a larger identifier.
///
/// ```
/// use webpbench::generator::sanitize;
///
/// assert_eq!(sanitize("video-001.lossy.webp"), "video_001_lossy");
/// assert_eq!(sanitize("testdata/tux.lossless.webp"), "tux_lossless");
/// ```
#[must_use]
pub fn sanitize(name: &str) -> String {
    let base = base_name(name);
    let stem = match base.rfind('.') {
        Some(idx) => &base[..idx],
        None => base,
    };
    stem.chars()
        .map(|c| match c {
            '.' | '-' => '_',
            other => other,
        })
        .collect()
}

/// Final `/`-separated segment, ignoring trailing separators.
fn base_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
