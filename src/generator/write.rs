use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{GenerateError, Result};

/// Mode applied to the generated file.
pub const OUTPUT_MODE: u32 = 0o644;

/// Replace `path` with `contents` atomically.
///
/// The bytes go to a temporary file in the destination directory, which is
/// synced and then renamed over `path`. Readers see either the old file or
/// the complete new one. The destination directory must already exist.
///
/// # Errors
///
/// [`GenerateError::Io`] if the temporary file cannot be created, written,
/// synced or renamed. The temporary file is removed and any existing file at
/// `path` is left as it was.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| GenerateError::io("failed to create temp file in", dir, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| GenerateError::io("failed to write temp file for", path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| GenerateError::io("failed to sync temp file for", path, e))?;
    set_mode(&tmp, path)?;

    tmp.persist(path)
        .map_err(|e| GenerateError::io("failed to replace", path, e.error))?;
    debug!(path = %path.display(), bytes = contents.len(), "persisted output");
    Ok(())
}

#[cfg(unix)]
fn set_mode(tmp: &NamedTempFile, path: &Path) -> Result<()> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    tmp.as_file()
        .set_permissions(Permissions::from_mode(OUTPUT_MODE))
        .map_err(|e| GenerateError::io("failed to set permissions for", path, e))
}

#[cfg(not(unix))]
fn set_mode(_tmp: &NamedTempFile, _path: &Path) -> Result<()> {
    Ok(())
}
