//! Atomic JSON persistence
//!
//! Documents are encoded as two-space-indented JSON with a trailing newline,
//! written to a temporary file in the destination directory, and renamed into
//! place. Re-saving an unchanged value produces byte-identical output.

use crate::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Persists one serializable value at `path`, creating parent directories
///
/// The temporary file lives in the destination directory so the final rename
/// never crosses a filesystem boundary. An existing file at `path` is
/// replaced in one step.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(body.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
