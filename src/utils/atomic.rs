use crate::error::{PinError, Result};
use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `contents` to a sibling temp file, then renames it over `path`.
/// Readers see either the old or the new file, never a partial one.
pub fn atomic_write(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp =
        NamedTempFile::new_in(parent).map_err(|e| io_error("stage write for", path, e))?;

    if crate::utils::verbose_enabled() {
        eprintln!("[VERBOSE] Staging write in {}", temp.path().display());
    }

    temp.write_all(contents.as_bytes())
        .map_err(|e| io_error("write", path, e))?;

    // Temp files are created 0600; keep whatever mode the target had.
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| io_error("copy permissions to", path, e))?;
    }

    temp.as_file().sync_all().map_err(|e| io_error("sync", path, e))?;
    temp.persist(path).map_err(|e| io_error("replace", path, e.error))?;

    Ok(())
}

fn io_error(action: &str, path: &Path, e: impl Display) -> PinError {
    PinError::Io(format!("Failed to {} '{}': {}", action, path.display(), e))
}
