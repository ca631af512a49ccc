//! RG-008: Output files - parent directory creation and writes.

use std::io::ErrorKind;
use std::path::Path;

/// Create the parent directory of `path` if it has one.
///
/// Another process creating the same directory concurrently is fine:
/// `AlreadyExists` is ignored, any other error is returned.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }
    match std::fs::create_dir_all(parent) {
        Ok(()) => {
            tracing::debug!(dir = %parent.display(), "created output directory");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(format!("cannot create dir {}: {}", parent.display(), e)),
    }
}

/// Write `contents` to `path`, creating parent directories first.
pub fn write_output(path: &Path, contents: &str) -> Result<(), String> {
    ensure_parent_dir(path)?;
    std::fs::write(path, contents)
        .map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
