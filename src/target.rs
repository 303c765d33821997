//! Reading and rewriting the target HTML document.

use crate::error::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io("read", path, e))
}

/// Replace the file at `path` with `contents`.
///
/// The new contents go to a temporary file in the same directory, which is
/// then renamed over the target. Readers see either the old or the new file.
/// The target's permissions are carried over.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| Error::io("create temporary file in", dir, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| Error::io("write temporary file for", path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| Error::io("flush temporary file for", path, e))?;

    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::io("set permissions on temporary file for", path, e))?;
    }

    tmp.persist(path)
        .map_err(|e| Error::io("replace", path, e.error))?;
    Ok(())
}
