use crate::types::{GenError, GenResult};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Create `dir` and any missing parents. Existing directories are fine.
pub fn ensure_dir(dir: &Path) -> GenResult<()> {
    fs::create_dir_all(dir)
        .map_err(|e| GenError::io(format!("create directory {}", dir.display()), e))
}

/// Replace `path` with `contents` without ever exposing a half-written file.
///
/// The bytes go to a temp file in the same directory, which is then renamed
/// over the target. Readers see either the old file or the new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> GenResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| GenError::io(format!("create temp file in {}", dir.display()), e))?;
    temp.write_all(contents)
        .map_err(|e| GenError::io(format!("write temp file for {}", path.display()), e))?;
    temp.persist(path)
        .map_err(|e| GenError::io(format!("replace {}", path.display()), e.error))?;
    Ok(())
}
