use crate::error::Result;
use crate::paths;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from corrupting generated config files.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Append `block` to `root/.gitignore` unless `entry` is already present as
/// an exact line. Returns `true` if the file was modified.
///
/// Exact line match — avoids false positives from substring checks. When
/// appending to a non-empty file, a blank line separates the block from the
/// prior rules.
pub fn ensure_gitignore_block(root: &Path, entry: &str, block: &str) -> Result<bool> {
    let gitignore = root.join(".gitignore");
    let existing = if gitignore.exists() {
        std::fs::read_to_string(&gitignore)?
    } else {
        String::new()
    };
    if existing.lines().any(|l| l == entry) {
        return Ok(false);
    }
    let sep = if existing.is_empty() {
        ""
    } else if existing.ends_with('\n') {
        "\n"
    } else {
        "\n\n"
    };
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&gitignore)?;
    write!(f, "{sep}{block}")?;
    Ok(true)
}

/// Back up `path` to a `.backup` sibling if it exists. Single generation:
/// a prior backup at that path is overwritten, not chained.
/// Returns the backup path if one was written.
pub fn backup_file(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    let backup = paths::backup_path(path);
    std::fs::copy(path, &backup)?;
    Ok(Some(backup))
}
