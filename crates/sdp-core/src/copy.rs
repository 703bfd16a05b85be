use crate::error::Result;
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};

/// Copy `source` to `destination`, overwriting existing files.
///
/// A regular file is duplicated byte-for-byte (create-or-truncate). A
/// directory is walked with an explicit worklist of pending directory pairs,
/// so arbitrarily deep trees cannot exhaust the call stack. Children are
/// taken in filesystem-native order; any child named `.git` is skipped on
/// the source side. Destination directories are created as needed and never
/// pre-removed.
///
/// Not transactional: a failure partway through leaves the files copied so
/// far in place. A nonexistent source propagates the underlying io error.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<()> {
    let meta = fs::metadata(source)?;
    if !meta.is_dir() {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, destination)?;
        return Ok(());
    }

    let mut pending: Vec<(PathBuf, PathBuf)> =
        vec![(source.to_path_buf(), destination.to_path_buf())];

    while let Some((src, dest)) = pending.pop() {
        fs::create_dir_all(&dest)?;
        for entry in fs::read_dir(&src)? {
            let entry = entry?;
            let name = entry.file_name();
            if name == paths::GIT_DIR {
                continue;
            }
            let child_dest = dest.join(&name);
            if entry.file_type()?.is_dir() {
                pending.push((entry.path(), child_dest));
            } else {
                fs::copy(entry.path(), &child_dest)?;
            }
        }
    }

    Ok(())
}
