use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SDP_DIR: &str = ".sdp";
pub const LANGUAGE_FILE: &str = ".sdp/config/language.yml";
pub const SPECS_DIR: &str = ".sdp/specs";
pub const OUT_DIR: &str = ".sdp/out";

pub const GUIDANCE_MD: &str = "CLAUDE.md";
pub const BACKUP_SUFFIX: &str = ".backup";

/// Version-control metadata directory, always excluded from template copies.
pub const GIT_DIR: &str = ".git";

pub const GITIGNORE_ENTRY: &str = ".sdp/";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn sdp_dir(root: &Path) -> PathBuf {
    root.join(SDP_DIR)
}

pub fn language_file_path(root: &Path) -> PathBuf {
    root.join(LANGUAGE_FILE)
}

pub fn guidance_md_path(root: &Path) -> PathBuf {
    root.join(GUIDANCE_MD)
}

/// Sibling backup path: `CLAUDE.md` → `CLAUDE.md.backup`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
