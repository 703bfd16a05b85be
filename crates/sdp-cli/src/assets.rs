use anyhow::Context;
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

/// Template files shipped inside the binary. The directory layout mirrors
/// what `sdp init` provisions: `claude/` and `codex/` hold the two
/// integration profiles, `sdp/` the shared config/template tree, and
/// `CLAUDE.md` the project guidance document.
#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

/// Materialize the embedded template tree into `dir` so the provisioning
/// engine can copy it like any other on-disk source.
pub fn stage(dir: &Path) -> anyhow::Result<()> {
    let mut count = 0usize;
    for name in Templates::iter() {
        let file = Templates::get(&name)
            .with_context(|| format!("embedded template missing: {name}"))?;
        let dest = dir.join(name.as_ref());
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, file.data.as_ref())
            .with_context(|| format!("failed to stage template {name}"))?;
        count += 1;
    }
    tracing::debug!(count, dir = %dir.display(), "staged packaged templates");
    Ok(())
}
