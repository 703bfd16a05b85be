use crate::copy::copy_tree;
use crate::error::Result;
use crate::io;
use crate::lang::{Language, LanguageConfig};
use crate::paths;
use crate::plan::{IntegrationTarget, ProvisioningPlan};
use crate::prompt::Confirm;
use std::path::Path;

/// Options for one provisioning run, parsed once from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    pub language: Language,
    pub target: IntegrationTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user refused the overwrite prompt. Not an error: the run ends
    /// cleanly with zero side effects.
    Declined,
}

/// Run the full provisioning sequence against `root`, copying from the
/// staged template tree at `templates`.
///
/// Each step is fatal-on-error: the remaining steps are abandoned and the
/// error surfaces to the caller. There is no rollback of completed steps.
/// Only the integration-specific command directory is guarded by the
/// confirmation prompt; the shared `.sdp/` tree and the generated language
/// file are overwritten on every run.
pub fn provision(
    root: &Path,
    templates: &Path,
    options: &InitOptions,
    confirm: &mut dyn Confirm,
) -> Result<Outcome> {
    let plan = ProvisioningPlan::resolve(templates, root, options.target);

    // Conflict guard: suspend for a yes/no answer before destroying an
    // existing command directory.
    if plan.command_dest.exists() {
        let prompt = format!(
            "{} already exists in the target directory. Overwrite it? (y/N): ",
            options.target.command_dir()
        );
        if !confirm.confirm(&prompt)? {
            return Ok(Outcome::Declined);
        }
        println!("  removing: {}/", options.target.command_dir());
        std::fs::remove_dir_all(&plan.command_dest)?;
    }

    copy_tree(&plan.command_src, &plan.command_dest)?;
    println!("  created: {}/", options.target.command_dir());

    copy_tree(&plan.shared_src, &plan.shared_dest)?;
    println!("  created: {}/", paths::SDP_DIR);

    LanguageConfig {
        language: options.language,
    }
    .save(&plan.language_file)?;
    println!("  created: {}", paths::LANGUAGE_FILE);

    for dir in &plan.aux_dirs {
        io::ensure_dir(dir)?;
    }
    println!("  created: {}/", paths::SPECS_DIR);
    println!("  created: {}/", paths::OUT_DIR);

    if let Some(backup) = io::backup_file(&plan.guidance_dest)? {
        println!(
            "  backup:  {} -> {}",
            paths::GUIDANCE_MD,
            backup.file_name().unwrap_or_default().to_string_lossy()
        );
    }
    copy_tree(&plan.guidance_src, &plan.guidance_dest)?;
    println!("  created: {}", paths::GUIDANCE_MD);

    let gitignore_block = format!("# Spec-Driven Planning outputs\n{}\n", paths::GITIGNORE_ENTRY);
    if io::ensure_gitignore_block(root, paths::GITIGNORE_ENTRY, &gitignore_block)? {
        println!("  updated: .gitignore");
    }

    Ok(Outcome::Completed)
}
