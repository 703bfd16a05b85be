use std::path::{Path, PathBuf};

/// Host environment consuming the generated command set. The two profiles
/// are mutually exclusive; each has its own directory convention and
/// command-invocation syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegrationTarget {
    #[default]
    ClaudeCode,
    Codex,
}

impl IntegrationTarget {
    /// Project-relative command/prompt directory this target populates.
    pub fn command_dir(&self) -> &'static str {
        match self {
            IntegrationTarget::ClaudeCode => ".claude",
            IntegrationTarget::Codex => ".codex",
        }
    }

    /// Packaged template subdirectory this target is provisioned from.
    pub fn template_subdir(&self) -> &'static str {
        match self {
            IntegrationTarget::ClaudeCode => "claude",
            IntegrationTarget::Codex => "codex",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntegrationTarget::ClaudeCode => "Claude Code",
            IntegrationTarget::Codex => "Codex",
        }
    }
}

/// Everything one provisioning run copies, writes, or creates. Built once
/// from the invocation options and immutable thereafter. Pure path algebra,
/// no filesystem access.
#[derive(Debug, Clone)]
pub struct ProvisioningPlan {
    /// Integration-specific command/prompt directory (guarded by confirmation).
    pub command_src: PathBuf,
    pub command_dest: PathBuf,
    /// Shared `.sdp/` config/template directory (always overwritten in place).
    pub shared_src: PathBuf,
    pub shared_dest: PathBuf,
    /// Generated language configuration artifact.
    pub language_file: PathBuf,
    /// Empty working directories for user-generated artifacts.
    pub aux_dirs: Vec<PathBuf>,
    /// Guidance document copied to the project root (with `.backup`).
    pub guidance_src: PathBuf,
    pub guidance_dest: PathBuf,
}

impl ProvisioningPlan {
    pub fn resolve(templates: &Path, root: &Path, target: IntegrationTarget) -> Self {
        ProvisioningPlan {
            command_src: templates.join(target.template_subdir()),
            command_dest: root.join(target.command_dir()),
            shared_src: templates.join("sdp"),
            shared_dest: crate::paths::sdp_dir(root),
            language_file: crate::paths::language_file_path(root),
            aux_dirs: vec![
                root.join(crate::paths::SPECS_DIR),
                root.join(crate::paths::OUT_DIR),
            ],
            guidance_src: templates.join(crate::paths::GUIDANCE_MD),
            guidance_dest: crate::paths::guidance_md_path(root),
        }
    }
}
