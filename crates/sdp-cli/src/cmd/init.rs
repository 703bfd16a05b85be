use crate::assets;
use anyhow::Context;
use sdp_core::{
    lang::Language,
    plan::IntegrationTarget,
    prompt::StdinConfirm,
    provision::{self, InitOptions, Outcome},
};
use std::path::Path;

/// Version of the sdp binary embedded at compile time.
pub const SDP_BINARY_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run(root: &Path, lang: Option<&str>, codex: bool) -> anyhow::Result<()> {
    // Parse options before any filesystem mutation: an unknown language
    // code must fail with zero side effects.
    let language: Language = lang.unwrap_or(Language::DEFAULT_CODE).parse()?;
    let target = if codex {
        IntegrationTarget::Codex
    } else {
        IntegrationTarget::ClaudeCode
    };
    let options = InitOptions { language, target };

    println!("Spec-Driven Planning (SDP) setup v{SDP_BINARY_VERSION}");
    println!("Provisioning {} commands in: {}\n", target.label(), root.display());

    let staged = tempfile::tempdir().context("failed to create template staging directory")?;
    assets::stage(staged.path()).context("failed to stage packaged templates")?;

    let outcome = provision::provision(root, staged.path(), &options, &mut StdinConfirm)
        .context("provisioning failed")?;

    match outcome {
        Outcome::Declined => {
            println!("Setup cancelled. No changes were made.");
        }
        Outcome::Completed => print_summary(&options),
    }

    Ok(())
}

fn print_summary(options: &InitOptions) {
    println!("\nSetup complete.");
    println!("\nWhat was created:");
    match options.target {
        IntegrationTarget::ClaudeCode => {
            println!("  .claude/commands/sdp/  - custom slash commands");
        }
        IntegrationTarget::Codex => {
            println!("  .codex/prompts/        - custom prompts");
        }
    }
    println!("  .sdp/config/           - configuration files (language: {})", options.language);
    println!("  .sdp/templates/        - document templates");
    println!("  .sdp/specs/            - requirements directory");
    println!("  .sdp/out/              - output directory (gitignored)");
    println!("  CLAUDE.md              - agent guidance");

    println!("\nNext steps:");
    match options.target {
        IntegrationTarget::ClaudeCode => {
            println!("  1. Review and customize .sdp/config/*.yml");
            println!("  2. Run /steering in Claude Code to initialize project context");
            println!("  3. Start with /requirement \"Your requirement description\"");
        }
        IntegrationTarget::Codex => {
            println!("  1. Review and customize .sdp/config/*.yml");
            println!("  2. Run the sdp-steering prompt in Codex to initialize project context");
            println!("  3. Start with the sdp-requirement prompt");
        }
    }
}
