mod assets;
mod cmd;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sdp",
    about = "Spec-Driven Planning — provision the SDP command set into a project",
    disable_version_flag = true
)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue)]
    version: bool,

    /// Project directory to provision (default: current directory)
    #[arg(long, global = true, env = "SDP_ROOT")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision the SDP command set and configuration into the project
    Init {
        /// Output language for generated planning documents (en or ja)
        #[arg(
            long,
            value_name = "CODE",
            num_args = 0..=1,
            default_missing_value = sdp_core::lang::Language::DEFAULT_CODE
        )]
        lang: Option<String>,

        /// Target Codex (.codex/prompts) instead of Claude Code (.claude/commands)
        #[arg(long)]
        codex: bool,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // An unknown subcommand exits 1; other usage errors keep
            // clap's standard exit code.
            if e.kind() == ErrorKind::InvalidSubcommand {
                let _ = e.print();
                std::process::exit(1);
            }
            e.exit();
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    if cli.version {
        println!("spec-driven-planning version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let root = cli
        .root
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let result = match cli.command {
        Some(Commands::Init { lang, codex }) => cmd::init::run(&root, lang.as_deref(), codex),
        None => {
            // Bare invocation shows usage, like `--help`.
            Cli::command().print_help().map_err(Into::into)
        }
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
