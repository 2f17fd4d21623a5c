use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::manifest::{load_manifest, write_manifest};
use crate::profile::PublishProfile;

#[derive(Parser)]
#[command(name = "pkgprep")]
#[command(about = "A tiny, predictable staging tool that rewrites a package manifest for publish targets")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stage the manifest for the GitHub package registry
    Github {
        /// Path to package.json
        #[arg(long, default_value = "package.json")]
        manifest_path: PathBuf,

        /// Override the output directory (defaults to dist/)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Stage the manifest for the Zig package source layout
    Zig {
        /// Path to package.json
        #[arg(long, default_value = "package.json")]
        manifest_path: PathBuf,

        /// Override the output directory (defaults to src/)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Github {
            manifest_path,
            out_dir,
        } => stage_command(PublishProfile::github(), manifest_path, out_dir),
        Commands::Zig {
            manifest_path,
            out_dir,
        } => stage_command(PublishProfile::zig(), manifest_path, out_dir),
    }
}

fn stage_command(
    profile: PublishProfile,
    manifest_path: PathBuf,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let manifest = load_manifest(&manifest_path).context("Failed to load package manifest")?;

    let staged = profile.apply(&manifest);

    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(profile.out_dir));
    write_manifest(&staged, &out_dir).context("Failed to write staged manifest")?;

    println!("{}", profile.status_message.blue());

    Ok(())
}
