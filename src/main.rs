//! krites - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use git2::Repository;
use tracing_subscriber::EnvFilter;

use krites::analyzer::{AnalyzeContext, PluginConfig, analyze_commits};
use krites::config::{FileStyleProvider, StaticStyleProvider, StyleConfig};
use krites::git::{collect_commits, resolve_range};
use krites::release::ReleaseType;

/// Determine the release type implied by commits since the last release.
#[derive(Parser, Debug)]
#[command(name = "krites")]
#[command(about = "Determine the release type implied by commits since the last release")]
#[command(version)]
struct Cli {
    /// Path to the style configuration file
    #[arg(short = 'c', long, default_value = ".changelogrc")]
    config: PathBuf,

    /// Start of commit range (tag, commit hash, or branch); defaults to the
    /// latest release tag
    #[arg(long)]
    from: Option<String>,

    /// End of commit range
    #[arg(long, default_value = "HEAD")]
    to: String,

    /// Path to the git repository
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Only print the release type (or nothing when no release is warranted)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let repo = Repository::open(&cli.repo)
        .context("Not a git repository. Run krites from within a git repository.")?;

    let range = resolve_range(&repo, cli.from.as_deref(), Some(&cli.to))
        .context("Failed to resolve commit range")?;

    if !cli.quiet {
        println!(
            "Analyzing commits from {} to {}...",
            range.from_ref, range.to_ref
        );
    }

    let commits =
        collect_commits(&repo, range.from, range.to).context("Failed to collect commits")?;

    if commits.is_empty() {
        if !cli.quiet {
            println!("No commits found since {}. No release.", range.from_ref);
        }
        return Ok(());
    }

    if !cli.quiet {
        println!("Found {} commits", commits.len());
    }

    let context = AnalyzeContext { commits };
    let plugin_config = PluginConfig::default();

    let release_type: Option<ReleaseType> = if cli.config.exists() {
        analyze_commits(
            &plugin_config,
            &context,
            &FileStyleProvider::new(&cli.config),
        )
        .await
    } else {
        analyze_commits(
            &plugin_config,
            &context,
            &StaticStyleProvider::new(StyleConfig::conventional()),
        )
        .await
    }
    .context("Commit analysis failed")?;

    match release_type {
        Some(release_type) if cli.quiet => println!("{}", release_type),
        Some(release_type) => println!("Release type: {}", release_type),
        None if cli.quiet => {}
        None => println!("No release warranted"),
    }

    Ok(())
}
