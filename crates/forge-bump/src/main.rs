//! Forge release tool - bump the version in VERSION, package.json and CHANGELOG.md

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use forge_core::release::{bump_release, plan_bump, today, BumpKind, ReleaseFiles};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Checkout root holding the tool's own VERSION, package.json and CHANGELOG.md
const RELEASE_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../..");

const EXAMPLES: &str = "\
Examples:
  forge-bump          # bump patch (1.0.0 -> 1.0.1)
  forge-bump patch    # bump patch (1.0.0 -> 1.0.1)
  forge-bump minor    # bump minor (1.0.0 -> 1.1.0)
  forge-bump major    # bump major (1.0.0 -> 2.0.0)";

#[derive(Parser, Debug)]
#[command(name = "forge-bump")]
#[command(about = "Bump the release version across VERSION, package.json and CHANGELOG.md")]
#[command(version, after_help = EXAMPLES)]
pub struct Args {
    /// Version component to increment
    #[arg(value_enum, default_value_t = BumpKind::Patch)]
    pub kind: BumpKind,

    /// Directory containing VERSION, package.json and CHANGELOG.md
    #[arg(long, default_value = RELEASE_ROOT)]
    pub root: PathBuf,
}

/// Help and version requests exit 0; invalid bump kinds and other usage errors exit 1
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|err| {
        let code = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        let _ = err.print();
        std::process::exit(code);
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();

    if let Err(e) = run(args).await {
        eprintln!("{} {:#}", "Version bump failed:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let files = ReleaseFiles::in_root(&args.root);
    let outcome = plan_bump(&files, args.kind).await?;

    println!(
        "{} {} -> {}",
        "Bumping version:".green().bold(),
        outcome.previous,
        outcome.next
    );
    println!();

    bump_release(&files, &outcome, today(), |path, version| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("  {} Updated {}: {}", "✔".green(), name, version);
    })
    .await?;

    let next = outcome.next;
    println!();
    println!("Next steps:");
    println!("  1. Edit CHANGELOG.md and describe the changes in this release");
    println!(
        "  2. Commit: git add . && git commit -m \"chore: bump version to v{}\"",
        next
    );
    println!("  3. Tag: git tag v{}", next);
    println!("  4. Push: git push && git push --tags");
    println!("  5. Publish: pnpm publish");

    Ok(())
}
