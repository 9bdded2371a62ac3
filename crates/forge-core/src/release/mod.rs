//! Release version bumps
//!
//! This module provides:
//! - Strict `major.minor.patch` parsing and bump arithmetic
//! - Changelog section formatting and insertion
//! - Commit subject gathering from git history
//! - The bump workflow across VERSION, package.json and CHANGELOG.md

pub mod changelog;
pub mod git;
pub mod version;

use crate::templates::manifest::{set_manifest_version, MANIFEST_FILE};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub use version::{BumpKind, Version};

/// The three files a release bump rewrites
#[derive(Debug, Clone)]
pub struct ReleaseFiles {
    pub root: PathBuf,
    pub version_file: PathBuf,
    pub manifest: PathBuf,
    pub changelog: PathBuf,
}

impl ReleaseFiles {
    /// Standard layout: `VERSION`, `package.json` and `CHANGELOG.md` under `root`
    pub fn in_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            version_file: root.join("VERSION"),
            manifest: root.join(MANIFEST_FILE),
            changelog: root.join("CHANGELOG.md"),
            root,
        }
    }
}

/// Versions before and after a bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub previous: Version,
    pub next: Version,
}

/// Current local date, used to stamp changelog sections
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Read and validate the version recorded in the version file
pub async fn read_current_version(path: &Path) -> Result<Version> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content.trim().parse()?)
}

pub async fn write_version_file(path: &Path, version: &Version) -> Result<()> {
    fs::write(path, format!("{}\n", version))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Insert a dated section for `version` into the changelog at `path`
pub async fn update_changelog(
    path: &Path,
    version: &Version,
    date: NaiveDate,
    commits: &str,
) -> Result<()> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let section = changelog::release_section(&version.to_string(), date, commits);
    fs::write(path, changelog::insert_section(&content, &section))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Read the current version and compute the bumped one without writing anything
pub async fn plan_bump(files: &ReleaseFiles, kind: BumpKind) -> Result<BumpOutcome> {
    let previous = read_current_version(&files.version_file).await?;
    let next = previous.bump(kind)?;
    debug!(%previous, %next, %kind, "planned version bump");
    Ok(BumpOutcome { previous, next })
}

/// Persist a planned bump to all three files.
///
/// The writes are sequential and not transactional; `on_updated` is called
/// after each file is written.
pub async fn bump_release(
    files: &ReleaseFiles,
    outcome: &BumpOutcome,
    date: NaiveDate,
    mut on_updated: impl FnMut(&Path, &Version),
) -> Result<()> {
    let next = &outcome.next;

    write_version_file(&files.version_file, next).await?;
    on_updated(&files.version_file, next);

    set_manifest_version(&files.manifest, &next.to_string()).await?;
    on_updated(&files.manifest, next);

    let commits = git::commits_since_release(&files.root, &outcome.previous.to_string()).await;
    update_changelog(&files.changelog, next, date, &commits).await?;
    on_updated(&files.changelog, next);

    Ok(())
}
