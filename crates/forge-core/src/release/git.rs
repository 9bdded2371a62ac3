//! Commit subjects for changelog sections
//!
//! Shells out to `git`. Every failure degrades to an empty commit list so a
//! missing repository or tag never blocks a version bump.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

const SUBJECT_FORMAT: &str = "--pretty=format:- %s";

/// Run git in `repo` and return trimmed stdout, or `None` on any failure
async fn git(repo: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        debug!(?args, status = ?output.status.code(), "git command failed");
        return None;
    }

    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

/// Subjects (`- <subject>` per line) of commits since the previous release.
///
/// Tries, in order: commits since tag `v<current_version>`, commits since the
/// most recent tag, and finally the latest commit alone.
pub async fn commits_since_release(repo: &Path, current_version: &str) -> String {
    let release_tag = format!("v{}", current_version);

    if git(repo, &["rev-parse", "--verify", "--quiet", &release_tag])
        .await
        .is_some()
    {
        let range = format!("{}..HEAD", release_tag);
        return git(repo, &["log", &range, SUBJECT_FORMAT])
            .await
            .unwrap_or_default();
    }
    debug!(tag = %release_tag, "release tag not found");

    if let Some(latest_tag) = git(repo, &["describe", "--tags", "--abbrev=0"])
        .await
        .filter(|t| !t.is_empty())
    {
        let range = format!("{}..HEAD", latest_tag);
        return git(repo, &["log", &range, SUBJECT_FORMAT])
            .await
            .unwrap_or_default();
    }
    debug!("no tags found, using latest commit");

    git(repo, &["log", "-1", SUBJECT_FORMAT])
        .await
        .unwrap_or_default()
}
