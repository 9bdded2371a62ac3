//! Template tree copying with exclusion and rename policy

use crate::templates::policy::CopyPolicy;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// What a copy wrote into the target directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Files written, relative to the target directory
    pub files: Vec<PathBuf>,

    /// Directories created or reused below the target directory
    pub directories: usize,

    /// Whether the environment file was seeded from the template's example
    pub env_created: bool,
}

/// Copy a template tree into `target_dir`.
///
/// Entries whose base name is excluded are skipped at every depth, files are
/// renamed per the policy, and existing destination files are overwritten.
/// Stale destination entries are left in place. Any I/O error aborts the copy
/// and leaves whatever was already written.
pub async fn copy_template(
    template_dir: &Path,
    target_dir: &Path,
    policy: &CopyPolicy,
) -> Result<CopyReport> {
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let mut report = CopyReport::default();
    let mut pending: Vec<(PathBuf, PathBuf)> =
        vec![(template_dir.to_path_buf(), target_dir.to_path_buf())];

    while let Some((src_dir, dest_dir)) = pending.pop() {
        let mut entries = fs::read_dir(&src_dir)
            .await
            .with_context(|| format!("Failed to read directory: {}", src_dir.display()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to read directory: {}", src_dir.display()))?
        {
            let name = entry.file_name();
            let src_path = entry.path();

            if name.to_str().is_some_and(|n| policy.is_excluded(n)) {
                debug!(path = %src_path.display(), "skipping excluded entry");
                continue;
            }

            let metadata = fs::metadata(&src_path)
                .await
                .with_context(|| format!("Failed to stat {}", src_path.display()))?;

            if metadata.is_dir() {
                let dest_path = dest_dir.join(&name);
                fs::create_dir_all(&dest_path).await.with_context(|| {
                    format!("Failed to create directory: {}", dest_path.display())
                })?;
                report.directories += 1;
                pending.push((src_path, dest_path));
            } else {
                let dest_path = dest_dir.join(destination_name(&name, policy));
                fs::copy(&src_path, &dest_path).await.with_context(|| {
                    format!(
                        "Failed to copy {} to {}",
                        src_path.display(),
                        dest_path.display()
                    )
                })?;
                debug!(from = %src_path.display(), to = %dest_path.display(), "copied file");
                report.files.push(relative_to(&dest_path, target_dir));
            }
        }
    }

    report.env_created = seed_env_file(template_dir, target_dir, policy).await?;
    if report.env_created {
        report.files.push(PathBuf::from(&policy.env_file));
    }

    Ok(report)
}

/// Copy the root example environment file to the env file, only if absent
async fn seed_env_file(template_dir: &Path, target_dir: &Path, policy: &CopyPolicy) -> Result<bool> {
    let Some(example) = &policy.env_example else {
        return Ok(false);
    };

    let example_path = template_dir.join(example);
    let env_path = target_dir.join(&policy.env_file);

    if !is_file(&example_path).await || fs::try_exists(&env_path).await.unwrap_or(false) {
        return Ok(false);
    }

    fs::copy(&example_path, &env_path)
        .await
        .with_context(|| format!("Failed to create {}", env_path.display()))?;
    debug!(path = %env_path.display(), "seeded environment file");

    Ok(true)
}

fn destination_name(name: &OsString, policy: &CopyPolicy) -> OsString {
    match name.to_str() {
        Some(n) => OsString::from(policy.file_name_for(n)),
        None => name.clone(),
    }
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).unwrap_or(path).to_path_buf()
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false)
}
