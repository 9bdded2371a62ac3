//! Template copying and manifest patching
//!
//! This module provides:
//! - Copy policy (exclusion set and file rename map)
//! - Recursive template copying honoring that policy
//! - package.json patching for the generated project

pub mod copier;
pub mod manifest;
pub mod policy;

use crate::product::ProductConfig;
use crate::project::ProjectConfig;
use anyhow::Result;
use std::path::Path;

pub use copier::{copy_template, CopyReport};
pub use manifest::{patch_manifest, ManifestPolicy, MANIFEST_FILE};
pub use policy::CopyPolicy;

/// Copy the product's template into `target_dir` and patch its manifest
pub async fn scaffold<C: ProductConfig>(
    product: &C,
    template_dir: &Path,
    target_dir: &Path,
    project: &ProjectConfig,
) -> Result<CopyReport> {
    let report = copy_template(template_dir, target_dir, &product.copy_policy()).await?;
    patch_manifest(target_dir, project, &product.manifest_policy()).await?;
    Ok(report)
}
