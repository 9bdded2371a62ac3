//! package.json patching for generated projects

use crate::error::Error;
use crate::project::ProjectConfig;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Manifest file name at the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Which manifest fields are reset or stripped for a generated project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPolicy {
    /// Version every generated project starts at
    pub seed_version: String,

    /// Top-level fields removed (CLI entry points)
    pub remove_fields: Vec<String>,

    /// Entries removed from `dependencies`
    pub remove_dependencies: Vec<String>,

    /// Entries removed from `devDependencies`
    pub remove_dev_dependencies: Vec<String>,
}

impl Default for ManifestPolicy {
    fn default() -> Self {
        Self {
            seed_version: "0.1.0".to_string(),
            remove_fields: vec!["bin".to_string()],
            remove_dependencies: vec![
                "prompts".to_string(),
                "picocolors".to_string(),
                "execa".to_string(),
            ],
            remove_dev_dependencies: vec!["@types/prompts".to_string()],
        }
    }
}

/// Read and parse a manifest, requiring a top-level JSON object
pub async fn load_manifest(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::ManifestNotObject(path.display().to_string()).into()),
    }
}

/// Serialize a manifest with 2-space indentation and a trailing newline
pub fn render_manifest(manifest: &Map<String, Value>) -> Result<String> {
    let mut out = serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
    out.push('\n');
    Ok(out)
}

pub async fn save_manifest(path: &Path, manifest: &Map<String, Value>) -> Result<()> {
    let content = render_manifest(manifest)?;
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Rewrite identity fields and strip CLI-only sections in place.
///
/// Existing keys keep their position; keys not named by the policy pass through.
pub fn apply_project_config(
    manifest: &mut Map<String, Value>,
    config: &ProjectConfig,
    policy: &ManifestPolicy,
) {
    manifest.insert("name".to_string(), Value::String(config.name.clone()));
    manifest.insert(
        "version".to_string(),
        Value::String(policy.seed_version.clone()),
    );
    manifest.insert(
        "description".to_string(),
        Value::String(config.description.clone()),
    );
    manifest.insert("author".to_string(), Value::String(config.author.clone()));

    for field in &policy.remove_fields {
        manifest.shift_remove(field);
    }

    remove_entries(manifest, "dependencies", &policy.remove_dependencies);
    remove_entries(manifest, "devDependencies", &policy.remove_dev_dependencies);
}

/// Remove keys from a nested mapping; absent mapping or keys are a no-op
fn remove_entries(manifest: &mut Map<String, Value>, section: &str, keys: &[String]) {
    if let Some(Value::Object(entries)) = manifest.get_mut(section) {
        for key in keys {
            if entries.shift_remove(key).is_some() {
                debug!(section, key = key.as_str(), "removed manifest entry");
            }
        }
    }
}

/// Patch the manifest in `project_dir` for a freshly generated project
pub async fn patch_manifest(
    project_dir: &Path,
    config: &ProjectConfig,
    policy: &ManifestPolicy,
) -> Result<()> {
    let path = project_dir.join(MANIFEST_FILE);
    let mut manifest = load_manifest(&path).await?;
    apply_project_config(&mut manifest, config, policy);
    save_manifest(&path, &manifest).await
}

/// Overwrite only the `version` field of a manifest file
pub async fn set_manifest_version(path: &Path, version: &str) -> Result<()> {
    let mut manifest = load_manifest(path).await?;
    manifest.insert("version".to_string(), Value::String(version.to_string()));
    save_manifest(path, &manifest).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn config() -> ProjectConfig {
        ProjectConfig {
            name: "orders-api".to_string(),
            description: "Order service".to_string(),
            author: "Jo".to_string(),
        }
    }

    #[test]
    fn test_identity_fields_overwritten() {
        let mut manifest = as_map(json!({
            "name": "backend-forge",
            "version": "3.4.5",
            "description": "scaffold",
            "author": "someone",
        }));

        apply_project_config(&mut manifest, &config(), &ManifestPolicy::default());

        assert_eq!(manifest["name"], "orders-api");
        assert_eq!(manifest["version"], "0.1.0");
        assert_eq!(manifest["description"], "Order service");
        assert_eq!(manifest["author"], "Jo");
    }

    #[test]
    fn test_cli_only_entries_removed() {
        let mut manifest = as_map(json!({
            "name": "backend-forge",
            "bin": { "forge": "./dist/cli/index.js" },
            "dependencies": {
                "fastify": "^5.0.0",
                "prompts": "^2.4.2",
                "picocolors": "^1.1.0",
                "execa": "^9.0.0"
            },
            "devDependencies": {
                "@types/prompts": "^2.4.9",
                "typescript": "^5.6.0"
            }
        }));

        apply_project_config(&mut manifest, &config(), &ManifestPolicy::default());

        assert!(!manifest.contains_key("bin"));
        assert_eq!(manifest["dependencies"], json!({ "fastify": "^5.0.0" }));
        assert_eq!(manifest["devDependencies"], json!({ "typescript": "^5.6.0" }));
    }

    #[test]
    fn test_absent_sections_are_tolerated() {
        let mut manifest = as_map(json!({ "private": true }));
        apply_project_config(&mut manifest, &config(), &ManifestPolicy::default());

        assert_eq!(manifest["private"], true);
        assert!(!manifest.contains_key("dependencies"));
        assert!(!manifest.contains_key("devDependencies"));
    }

    #[test]
    fn test_key_order_preserved() {
        let mut manifest = as_map(json!({
            "scripts": { "dev": "tsx watch src/index.ts" },
            "name": "backend-forge",
            "type": "module",
            "version": "1.0.0"
        }));

        apply_project_config(&mut manifest, &config(), &ManifestPolicy::default());
        let keys: Vec<&str> = manifest.keys().map(String::as_str).collect();

        assert_eq!(
            keys,
            vec!["scripts", "name", "type", "version", "description", "author"]
        );
    }

    #[test]
    fn test_render_uses_two_space_indent_and_newline() {
        let manifest = as_map(json!({ "name": "x", "nested": { "a": 1 } }));
        let rendered = render_manifest(&manifest).unwrap();
        assert_eq!(rendered, "{\n  \"name\": \"x\",\n  \"nested\": {\n    \"a\": 1\n  }\n}\n");
    }

    #[tokio::test]
    async fn test_non_object_manifest_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = load_manifest(&path).await.unwrap_err();
        assert!(err.to_string().contains("is not a JSON object"));
    }

    #[tokio::test]
    async fn test_invalid_json_leaves_file_untouched() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();

        let result = patch_manifest(dir.path(), &config(), &ManifestPolicy::default()).await;

        assert!(result.is_err());
        assert_eq!(
            std::fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap(),
            "{ not json"
        );
    }

    #[tokio::test]
    async fn test_set_manifest_version_only_touches_version() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, "{\"name\":\"app\",\"version\":\"1.0.0\",\"private\":true}").unwrap();

        set_manifest_version(&path, "1.0.1").await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n  \"name\": \"app\",\n  \"version\": \"1.0.1\",\n  \"private\": true\n}\n"
        );
    }

    #[tokio::test]
    async fn test_missing_manifest_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = patch_manifest(dir.path(), &config(), &ManifestPolicy::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
