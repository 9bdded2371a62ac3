//! Product configuration trait for CLI binaries
//!
//! Each scaffolding binary implements this trait to describe its template and
//! how generated projects are cleaned up.

use crate::templates::{CopyPolicy, ManifestPolicy};
use std::path::PathBuf;

/// Configuration trait for scaffolding products
///
/// Implementors define:
/// - Product identity (name, display name)
/// - Where the template tree lives
/// - Copy and manifest policies
/// - Prompt defaults and post-create instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Short tagline shown under the name in the banner
    fn tagline(&self) -> &'static str;

    /// Environment variable name for overriding the template directory
    fn template_dir_env(&self) -> &'static str;

    /// Template directory shipped with the tool
    fn default_template_dir(&self) -> PathBuf;

    /// Project name offered by the name prompt
    fn default_project_name(&self) -> &'static str;

    /// Description used when the user leaves the prompt empty
    fn default_description(&self) -> &'static str;

    /// Commands shown after a project has been created
    fn next_steps(&self, project_name: &str) -> Vec<String>;

    /// Scripts available in a generated project, as (command, summary)
    fn available_scripts(&self) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    fn copy_policy(&self) -> CopyPolicy {
        CopyPolicy::default()
    }

    fn manifest_policy(&self) -> ManifestPolicy {
        ManifestPolicy::default()
    }

    /// Template directory, honoring the environment override
    fn template_dir(&self) -> PathBuf {
        std::env::var_os(self.template_dir_env())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| self.default_template_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::tests::TestProduct;

    #[test]
    fn test_template_dir_env_override() {
        std::env::remove_var("FORGE_TEST_TEMPLATE_DIR");
        assert_eq!(TestProduct.template_dir(), PathBuf::from("template"));

        std::env::set_var("FORGE_TEST_TEMPLATE_DIR", "/opt/forge/template");
        assert_eq!(TestProduct.template_dir(), PathBuf::from("/opt/forge/template"));

        std::env::set_var("FORGE_TEST_TEMPLATE_DIR", "");
        assert_eq!(TestProduct.template_dir(), PathBuf::from("template"));

        std::env::remove_var("FORGE_TEST_TEMPLATE_DIR");
    }

    #[test]
    fn test_default_policies() {
        assert_eq!(TestProduct.copy_policy(), CopyPolicy::default());
        assert_eq!(TestProduct.manifest_policy().seed_version, "0.1.0");
        assert!(TestProduct.available_scripts().is_empty());
    }
}
