//! Project metadata collection and target directory resolution

use crate::error::Error;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Metadata written into the generated project's manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub author: String,
}

/// Interactive question source
///
/// The terminal implementation lives in the `tui` module; implementations
/// return [`Error::Cancelled`] when the user aborts a prompt.
pub trait Prompter {
    /// Ask for a line of text. `default` is used when the answer is empty.
    /// When `required` is set the prompt must not accept an empty answer.
    fn input(&mut self, message: &str, default: &str, required: bool) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, initial: bool) -> Result<bool>;
}

/// Collect name, description and author for a new project.
///
/// A non-empty `initial_name` skips the name prompt and is used verbatim.
/// Empty description and author answers fall back to the product defaults.
pub fn collect_config<C: ProductConfig, P: Prompter>(
    product: &C,
    prompter: &mut P,
    initial_name: Option<&str>,
) -> Result<ProjectConfig> {
    let name = match initial_name.filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => {
            let answer =
                prompter.input("Project name", product.default_project_name(), true)?;
            if answer.trim().is_empty() {
                return Err(Error::EmptyInput("Project name").into());
            }
            answer
        }
    };

    let description = prompter.input("Project description", product.default_description(), false)?;
    let author = prompter.input("Author", "", false)?;

    Ok(ProjectConfig {
        name,
        description: non_empty_or(description, product.default_description()),
        author,
    })
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Resolve where the project will be created, relative to `cwd`.
///
/// If the path already exists the user is asked whether to overwrite it.
/// Declining returns `Ok(None)`; accepting deletes the existing entry first.
pub async fn resolve_target_dir<P: Prompter>(
    prompter: &mut P,
    cwd: &Path,
    project_name: &str,
) -> Result<Option<PathBuf>> {
    let target = cwd.join(project_name);

    let metadata = match fs::symlink_metadata(&target).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Some(target)),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to inspect {}", target.display()))
        }
    };

    let overwrite = prompter.confirm(
        &format!("Directory {} already exists. Overwrite it?", project_name),
        false,
    )?;
    if !overwrite {
        return Ok(None);
    }

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(&target).await
    } else {
        fs::remove_file(&target).await
    };
    removed.with_context(|| format!("Failed to remove {}", target.display()))?;
    debug!(path = %target.display(), "removed existing target");

    Ok(Some(target))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Prompter that replays canned answers and records the questions asked
    #[derive(Default)]
    pub(crate) struct ScriptedPrompter {
        pub inputs: VecDeque<String>,
        pub confirms: VecDeque<bool>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(inputs: &[&str], confirms: &[bool]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                confirms: confirms.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&mut self, message: &str, default: &str, _required: bool) -> Result<String> {
            self.asked.push(message.to_string());
            let answer = self.inputs.pop_front().ok_or(Error::Cancelled)?;
            Ok(if answer.is_empty() { default.to_string() } else { answer })
        }

        fn confirm(&mut self, message: &str, _initial: bool) -> Result<bool> {
            self.asked.push(message.to_string());
            Ok(self.confirms.pop_front().ok_or(Error::Cancelled)?)
        }
    }

    #[derive(Clone)]
    pub(crate) struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "test"
        }
        fn display_name(&self) -> &'static str {
            "Test"
        }
        fn tagline(&self) -> &'static str {
            "test scaffold"
        }
        fn template_dir_env(&self) -> &'static str {
            "FORGE_TEST_TEMPLATE_DIR"
        }
        fn default_template_dir(&self) -> PathBuf {
            PathBuf::from("template")
        }
        fn default_project_name(&self) -> &'static str {
            "my-app"
        }
        fn default_description(&self) -> &'static str {
            "A test project"
        }
        fn next_steps(&self, project_name: &str) -> Vec<String> {
            vec![format!("cd {}", project_name)]
        }
    }

    #[test]
    fn test_supplied_name_skips_name_prompt() {
        let mut prompter = ScriptedPrompter::new(&["An API", "Sam"], &[]);
        let config = collect_config(&TestProduct, &mut prompter, Some("api")).unwrap();

        assert_eq!(config.name, "api");
        assert_eq!(config.description, "An API");
        assert_eq!(config.author, "Sam");
        assert_eq!(prompter.asked, vec!["Project description", "Author"]);
    }

    #[test]
    fn test_empty_answers_use_defaults() {
        let mut prompter = ScriptedPrompter::new(&["", "", ""], &[]);
        let config = collect_config(&TestProduct, &mut prompter, None).unwrap();

        assert_eq!(config.name, "my-app");
        assert_eq!(config.description, "A test project");
        assert_eq!(config.author, "");
    }

    #[test]
    fn test_empty_supplied_name_prompts() {
        let mut prompter = ScriptedPrompter::new(&["svc", "", ""], &[]);
        let config = collect_config(&TestProduct, &mut prompter, Some("")).unwrap();

        assert_eq!(config.name, "svc");
        assert_eq!(prompter.asked[0], "Project name");
    }

    #[test]
    fn test_cancel_propagates() {
        let mut prompter = ScriptedPrompter::new(&["svc"], &[]);
        let err = collect_config(&TestProduct, &mut prompter, None).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_missing_target_resolves_without_prompt() {
        let cwd = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::default();

        let target = resolve_target_dir(&mut prompter, cwd.path(), "fresh")
            .await
            .unwrap();

        assert_eq!(target, Some(cwd.path().join("fresh")));
        assert!(prompter.asked.is_empty());
    }

    #[tokio::test]
    async fn test_declined_overwrite_keeps_directory() {
        let cwd = TempDir::new().unwrap();
        std::fs::create_dir(cwd.path().join("taken")).unwrap();
        std::fs::write(cwd.path().join("taken/keep.txt"), "keep").unwrap();
        let mut prompter = ScriptedPrompter::new(&[], &[false]);

        let target = resolve_target_dir(&mut prompter, cwd.path(), "taken")
            .await
            .unwrap();

        assert_eq!(target, None);
        assert!(cwd.path().join("taken/keep.txt").exists());
    }

    #[tokio::test]
    async fn test_accepted_overwrite_removes_directory() {
        let cwd = TempDir::new().unwrap();
        std::fs::create_dir_all(cwd.path().join("taken/nested")).unwrap();
        std::fs::write(cwd.path().join("taken/nested/old.txt"), "old").unwrap();
        let mut prompter = ScriptedPrompter::new(&[], &[true]);

        let target = resolve_target_dir(&mut prompter, cwd.path(), "taken")
            .await
            .unwrap();

        assert_eq!(target, Some(cwd.path().join("taken")));
        assert!(!cwd.path().join("taken").exists());
    }

    #[tokio::test]
    async fn test_uninspectable_target_is_an_error() {
        let cwd = TempDir::new().unwrap();
        let not_a_dir = cwd.path().join("plain-file");
        std::fs::write(&not_a_dir, "x").unwrap();
        let mut prompter = ScriptedPrompter::new(&[], &[]);

        let err = resolve_target_dir(&mut prompter, &not_a_dir, "svc")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to inspect"));
        assert!(prompter.asked.is_empty());
        assert!(not_a_dir.is_file());
    }
}
