//! Copy policy: which template entries are skipped and which files are renamed

use std::collections::{HashMap, HashSet};

/// Entries skipped at any depth, matched by base name
const DEFAULT_EXCLUDE: &[&str] = &[
    "node_modules",
    "dist",
    ".git",
    ".idea",
    ".vscode",
    ".husky",
    "pnpm-lock.yaml",
    "cli",
    "docs",
    ".DS_Store",
    // Replaced by PROJECT_README.md
    "README.md",
    // Materialised as .env at the destination root instead
    ".env.example",
];

/// Files renamed on copy (published packages drop dotfiles like .gitignore)
const DEFAULT_RENAME: &[(&str, &str)] = &[
    ("_gitignore", ".gitignore"),
    ("PROJECT_README.md", "README.md"),
];

/// Exclusion and rename tables consulted by the copier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPolicy {
    /// Base names skipped entirely (a directory's subtree is never visited)
    pub exclude: HashSet<String>,

    /// Source base name to destination base name, applied to files only
    pub rename: HashMap<String, String>,

    /// File at the template root that seeds the environment file
    pub env_example: Option<String>,

    /// Environment file created at the destination root if absent
    pub env_file: String,
}

impl CopyPolicy {
    /// Policy with nothing excluded, nothing renamed and no env seeding
    pub fn empty() -> Self {
        Self {
            exclude: HashSet::new(),
            rename: HashMap::new(),
            env_example: None,
            env_file: ".env".to_string(),
        }
    }

    /// Add a base name to the exclusion set
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.insert(name.into());
        self
    }

    /// Add a file rename
    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.rename.insert(from.into(), to.into());
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }

    /// Destination base name for a file; unmapped names pass through
    pub fn file_name_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.rename.get(name).map(String::as_str).unwrap_or(name)
    }
}

impl Default for CopyPolicy {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            rename: DEFAULT_RENAME
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            env_example: Some(".env.example".to_string()),
            env_file: ".env".to_string(),
        }
    }
}
