//! Forge Core - Shared library for the backend project scaffolder
//!
//! This library provides the functionality behind two independent CLIs:
//! `forge`, which creates a new project from the bundled template, and
//! `forge-bump`, which bumps the release version of the tool itself.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - Template copying, manifest patching, version bumps
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait, project collection
//!   through the `Prompter` seam
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use forge_core::{templates, CopyPolicy};
//!
//! let report = templates::copy_template(&template_dir, &target_dir, &CopyPolicy::default()).await?;
//! println!("copied {} files", report.files.len());
//! ```

pub mod error;
pub mod product;
pub mod project;
pub mod release;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::Error;
pub use product::ProductConfig;
pub use project::{collect_config, resolve_target_dir, ProjectConfig, Prompter};
pub use release::{bump_release, plan_bump, BumpKind, BumpOutcome, ReleaseFiles, Version};
pub use templates::{copy_template, patch_manifest, CopyPolicy, CopyReport, ManifestPolicy};

#[cfg(feature = "tui")]
pub use tui::run;
