//! Charm-style CLI prompts using cliclack

use crate::error::Error;
use crate::product::ProductConfig;
use crate::project::{collect_config, resolve_target_dir, ProjectConfig, Prompter};
use crate::templates;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; skips the name prompt when set
    pub name: Option<String>,

    /// Template directory overriding the product default
    pub template_dir: Option<PathBuf>,
}

/// Prompter backed by cliclack terminal prompts
pub struct CliclackPrompter;

fn prompt_error(err: io::Error) -> anyhow::Error {
    if err.kind() == io::ErrorKind::Interrupted {
        Error::Cancelled.into()
    } else {
        err.into()
    }
}

impl Prompter for CliclackPrompter {
    fn input(&mut self, message: &str, default: &str, required: bool) -> Result<String> {
        let answer: String = if required {
            cliclack::input(message)
                .default_input(default)
                .validate(|value: &String| {
                    if value.trim().is_empty() {
                        Err("Value cannot be empty")
                    } else {
                        Ok(())
                    }
                })
                .interact()
                .map_err(prompt_error)?
        } else {
            let mut prompt = cliclack::input(message).required(false);
            if !default.is_empty() {
                prompt = prompt.placeholder(default);
            }
            prompt.interact().map_err(prompt_error)?
        };

        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn confirm(&mut self, message: &str, initial: bool) -> Result<bool> {
        cliclack::confirm(message)
            .initial_value(initial)
            .interact()
            .map_err(prompt_error)
    }
}

/// Run the interactive create flow
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    print_banner(config, cli_version);
    cliclack::intro(format!("Create a {} project", config.display_name()))?;

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut prompter = CliclackPrompter;
    match create(config, &mut prompter, &args, &cwd).await {
        Err(err) if matches!(err.downcast_ref::<Error>(), Some(Error::Cancelled)) => {
            cliclack::outro_cancel("Project creation cancelled")?;
            Ok(())
        }
        other => other,
    }
}

async fn create<C: ProductConfig, P: Prompter>(
    config: &C,
    prompter: &mut P,
    args: &CreateArgs,
    cwd: &Path,
) -> Result<()> {
    let project = collect_config(config, prompter, args.name.as_deref())?;

    // Validated before the target is resolved, which may delete an existing directory
    let template_dir = args
        .template_dir
        .clone()
        .unwrap_or_else(|| config.template_dir());
    if !template_dir.is_dir() {
        anyhow::bail!("Template directory not found: {}", template_dir.display());
    }

    let Some(project_dir) = resolve_target_dir(prompter, cwd, &project.name).await? else {
        return Err(Error::Cancelled.into());
    };

    create_project(config, &template_dir, &project_dir, &project).await?;
    print_next_steps(config, &project)?;

    Ok(())
}

async fn create_project<C: ProductConfig>(
    config: &C,
    template_dir: &Path,
    project_dir: &Path,
    project: &ProjectConfig,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Creating project {}...", project.name));

    match templates::scaffold(config, template_dir, project_dir, project).await {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files in {}",
                report.files.len(),
                project_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            Err(e)
        }
    }
}

fn print_banner<C: ProductConfig>(config: &C, cli_version: &str) {
    const WIDTH: usize = 54;
    let rule = "═".repeat(WIDTH);
    let blank = " ".repeat(WIDTH);
    let title = config.display_name().to_uppercase();
    let version = format!("v{}", cli_version);

    println!();
    println!("{}", format!("╔{}╗", rule).cyan());
    println!("{}", format!("║{}║", blank).cyan());
    println!("{}", format!("║{:^WIDTH$}║", title).cyan().bold());
    println!("{}", format!("║{}║", blank).cyan());
    println!("{}", format!("║{:^WIDTH$}║", config.tagline()).cyan());
    println!("{}", format!("║{:^WIDTH$}║", version).cyan());
    println!("{}", format!("║{}║", blank).cyan());
    println!("{}", format!("╚{}╝", rule).cyan());
    println!();
}

fn print_next_steps<C: ProductConfig>(config: &C, project: &ProjectConfig) -> Result<()> {
    cliclack::log::success(format!("Project {} created", project.name.bold()))?;

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in config.next_steps(&project.name).iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    let scripts = config.available_scripts();
    if !scripts.is_empty() {
        println!();
        println!("  Available commands");
        println!();
        for (command, summary) in scripts {
            println!("  {:<18} {}", command.bold(), summary.dimmed());
        }
    }
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}
